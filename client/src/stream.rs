//! The change-stream client: one long-lived subscription to the push channel.

use async_trait::async_trait;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use waymark_engine::{ChangeEvent, Result, SyncError};

/// A subscription delivering remote-origin change events.
///
/// `next_event` suspends until the next decodable event; `None` means the
/// subscription ended. Connection-level events are logged, never surfaced
/// as state. A trait so tests can script events without a server.
#[async_trait]
pub trait ChangeStream: Send {
    /// Wait for the next change event.
    async fn next_event(&mut self) -> Option<ChangeEvent>;

    /// Close the subscription.
    async fn close(&mut self);
}

/// WebSocket-backed change stream.
pub struct WsChangeStream {
    ws: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsChangeStream {
    /// Open the subscription at `url` (e.g. `ws://localhost:3000`).
    pub async fn connect(url: &str) -> Result<Self> {
        let (ws, _) = connect_async(url)
            .await
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        tracing::info!(%url, "change stream connected");
        Ok(Self { ws })
    }
}

#[async_trait]
impl ChangeStream for WsChangeStream {
    async fn next_event(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.ws.next().await {
                Some(Ok(Message::Text(text))) => match serde_json::from_str(&text) {
                    Ok(event) => return Some(event),
                    Err(e) => {
                        // One bad message must not cost the subscription.
                        tracing::warn!(error = %e, "malformed change message, skipping");
                    }
                },
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("change stream closed by server");
                    return None;
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                Some(Ok(other)) => {
                    tracing::warn!("unsupported change message kind: {other:?}");
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "change stream error");
                    return None;
                }
                None => return None,
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.ws.close(None).await {
            tracing::debug!(error = %e, "change stream close");
        }
        tracing::info!("change stream disconnected");
    }
}
