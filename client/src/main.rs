//! Waymark demo client: connect, sync, and log every state change.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use waymark_client::{Config, HttpGateway, SyncStore, WsChangeStream};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "waymark_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Connecting to {}", config.api_url);

    let store = SyncStore::new(Arc::new(HttpGateway::new(&config.api_url)));
    let stream = WsChangeStream::connect(&config.stream_url).await?;
    store.start(Box::new(stream));

    let mut updates = store.subscribe();
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                tracing::info!(
                    records = state.collection.as_ref().map_or(0, |c| c.len()),
                    fetching = state.fetching,
                    saving = state.saving,
                    deleting = state.deleting,
                    fetch_error = ?state.fetch_error,
                    "state changed"
                );
            }
        }
    }

    store.stop();
    tracing::info!("bye");

    Ok(())
}
