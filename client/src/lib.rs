//! # Waymark Client
//!
//! The I/O half of the Waymark sync layer: a REST gateway, a WebSocket
//! change-stream client, and the [`SyncStore`] that drives the
//! `waymark-engine` reducer from all three input sources (initial fetch,
//! user intents, pushed change events).
//!
//! ```no_run
//! use std::sync::Arc;
//! use waymark_client::{Config, HttpGateway, SyncStore, WsChangeStream};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let store = SyncStore::new(Arc::new(HttpGateway::new(&config.api_url)));
//! let stream = WsChangeStream::connect(&config.stream_url).await?;
//! store.start(Box::new(stream));
//!
//! let mut updates = store.subscribe();
//! updates.changed().await?;
//! println!("{:?}", store.state().collection);
//!
//! store.stop();
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod gateway;
pub mod store;
pub mod stream;

pub use config::{Config, ConfigError};
pub use gateway::{Gateway, HttpGateway};
pub use store::SyncStore;
pub use stream::{ChangeStream, WsChangeStream};

// The state and record types consumers read.
pub use waymark_engine::{Action, ChangeEvent, Collection, Hike, HikeId, SyncError, SyncState};
