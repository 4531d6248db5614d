//! The synchronization store.
//!
//! Owns the authoritative [`SyncState`] and coordinates the gateway and
//! the change stream. Every transition funnels through one
//! `watch::Sender::send_modify` call, so reducer invocations are strictly
//! serialized even though the triggering I/O runs concurrently, and every
//! read is a consistent snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use waymark_engine::{Action, Hike, SyncError, SyncState};

use crate::gateway::Gateway;
use crate::stream::ChangeStream;

/// The reducer-driven store keeping the collection in sync.
///
/// Lifecycle: [`new`](SyncStore::new), then [`start`](SyncStore::start)
/// once to trigger the initial fetch and open the change-stream
/// subscription, then [`stop`](SyncStore::stop) at teardown. Consumers
/// read snapshots via [`state`](SyncStore::state) or follow updates via
/// [`subscribe`](SyncStore::subscribe), and issue intents via
/// [`save`](SyncStore::save) and [`delete`](SyncStore::delete).
pub struct SyncStore {
    gateway: Arc<dyn Gateway>,
    state: watch::Sender<SyncState>,
    /// Teardown signal. Receivers are captured when a task starts; a task
    /// observing `true` discards its result instead of dispatching.
    shutdown: watch::Sender<bool>,
    started: AtomicBool,
}

impl SyncStore {
    /// Create a store over a gateway. Nothing runs until [`start`](Self::start).
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let (state, _) = watch::channel(SyncState::new());
        let (shutdown, _) = watch::channel(false);
        Self {
            gateway,
            state,
            shutdown,
            started: AtomicBool::new(false),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> SyncState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.state.subscribe()
    }

    /// Start the store: issue the one-shot initial fetch and consume the
    /// change stream. Calling more than once is a no-op.
    pub fn start(&self, stream: Box<dyn ChangeStream>) {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!("store already started, ignoring");
            return;
        }
        self.spawn_fetch();
        self.spawn_stream(stream);
    }

    /// Request teardown: in-flight results are discarded and the stream
    /// task closes its subscription.
    pub fn stop(&self) {
        tracing::info!("store teardown requested");
        self.shutdown.send_replace(true);
    }

    /// Save a record: create when the id is empty, update otherwise.
    ///
    /// The collection only ever reflects confirmed state; on success it
    /// receives the server's canonical record (which carries the assigned
    /// id for creates), on failure it is left untouched and the error is
    /// both recorded in the state and returned.
    pub async fn save(&self, hike: Hike) -> Result<Hike, SyncError> {
        tracing::debug!(id = %hike.id, "save started");
        self.dispatch(Action::SaveStarted);

        let result = if hike.is_persisted() {
            self.gateway.update(&hike).await
        } else {
            self.gateway.create(&hike).await
        };

        match result {
            Ok(saved) => {
                tracing::debug!(id = %saved.id, "save succeeded");
                self.dispatch(Action::SaveSucceeded(saved.clone()));
                Ok(saved)
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.dispatch(Action::SaveFailed(e.clone()));
                Err(e)
            }
        }
    }

    /// Delete the record with this id. No optimistic removal: the record
    /// stays in the collection until the server confirms.
    pub async fn delete(&self, id: &str) -> Result<(), SyncError> {
        if id.is_empty() {
            return Err(SyncError::MissingId);
        }

        tracing::debug!(%id, "delete started");
        self.dispatch(Action::DeleteStarted);

        match self.gateway.delete(id).await {
            Ok(()) => {
                tracing::debug!(%id, "delete succeeded");
                self.dispatch(Action::DeleteSucceeded(id.to_string()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "delete failed");
                self.dispatch(Action::DeleteFailed(e.clone()));
                Err(e)
            }
        }
    }

    fn dispatch(&self, action: Action) {
        dispatch(&self.state, action);
    }

    fn spawn_fetch(&self) {
        let gateway = Arc::clone(&self.gateway);
        let state = self.state.clone();
        let mut shutdown = self.shutdown.subscribe();
        let teardown = shutdown.clone();

        tokio::spawn(async move {
            tracing::debug!("initial fetch started");
            dispatch(&state, Action::FetchStarted);

            tokio::select! {
                _ = shutdown.changed() => {
                    tracing::debug!("initial fetch superseded by teardown");
                }
                result = gateway.list() => {
                    if *teardown.borrow() {
                        tracing::debug!("initial fetch settled after teardown, discarding");
                        return;
                    }
                    match result {
                        Ok(hikes) => {
                            tracing::debug!(count = hikes.len(), "initial fetch succeeded");
                            dispatch(&state, Action::FetchSucceeded(hikes));
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "initial fetch failed");
                            dispatch(&state, Action::FetchFailed(e));
                        }
                    }
                }
            }
        });
    }

    fn spawn_stream(&self, mut stream: Box<dyn ChangeStream>) {
        let state = self.state.clone();
        let mut shutdown = self.shutdown.subscribe();
        let teardown = shutdown.clone();

        tokio::spawn(async move {
            tracing::debug!("change stream subscription opened");
            loop {
                tokio::select! {
                    _ = shutdown.changed() => break,
                    event = stream.next_event() => {
                        let Some(event) = event else { break };
                        if *teardown.borrow() {
                            continue;
                        }
                        tracing::debug!(id = %event.record_id(), "change event received");
                        dispatch(&state, event.into_action());
                    }
                }
            }
            stream.close().await;
            tracing::debug!("change stream task finished");
        });
    }
}

impl Drop for SyncStore {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}

fn dispatch(state: &watch::Sender<SyncState>, action: Action) {
    state.send_modify(|s| s.apply(action));
}
