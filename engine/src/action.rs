//! Actions, the closed set of state transitions.
//!
//! Every mutation of the synchronization state is expressed as an action
//! and funneled through [`SyncState::apply`](crate::SyncState::apply).
//! One variant per transition keeps the reducer exhaustive; there is no
//! catch-all.

use crate::{Hike, HikeId, SyncError};

/// A state transition of the synchronization store.
///
/// The three operation classes (fetch, save, delete) are orthogonal; each
/// follows `Started -> Succeeded | Failed`. Remote-origin change events
/// reuse `SaveSucceeded` and `DeleteSucceeded`, so local mutations and
/// pushed changes share one merge path.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The initial bulk fetch was issued.
    FetchStarted,
    /// The fetch settled; the payload replaces the whole collection.
    FetchSucceeded(Vec<Hike>),
    /// The fetch failed; the collection stays absent.
    FetchFailed(SyncError),

    /// A create or update round trip was issued.
    SaveStarted,
    /// The server confirmed a record; upsert its canonical form.
    SaveSucceeded(Hike),
    /// The save round trip failed.
    SaveFailed(SyncError),

    /// A delete round trip was issued.
    DeleteStarted,
    /// The server (or a pushed event) confirmed a removal.
    DeleteSucceeded(HikeId),
    /// The delete round trip failed; the record stays put.
    DeleteFailed(SyncError),
}
