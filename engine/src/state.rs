//! The synchronization state and its reducer.
//!
//! [`SyncState`] is the single authoritative in-memory state. All mutation
//! goes through [`SyncState::apply`], which the client calls from exactly
//! one serialization point, so reads always observe a consistent snapshot.

use crate::{Action, Hike, HikeId, SyncError};
use serde::{Deserialize, Serialize};

/// The ordered, id-keyed collection of hikes.
///
/// Holds at most one record per id. Order is the initial display order:
/// fetched records keep their server order, records unknown at upsert time
/// go to the front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    hikes: Vec<Hike>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<&Hike> {
        self.hikes.iter().find(|h| h.id == id)
    }

    /// Check whether a record with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Insert or replace a record, keyed by id.
    ///
    /// A known id is replaced in place, preserving its position; an unknown
    /// id is inserted at the front. Applying the same upsert twice yields
    /// the same collection, which makes merging order-of-arrival tolerant:
    /// whichever upsert applies last wins, field-for-field.
    pub fn upsert(&mut self, hike: Hike) {
        match self.hikes.iter_mut().find(|h| h.id == hike.id) {
            Some(slot) => *slot = hike,
            None => self.hikes.insert(0, hike),
        }
    }

    /// Remove a record by id, returning it if it was present.
    ///
    /// Removing an absent id is a no-op, so a delete event racing an
    /// already-removed record is harmless.
    pub fn remove(&mut self, id: &str) -> Option<Hike> {
        let index = self.hikes.iter().position(|h| h.id == id)?;
        Some(self.hikes.remove(index))
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Hike> {
        self.hikes.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.hikes.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.hikes.is_empty()
    }
}

impl From<Vec<Hike>> for Collection {
    /// Build a collection from a fetched list, preserving order.
    ///
    /// Should the server ever repeat an id, the first occurrence wins, so
    /// the one-record-per-id invariant holds from construction.
    fn from(hikes: Vec<Hike>) -> Self {
        let mut collection = Collection::new();
        for hike in hikes {
            if !collection.contains(&hike.id) {
                collection.hikes.push(hike);
            }
        }
        collection
    }
}

/// The full state owned by the synchronization store.
///
/// Each operation class carries an in-flight flag and a last-error slot.
/// A flag is true only between that class's `Started` and terminal
/// transition, and starting a new operation clears the class's error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncState {
    /// The synchronized collection, absent until the first successful fetch.
    pub collection: Option<Collection>,
    /// A fetch round trip is in flight.
    pub fetching: bool,
    /// The last fetch failure, cleared when a new fetch starts.
    pub fetch_error: Option<SyncError>,
    /// A save round trip is in flight.
    pub saving: bool,
    /// The last save failure, cleared when a new save starts.
    pub save_error: Option<SyncError>,
    /// A delete round trip is in flight.
    pub deleting: bool,
    /// The last delete failure, cleared when a new delete starts.
    pub delete_error: Option<SyncError>,
}

impl SyncState {
    /// Create the initial state: nothing fetched, nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one transition.
    ///
    /// This is the reducer. `SaveSucceeded` and `DeleteSucceeded` arriving
    /// before the first fetch settles materialize an empty collection
    /// rather than dropping the event.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::FetchStarted => {
                self.fetching = true;
                self.fetch_error = None;
            }
            Action::FetchSucceeded(hikes) => {
                self.collection = Some(hikes.into());
                self.fetching = false;
            }
            Action::FetchFailed(err) => {
                self.fetch_error = Some(err);
                self.fetching = false;
            }
            Action::SaveStarted => {
                self.saving = true;
                self.save_error = None;
            }
            Action::SaveSucceeded(hike) => {
                self.collection.get_or_insert_with(Collection::new).upsert(hike);
                self.saving = false;
            }
            Action::SaveFailed(err) => {
                self.save_error = Some(err);
                self.saving = false;
            }
            Action::DeleteStarted => {
                self.deleting = true;
                self.delete_error = None;
            }
            Action::DeleteSucceeded(id) => {
                self.collection.get_or_insert_with(Collection::new).remove(&id);
                self.deleting = false;
            }
            Action::DeleteFailed(err) => {
                self.delete_error = Some(err);
                self.deleting = false;
            }
        }
    }

    /// Look up a record by id across the optional collection.
    pub fn get(&self, id: &str) -> Option<&Hike> {
        self.collection.as_ref()?.get(id)
    }

    /// Ids currently in the collection, in display order.
    pub fn ids(&self) -> Vec<HikeId> {
        self.collection
            .iter()
            .flat_map(|c| c.iter())
            .map(|h| h.id.clone())
            .collect()
    }
}
