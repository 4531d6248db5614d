//! The hike record, the unit of synchronization.

use crate::HikeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single hike record.
///
/// A hike with a non-empty `id` has been persisted remotely at least once;
/// an empty `id` marks a draft that exists only in an edit form and is
/// never part of the synchronized collection. The server assigns the id on
/// the first successful create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hike {
    /// Server-assigned identifier, empty until first persisted.
    #[serde(default)]
    pub id: HikeId,
    /// Starting point of the route.
    pub start: String,
    /// End point of the route.
    pub destination: String,
    /// Route length in kilometres.
    pub distance: u32,
    /// When the hike took place (or is planned).
    pub date: DateTime<Utc>,
    /// Whether the hike has been completed.
    pub completed: bool,
}

impl Hike {
    /// Create a record with all fields set.
    pub fn new(
        id: impl Into<HikeId>,
        start: impl Into<String>,
        destination: impl Into<String>,
        distance: u32,
        date: DateTime<Utc>,
        completed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            start: start.into(),
            destination: destination.into(),
            distance,
            date,
            completed,
        }
    }

    /// Whether this record has been persisted remotely.
    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}
