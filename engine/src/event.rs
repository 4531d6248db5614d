//! Change events pushed over the stream by other sessions.
//!
//! Wire shape: `{ "type": "created"|"updated"|"deleted", "payload": ... }`.
//! Created and updated carry a full record; for deleted the id alone
//! suffices, extra payload fields are ignored.

use crate::{Action, Hike, HikeId};
use serde::{Deserialize, Serialize};

/// Payload of a `deleted` event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedHike {
    /// Id of the removed record.
    pub id: HikeId,
}

/// A remote-origin mutation announced on the change stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum ChangeEvent {
    /// Another session created a record.
    Created(Hike),
    /// Another session updated a record.
    Updated(Hike),
    /// Another session deleted a record.
    Deleted(DeletedHike),
}

impl ChangeEvent {
    /// The transition this event routes through.
    ///
    /// Created and updated share the save-succeeded upsert, deleted the
    /// delete-succeeded removal, so pushed changes and confirmed local
    /// mutations merge through one code path.
    pub fn into_action(self) -> Action {
        match self {
            ChangeEvent::Created(hike) | ChangeEvent::Updated(hike) => {
                Action::SaveSucceeded(hike)
            }
            ChangeEvent::Deleted(deleted) => Action::DeleteSucceeded(deleted.id),
        }
    }

    /// Id of the record this event concerns.
    pub fn record_id(&self) -> &str {
        match self {
            ChangeEvent::Created(hike) | ChangeEvent::Updated(hike) => &hike.id,
            ChangeEvent::Deleted(deleted) => &deleted.id,
        }
    }
}
