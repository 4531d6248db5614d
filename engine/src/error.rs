//! Error types shared between the engine and the client.
//!
//! The error lives in the engine because the synchronization state stores
//! the last failure per operation class; the client converts its transport
//! failures into these values at the orchestration boundary.

use crate::HikeId;
use thiserror::Error;

/// A failure of a remote operation.
///
/// Cancellation is deliberately absent: a result discarded after teardown
/// is not an error and produces no state transition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The gateway or stream connection failed.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The targeted record does not exist server-side.
    #[error("record not found: {0}")]
    NotFound(HikeId),

    /// The operation requires a persisted record id.
    #[error("record has no id")]
    MissingId,
}

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
