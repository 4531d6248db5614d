//! # Waymark Engine
//!
//! The deterministic core of the Waymark sync layer.
//!
//! This crate holds the reducer-driven state machine that keeps one
//! in-memory collection of hike records consistent across three concurrent
//! input sources: the initial bulk fetch, user-initiated save/delete round
//! trips, and change events pushed by other sessions. It has no I/O and no
//! async; the `waymark-client` crate drives it and guarantees that every
//! [`SyncState::apply`] call happens at a single serialization point.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine knows nothing about HTTP or WebSockets
//! - **Deterministic**: the same action sequence always produces the same state
//! - **Closed transitions**: [`Action`] is a closed enum, the reducer match
//!   is exhaustive, there is no default fallthrough
//!
//! ## Merge model
//!
//! Local save results and pushed `created`/`updated` events share one
//! upsert (replace in place by id, else insert at front); local delete
//! results and pushed `deleted` events share one removal (absent id is a
//! no-op). Both are idempotent, so interleavings settle on whichever
//! mutation applied last, with no field-level merging.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use waymark_engine::{Action, Hike, SyncState};
//!
//! let mut state = SyncState::new();
//!
//! let hike = Hike::new(
//!     "h1",
//!     "Zermatt",
//!     "Gornergrat",
//!     10,
//!     Utc.with_ymd_and_hms(2024, 7, 14, 6, 30, 0).unwrap(),
//!     false,
//! );
//!
//! state.apply(Action::FetchStarted);
//! state.apply(Action::FetchSucceeded(vec![hike.clone()]));
//!
//! assert!(!state.fetching);
//! assert_eq!(state.get("h1"), Some(&hike));
//! ```

pub mod action;
pub mod error;
pub mod event;
pub mod record;
pub mod state;

// Re-export main types at crate root
pub use action::Action;
pub use error::{Result, SyncError};
pub use event::{ChangeEvent, DeletedHike};
pub use record::Hike;
pub use state::{Collection, SyncState};

/// Identifier of a hike record, assigned by the server.
pub type HikeId = String;
