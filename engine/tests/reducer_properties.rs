//! Property tests for the reducer.
//!
//! These pin down the merge guarantees: upserts are idempotent, removals
//! tolerate absent ids, and no action sequence can ever produce two
//! records with the same id.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use waymark_engine::{Action, Hike, SyncError, SyncState};

fn arb_hike() -> impl Strategy<Value = Hike> {
    (
        "[a-z0-9]{1,4}",
        "[A-Za-z ]{0,12}",
        "[A-Za-z ]{0,12}",
        0u32..500,
        0i64..4_000_000_000,
        any::<bool>(),
    )
        .prop_map(|(id, start, destination, distance, secs, completed)| {
            Hike::new(
                id,
                start,
                destination,
                distance,
                Utc.timestamp_opt(secs, 0).unwrap(),
                completed,
            )
        })
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::FetchStarted),
        prop::collection::vec(arb_hike(), 0..6).prop_map(Action::FetchSucceeded),
        Just(Action::FetchFailed(SyncError::Transport("down".into()))),
        Just(Action::SaveStarted),
        arb_hike().prop_map(Action::SaveSucceeded),
        Just(Action::SaveFailed(SyncError::Transport("down".into()))),
        Just(Action::DeleteStarted),
        "[a-z0-9]{1,4}".prop_map(Action::DeleteSucceeded),
        Just(Action::DeleteFailed(SyncError::NotFound("x".into()))),
    ]
}

proptest! {
    #[test]
    fn upsert_is_idempotent(initial in prop::collection::vec(arb_hike(), 0..6), hike in arb_hike()) {
        let mut state = SyncState::new();
        state.apply(Action::FetchSucceeded(initial));

        state.apply(Action::SaveSucceeded(hike.clone()));
        let once = state.clone();
        state.apply(Action::SaveSucceeded(hike));

        prop_assert_eq!(state, once);
    }

    #[test]
    fn removing_an_absent_id_changes_nothing(
        initial in prop::collection::vec(arb_hike(), 0..6),
        id in "[A-Z]{3}",
    ) {
        // Generated ids are lowercase, so `id` is never present.
        let mut state = SyncState::new();
        state.apply(Action::FetchSucceeded(initial));

        let before = state.clone();
        state.apply(Action::DeleteSucceeded(id));

        prop_assert_eq!(state.collection, before.collection);
    }

    #[test]
    fn ids_stay_unique_under_any_action_sequence(
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut state = SyncState::new();
        for action in actions {
            state.apply(action);
        }

        let mut ids = state.ids();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    #[test]
    fn started_transitions_clear_their_error_slot(
        actions in prop::collection::vec(arb_action(), 0..40),
    ) {
        let mut state = SyncState::new();
        for action in actions {
            state.apply(action);
        }

        state.apply(Action::FetchStarted);
        prop_assert!(state.fetching && state.fetch_error.is_none());
        state.apply(Action::SaveStarted);
        prop_assert!(state.saving && state.save_error.is_none());
        state.apply(Action::DeleteStarted);
        prop_assert!(state.deleting && state.delete_error.is_none());
    }
}
