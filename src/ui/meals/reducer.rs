//! Reducer for the meal list screen.

use crate::ui::mvi::Reducer;

use super::intent::MealScreenIntent;
use super::state::MealScreenState;

/// Pure transitions. A failure never discards a loaded snapshot.
pub struct MealScreenReducer;

impl Reducer for MealScreenReducer {
    type State = MealScreenState;
    type Intent = MealScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MealScreenIntent::SnapshotPublished(meals) => MealScreenState::Loaded { meals },

            MealScreenIntent::FetchFailed { reason } => match state {
                MealScreenState::Loaded { meals } => MealScreenState::Loaded { meals },
                MealScreenState::Loading | MealScreenState::Failed { .. } => {
                    MealScreenState::Failed { reason }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meal::{MealCollection, MealRecord};
    use std::sync::Arc;

    fn meals(count: usize) -> Arc<MealCollection> {
        Arc::new(MealCollection::new(vec![MealRecord::default(); count]))
    }

    #[test]
    fn loading_snapshot_transitions_to_loaded() {
        let new = MealScreenReducer::reduce(
            MealScreenState::Loading,
            MealScreenIntent::SnapshotPublished(meals(3)),
        );
        assert_eq!(new.items().len(), 3);
    }

    #[test]
    fn loading_failure_transitions_to_failed() {
        let new = MealScreenReducer::reduce(
            MealScreenState::Loading,
            MealScreenIntent::FetchFailed {
                reason: "connection refused".to_string(),
            },
        );
        assert!(matches!(new, MealScreenState::Failed { reason } if reason == "connection refused"));
    }

    #[test]
    fn loaded_failure_keeps_snapshot() {
        let state = MealScreenState::Loaded { meals: meals(2) };
        let new = MealScreenReducer::reduce(
            state,
            MealScreenIntent::FetchFailed {
                reason: "timeout".to_string(),
            },
        );
        assert!(new.is_loaded());
        assert_eq!(new.items().len(), 2);
    }

    #[test]
    fn failed_snapshot_recovers_to_loaded() {
        let state = MealScreenState::Failed {
            reason: "timeout".to_string(),
        };
        let new = MealScreenReducer::reduce(state, MealScreenIntent::SnapshotPublished(meals(1)));
        assert!(new.is_loaded());
    }

    #[test]
    fn later_snapshot_replaces_earlier() {
        let state = MealScreenState::Loaded { meals: meals(5) };
        let new = MealScreenReducer::reduce(state, MealScreenIntent::SnapshotPublished(meals(1)));
        assert_eq!(new.items().len(), 1);
    }
}
