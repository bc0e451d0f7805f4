//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen. Must not perform side effects;
/// fetching and logging stay with the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
