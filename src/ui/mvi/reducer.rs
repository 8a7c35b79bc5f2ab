//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not touch anything outside the returned state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
