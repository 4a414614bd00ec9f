use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition function.
///
/// Reducers never perform I/O. Side effects such as issuing the network call
/// are triggered by the app around the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
