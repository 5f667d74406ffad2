use super::intent::Intent;
use super::state::SliceState;

/// Applies intents to one kind of slice state.
pub trait Reducer {
    type State: SliceState;
    type Intent: Intent;

    /// Consume the current state and return the next. No I/O happens here;
    /// remote calls finish before their intent is reduced.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
