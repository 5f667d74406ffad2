//! Local lifecycle of a single create/update/delete request.
//!
//! The posts slice only tracks the bulk fetch globally. Callers that issue
//! one-off mutations keep one of these per control and refuse to start a
//! second request while the first is pending.

use crate::mvi::{Intent, Reducer, SliceState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed { error: String },
}

impl SliceState for OperationStatus {}

impl OperationStatus {
    /// A new request may be issued.
    pub fn can_start(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum OperationIntent {
    /// Request issued.
    Start,
    /// Request completed.
    Succeeded,
    /// Request failed.
    Failed { error: String },
    /// Caller is done with the outcome.
    Reset,
}

impl Intent for OperationIntent {}

impl OperationIntent {
    /// Map a finished request onto the matching intent.
    pub fn from_result<T, E: std::fmt::Display>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Succeeded,
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

pub struct OperationReducer;

impl Reducer for OperationReducer {
    type State = OperationStatus;
    type Intent = OperationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            OperationIntent::Start => OperationStatus::Pending,
            OperationIntent::Succeeded => match state {
                OperationStatus::Pending => OperationStatus::Succeeded,
                other => other,
            },
            OperationIntent::Failed { error } => match state {
                OperationStatus::Pending => OperationStatus::Failed { error },
                other => other,
            },
            OperationIntent::Reset => OperationStatus::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_blocks_second_start() {
        let state = OperationReducer::reduce(OperationStatus::Idle, OperationIntent::Start);
        assert!(state.is_pending());
        assert!(!state.can_start());
    }

    #[test]
    fn failure_keeps_message_until_reset() {
        let state = OperationReducer::reduce(OperationStatus::Idle, OperationIntent::Start);
        let result: Result<(), String> = Err("404: Not Found".into());
        let state = OperationReducer::reduce(state, OperationIntent::from_result(&result));
        assert_eq!(state.error_message(), Some("404: Not Found"));
        assert!(state.can_start());

        let state = OperationReducer::reduce(state, OperationIntent::Reset);
        assert_eq!(state, OperationStatus::Idle);
    }

    #[test]
    fn completion_without_start_is_ignored() {
        let state = OperationReducer::reduce(OperationStatus::Idle, OperationIntent::Succeeded);
        assert_eq!(state, OperationStatus::Idle);
    }
}
