use crate::ui::mvi::Reducer;

use super::intent::ToastIntent;
use super::state::ToastState;

pub struct ToastReducer;

impl Reducer for ToastReducer {
    type State = ToastState;
    type Intent = ToastIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ToastIntent::Show {
                message,
                severity,
                expires_at,
            } => ToastState::Visible {
                message,
                severity,
                expires_at,
            },
            ToastIntent::Dismiss => ToastState::Hidden,
            ToastIntent::Tick { now } => match state {
                ToastState::Visible { expires_at, .. } if now >= expires_at => ToastState::Hidden,
                other => other,
            },
        }
    }
}
