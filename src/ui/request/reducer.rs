use crate::ui::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::RequestState;

pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            RequestIntent::Submit => match state {
                // Only one call may be in flight; the control is disabled
                // while pending, so this arm is never reached from the UI.
                pending @ RequestState::Pending { .. } => pending,
                _ => RequestState::Pending { animation_tick: 0 },
            },

            RequestIntent::Resolve { result } => match state {
                RequestState::Pending { .. } => RequestState::Succeeded {
                    short_url: result.short_url,
                },
                other => other,
            },

            RequestIntent::Reject { message } => match state {
                RequestState::Pending { .. } => RequestState::Failed { message },
                other => other,
            },

            RequestIntent::AnimationTick => match state {
                RequestState::Pending { animation_tick } => RequestState::Pending {
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },
        }
    }
}
