use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailState, LOAD_FAILED_MESSAGE};
use crate::ui::mvi::Reducer;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Request { user_id, request } => DetailState::Loading { user_id, request },
            DetailIntent::Loaded { request, user } => match state {
                DetailState::Loading {
                    request: pending, ..
                } if pending == request => DetailState::Loaded { user },
                other => other,
            },
            DetailIntent::Failed { request } => match state {
                DetailState::Loading {
                    user_id,
                    request: pending,
                } if pending == request => DetailState::Failed {
                    user_id,
                    message: LOAD_FAILED_MESSAGE.to_string(),
                },
                other => other,
            },
            DetailIntent::Reset => DetailState::Idle,
        }
    }
}
