use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginErrors, LoginField, LoginFormState};
use crate::ui::mvi::Reducer;

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::FocusNext => LoginFormState {
                focused: state.focused.next(),
                ..state
            },
            LoginIntent::FocusPrev => LoginFormState {
                focused: state.focused.prev(),
                ..state
            },
            LoginIntent::Type(ch) => {
                let mut state = state;
                if state.focused == LoginField::RememberMe {
                    if ch == ' ' {
                        state.remember_me = !state.remember_me;
                    }
                    return state;
                }
                state.edit_focused(|value| value.push(ch));
                state
            }
            LoginIntent::Backspace => {
                let mut state = state;
                state.edit_focused(|value| {
                    value.pop();
                });
                state
            }
            LoginIntent::Submit => {
                let errors = LoginErrors {
                    username: required(&state.username, "Username is required"),
                    email: required(&state.email, "Email is required"),
                    password: required(&state.password, "Password is required"),
                };
                let accepted = errors.is_empty();
                LoginFormState {
                    errors,
                    accepted,
                    ..state
                }
            }
            LoginIntent::Reset => LoginFormState::default(),
        }
    }
}

fn required(value: &str, message: &str) -> Option<String> {
    value.is_empty().then(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str, state: LoginFormState) -> LoginFormState {
        text.chars()
            .fold(state, |state, ch| LoginReducer::reduce(state, LoginIntent::Type(ch)))
    }

    #[test]
    fn empty_submit_flags_every_field() {
        let state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Submit);
        assert!(!state.accepted);
        assert_eq!(state.errors.get(LoginField::Username), Some("Username is required"));
        assert_eq!(state.errors.get(LoginField::Email), Some("Email is required"));
        assert_eq!(state.errors.get(LoginField::Password), Some("Password is required"));
    }

    #[test]
    fn filled_form_is_accepted() {
        let mut state = typed("bret", LoginFormState::default());
        state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        state = typed("Sincere@april.biz", state);
        state = LoginReducer::reduce(state, LoginIntent::FocusNext);
        state = typed("hunter2", state);
        state = LoginReducer::reduce(state, LoginIntent::Submit);
        assert!(state.accepted);
        assert!(state.errors.is_empty());
        assert_eq!(state.username, "bret");
        assert_eq!(state.email, "Sincere@april.biz");
    }

    #[test]
    fn space_on_checkbox_toggles_remember() {
        let mut state = LoginFormState {
            focused: LoginField::RememberMe,
            ..LoginFormState::default()
        };
        state = LoginReducer::reduce(state, LoginIntent::Type(' '));
        assert!(state.remember_me);
        state = LoginReducer::reduce(state, LoginIntent::Type('x'));
        assert!(state.remember_me);
    }

    #[test]
    fn typing_clears_that_fields_error() {
        let mut state = LoginReducer::reduce(LoginFormState::default(), LoginIntent::Submit);
        state = typed("b", state);
        assert!(state.errors.username.is_none());
        assert!(state.errors.email.is_some());
    }
}
