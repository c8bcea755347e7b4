use crate::form::{validate, ContactRecord, ErrorTree, FieldPath};
use crate::ui::create::intent::CreateIntent;
use crate::ui::create::state::CreateFormState;
use crate::ui::mvi::Reducer;

pub struct CreateFormReducer;

impl Reducer for CreateFormReducer {
    type State = CreateFormState;
    type Intent = CreateIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CreateIntent::FocusNext => CreateFormState {
                focused: state.focused.next(),
                ..state
            },
            CreateIntent::FocusPrev => CreateFormState {
                focused: state.focused.prev(),
                ..state
            },
            CreateIntent::Edit { path, value } => edit(state, path, |field| *field = value),
            CreateIntent::Type(ch) => {
                let path = state.focused;
                edit(state, path, |field| field.push(ch))
            }
            CreateIntent::Backspace => {
                let path = state.focused;
                edit(state, path, |field| {
                    field.pop();
                })
            }
            CreateIntent::Submit { request } => {
                if state.submitting {
                    return state;
                }
                let errors = validate(&state.record);
                if !errors.is_valid() {
                    // Jump to the first broken field.
                    let focused = errors.failed_paths().first().copied().unwrap_or(state.focused);
                    return CreateFormState {
                        errors,
                        focused,
                        ..state
                    };
                }
                CreateFormState {
                    errors,
                    submitting: true,
                    pending: Some(request),
                    ..state
                }
            }
            CreateIntent::Completed { request, success } => {
                if !state.is_awaiting(request) {
                    return state;
                }
                if success {
                    CreateFormState {
                        record: ContactRecord::default(),
                        errors: ErrorTree::default(),
                        focused: FieldPath::Name,
                        submitting: false,
                        pending: None,
                    }
                } else {
                    CreateFormState {
                        submitting: false,
                        pending: None,
                        ..state
                    }
                }
            }
            CreateIntent::Reset => CreateFormState {
                record: ContactRecord::default(),
                errors: ErrorTree::default(),
                focused: FieldPath::Name,
                ..state
            },
        }
    }
}

fn edit(
    mut state: CreateFormState,
    path: FieldPath,
    apply: impl FnOnce(&mut String),
) -> CreateFormState {
    apply(state.record.field_mut(path));
    state.errors.clear(path);
    state
}
