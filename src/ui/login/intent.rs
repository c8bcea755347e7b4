use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LoginIntent {
    FocusNext,
    FocusPrev,
    /// Space on the checkbox toggles it; other characters edit the focused field.
    Type(char),
    Backspace,
    Submit,
    /// Clear the form after a successful login.
    Reset,
}

impl Intent for LoginIntent {}
