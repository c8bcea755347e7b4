use crate::api::RequestId;
use crate::form::FieldPath;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CreateIntent {
    FocusNext,
    FocusPrev,
    /// Replace one field's value; clears that field's error only.
    Edit { path: FieldPath, value: String },
    /// Append a character to the focused field.
    Type(char),
    /// Remove the last character of the focused field.
    Backspace,
    /// Validate; when valid and idle, start a create call tagged `request`.
    Submit { request: RequestId },
    /// The create call tagged `request` finished.
    Completed { request: RequestId, success: bool },
    /// Back to the empty record with no errors.
    Reset,
}

impl Intent for CreateIntent {}
