use crate::api::RequestId;
use crate::form::{ContactRecord, ErrorTree, FieldPath};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFormState {
    pub record: ContactRecord,
    pub errors: ErrorTree,
    pub focused: FieldPath,
    /// Set while the create call is in flight; cleared on either outcome.
    pub submitting: bool,
    /// Tag of the in-flight create call.
    pub pending: Option<RequestId>,
}

impl Default for CreateFormState {
    fn default() -> Self {
        Self {
            record: ContactRecord::default(),
            errors: ErrorTree::default(),
            focused: FieldPath::Name,
            submitting: false,
            pending: None,
        }
    }
}

impl UiState for CreateFormState {}

impl CreateFormState {
    /// True when `request` is the create call this form is waiting on.
    pub fn is_awaiting(&self, request: RequestId) -> bool {
        self.pending == Some(request)
    }
}
