use crate::api::{RequestId, User};
use crate::ui::mvi::UiState;

/// Shown inline and as a toast when the user record cannot be fetched.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user data";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading {
        user_id: u64,
        request: RequestId,
    },
    Loaded {
        user: Box<User>,
    },
    Failed {
        user_id: u64,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The request this page still cares about, if any.
    pub fn pending(&self) -> Option<RequestId> {
        match self {
            Self::Loading { request, .. } => Some(*request),
            _ => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Loaded { user } => Some(user),
            _ => None,
        }
    }
}
