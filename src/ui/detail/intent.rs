use crate::api::{RequestId, User};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Start fetching `user_id`; any earlier request becomes stale.
    Request { user_id: u64, request: RequestId },
    Loaded { request: RequestId, user: Box<User> },
    Failed { request: RequestId },
    Reset,
}

impl Intent for DetailIntent {}
