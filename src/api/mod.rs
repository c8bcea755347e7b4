//! Remote users API: typed records, HTTP client and the async worker.

mod client;
mod error;
mod types;
mod worker;

pub use client::UsersClient;
pub use error::ApiError;
pub use types::{CreatedUser, User};
pub use worker::{
    execute, ApiCommand, ApiCommandSender, ApiEvent, ApiWorker, EventSink, RequestId,
};
