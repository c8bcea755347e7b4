//! Bridge between the synchronous UI loop and the async users client.
//!
//! The UI pushes [`ApiCommand`]s with `try_send`; the worker runs each one as
//! its own task and hands the outcome to an event sink. Every command carries
//! the [`RequestId`] it was issued under so the UI can drop stale answers.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::api::client::UsersClient;
use crate::api::types::{CreatedUser, User};
use crate::form::ContactRecord;

const COMMAND_BUFFER: usize = 16;

/// Monotonic tag attached to every request.
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    FetchUsers { request: RequestId },
    FetchUser { request: RequestId, id: u64 },
    CreateUser { request: RequestId, record: ContactRecord },
}

impl ApiCommand {
    pub fn request(&self) -> RequestId {
        match self {
            ApiCommand::FetchUsers { request }
            | ApiCommand::FetchUser { request, .. }
            | ApiCommand::CreateUser { request, .. } => *request,
        }
    }
}

/// Completed request, errors flattened to their display message.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    UsersLoaded {
        request: RequestId,
        result: Result<Vec<User>, String>,
    },
    UserLoaded {
        request: RequestId,
        id: u64,
        result: Result<User, String>,
    },
    UserCreated {
        request: RequestId,
        result: Result<CreatedUser, String>,
    },
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;
pub type EventSink = Arc<dyn Fn(ApiEvent) + Send + Sync>;

pub struct ApiWorker {
    client: UsersClient,
    receiver: mpsc::Receiver<ApiCommand>,
    sink: EventSink,
}

impl ApiWorker {
    pub fn new(client: UsersClient, sink: EventSink) -> (ApiCommandSender, Self) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        (
            sender,
            Self {
                client,
                receiver,
                sink,
            },
        )
    }

    /// Drain commands until every sender is dropped.
    pub async fn run(mut self) {
        while let Some(command) = self.receiver.recv().await {
            let client = self.client.clone();
            let sink = Arc::clone(&self.sink);
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                sink(event);
            });
        }
        tracing::debug!("API worker stopped: command channel closed");
    }
}

/// Run a single command against the client.
pub async fn execute(client: &UsersClient, command: ApiCommand) -> ApiEvent {
    let started = Instant::now();
    let request = command.request();
    let event = match command {
        ApiCommand::FetchUsers { request } => ApiEvent::UsersLoaded {
            request,
            result: client.list_users().await.map_err(|err| {
                tracing::warn!(error_type = err.error_type(), "GET /users failed: {err}");
                err.to_string()
            }),
        },
        ApiCommand::FetchUser { request, id } => ApiEvent::UserLoaded {
            request,
            id,
            result: client.get_user(id).await.map_err(|err| {
                tracing::warn!(error_type = err.error_type(), "GET /users/{id} failed: {err}");
                err.to_string()
            }),
        },
        ApiCommand::CreateUser { request, record } => ApiEvent::UserCreated {
            request,
            result: client.create_user(&record).await.map_err(|err| {
                tracing::warn!(error_type = err.error_type(), "POST /users failed: {err}");
                err.to_string()
            }),
        },
    };
    tracing::info!(
        request,
        latency_ms = started.elapsed().as_millis() as u64,
        "API request completed"
    );
    event
}
