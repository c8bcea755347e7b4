//! Mock authentication session: identity plus durable/session-scoped storage.

mod identity;
mod storage;
mod store;

pub use identity::SessionIdentity;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, SessionError};
pub use store::{Persistence, SessionStore, SESSION_KEY};
