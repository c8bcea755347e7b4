use crate::session::identity::SessionIdentity;
use crate::session::storage::{KeyValueStorage, SessionError};

/// Key the identity blob is stored under in both backends.
pub const SESSION_KEY: &str = "rememberedUser";

/// Which backend a login is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Survives restarts ("remember me").
    Durable,
    /// Dropped when the process exits.
    Session,
}

/// Owns the current identity and both persistence backends.
pub struct SessionStore {
    durable: Box<dyn KeyValueStorage>,
    ephemeral: Box<dyn KeyValueStorage>,
    identity: SessionIdentity,
}

impl SessionStore {
    pub fn new(durable: Box<dyn KeyValueStorage>, ephemeral: Box<dyn KeyValueStorage>) -> Self {
        Self {
            durable,
            ephemeral,
            identity: SessionIdentity::default(),
        }
    }

    /// Build a store and restore the identity from whichever backend holds it.
    ///
    /// The durable blob wins when present. A blob that fails to read or parse
    /// is logged and ignored; the session stays unauthenticated.
    pub fn restore(durable: Box<dyn KeyValueStorage>, ephemeral: Box<dyn KeyValueStorage>) -> Self {
        let mut store = Self::new(durable, ephemeral);
        let stored = match store.durable.get(SESSION_KEY) {
            Ok(Some(blob)) => Some(blob),
            Ok(None) => store.ephemeral.get(SESSION_KEY).unwrap_or_else(|err| {
                tracing::warn!("Ignoring unreadable session store: {err}");
                None
            }),
            Err(err) => {
                tracing::warn!("Ignoring unreadable durable session: {err}");
                None
            }
        };

        if let Some(blob) = stored {
            match serde_json::from_str::<SessionIdentity>(&blob) {
                Ok(identity) => store.identity = identity,
                Err(err) => tracing::warn!("Ignoring malformed session blob: {err}"),
            }
        }

        store
    }

    pub fn get(&self) -> &SessionIdentity {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    /// Replace the identity wholesale and persist it to the chosen backend.
    ///
    /// The in-memory identity is replaced even when persisting fails.
    pub fn replace(
        &mut self,
        identity: SessionIdentity,
        persistence: Persistence,
    ) -> Result<(), SessionError> {
        self.identity = identity;
        let blob = serde_json::to_string(&self.identity)?;
        let target = match persistence {
            Persistence::Durable => &mut self.durable,
            Persistence::Session => &mut self.ephemeral,
        };
        target.set(SESSION_KEY, &blob)
    }

    /// Forget the identity and remove the blob from both backends.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.identity = SessionIdentity::default();
        let durable = self.durable.remove(SESSION_KEY);
        let ephemeral = self.ephemeral.remove(SESSION_KEY);
        durable.and(ephemeral)
    }
}
