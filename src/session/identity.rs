use serde::{Deserialize, Serialize};

/// The remembered login: `{ "username"?, "email"? }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionIdentity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionIdentity {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            email: Some(email.into()),
        }
    }

    /// Both fields present and non-empty.
    pub fn is_authenticated(&self) -> bool {
        let present = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.username) && present(&self.email)
    }

    /// Uppercased first letter of the username, for the avatar badge.
    pub fn initial(&self) -> Option<char> {
        self.username
            .as_deref()
            .and_then(|name| name.chars().next())
            .and_then(|ch| ch.to_uppercase().next())
    }
}
