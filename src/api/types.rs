use serde::{Deserialize, Serialize};

use serde_json::Value;

use crate::form::{Address, Company};

/// A user record as returned by `GET /users` and `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
    /// Not published by the demo API; rendered as "Customer" when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    pub fn role_label(&self) -> &str {
        self.role.as_deref().unwrap_or("Customer")
    }

    /// Website as a navigable URL, adding `https://` when the scheme is missing.
    pub fn website_url(&self) -> String {
        if self.website.starts_with("http") {
            self.website.clone()
        } else {
            format!("https://{}", self.website)
        }
    }
}

/// Response to `POST /users`. Whatever the API echoed, with its `id` when it
/// sent one (any JSON type).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatedUser {
    pub id: Option<Value>,
    pub body: Value,
}

impl CreatedUser {
    pub fn from_body(body: Value) -> Self {
        let id = body.get("id").cloned();
        Self { id, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_is_optional_and_untyped() {
        assert_eq!(CreatedUser::from_body(json!({ "id": 11 })).id, Some(json!(11)));
        assert_eq!(CreatedUser::from_body(json!({ "id": "11" })).id, Some(json!("11")));
        assert_eq!(CreatedUser::from_body(json!({ "name": "a" })).id, None);
        assert_eq!(CreatedUser::from_body(Value::Null).id, None);
    }
}
