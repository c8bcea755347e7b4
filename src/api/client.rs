use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::types::{CreatedUser, User};
use crate::config::ApiConfig;
use crate::form::ContactRecord;

/// Thin client over the users REST endpoints.
#[derive(Clone)]
pub struct UsersClient {
    client: Client,
    base_url: String,
}

impl UsersClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /users`
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = format!("{}/users", self.base_url);
        let response = self.send(self.client.get(&url), &url).await?;
        decode(check_status(response).await?).await
    }

    /// `GET /users/{id}`; a 404 maps to [`ApiError::NotFound`].
    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let url = format!("{}/users/{}", self.base_url, id);
        let response = self.send(self.client.get(&url), &url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { id });
        }
        decode(check_status(response).await?).await
    }

    /// `POST /users` with the record as JSON body.
    ///
    /// Any 2xx counts as created. The body is kept as-is: the API decides
    /// what it echoes, and a non-JSON or empty body is not an error.
    pub async fn create_user(&self, record: &ContactRecord) -> Result<CreatedUser, ApiError> {
        let url = format!("{}/users", self.base_url);
        let response = self.send(self.client.post(&url).json(record), &url).await?;
        let text = check_status(response)
            .await?
            .text()
            .await
            .map_err(ApiError::Decode)?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("create response is not JSON: {err}");
                    Value::String(text)
                }
            }
        };
        Ok(CreatedUser::from_body(body))
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<Response, ApiError> {
        builder
            .header(reqwest::header::CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|source| ApiError::Connection {
                url: url.to_string(),
                source,
            })
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let reason = status.canonical_reason().unwrap_or("unknown").to_string();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() { reason } else { body };
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response.json::<T>().await.map_err(ApiError::Decode)
}
