//! reqwest implementations of the ports.

mod accounts;
mod auth;
mod reports;
mod resource;

pub use accounts::HttpAccountsClient;
pub use auth::HttpAuthenticator;
pub use reports::HttpReportsClient;
pub use resource::HttpResourceClient;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ApiError, Result};
use shared_http::api::Ack;
use tracing::warn;

pub(crate) fn network_error(url: &str, err: reqwest::Error) -> ApiError {
    warn!("Request to {} failed: {}", url, err);
    ApiError::Network(err.to_string())
}

/// Passes 2xx responses through and turns anything else into `ApiError::Server`.
pub(crate) async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    warn!(
        "Request to {} rejected with {}: {}",
        url,
        status.as_u16(),
        message.as_deref().unwrap_or("no message")
    );
    Err(ApiError::server(status.as_u16(), message))
}

/// `error` wins over `message` when a body carries both.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| network_error(&url, e))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        warn!("Unexpected body from {}: {}", url, e);
        ApiError::Decode(e.to_string())
    })
}

/// Delete-style answers may be empty or plain text.
pub(crate) async fn read_ack(response: Response) -> Result<Ack> {
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .map_err(|e| network_error(&url, e))?;
    Ok(serde_json::from_str(&body).unwrap_or_else(|_| {
        let text = body.trim();
        if text.is_empty() {
            Ack::default()
        } else {
            Ack::with_message(text)
        }
    }))
}
