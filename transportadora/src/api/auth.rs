use async_trait::async_trait;
use reqwest::Client;
use shared::Result;
use shared_http::api::{LoginRequest, LoginResponse};
use tracing::info;

use super::{check, network_error, read_json};
use crate::ports::Authenticator;

#[derive(Clone)]
pub struct HttpAuthenticator {
    client: Client,
    url: String,
}

impl HttpAuthenticator {
    pub fn new(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/auth/login", api_base_url.trim_end_matches('/')),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| network_error(&self.url, e))?;
        let session: LoginResponse = read_json(check(response).await?).await?;
        info!("Logged in as {}", session.email);
        Ok(session)
    }
}
