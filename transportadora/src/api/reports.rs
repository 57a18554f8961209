use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::Result;
use shared_http::api::{ArrecadacaoFretes, FreteFuncionario, MediaFretes, RecordId, ReportEnvelope};
use tracing::debug;

use super::{check, network_error, read_json};
use crate::ports::ReportsClient;

/// Report endpoints hang off the backend root, outside `/api`.
#[derive(Clone)]
pub struct HttpReportsClient {
    client: Client,
    root: String,
}

impl HttpReportsClient {
    pub fn new(client: Client, http_server: &str) -> Self {
        Self {
            client,
            root: http_server.trim_end_matches('/').to_string(),
        }
    }

    async fn rows<T: DeserializeOwned>(&self, path: String) -> Result<Vec<T>> {
        let url = format!("{}/{}", self.root, path);
        debug!("Fetching report {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let envelope: ReportEnvelope<T> = read_json(check(response).await?).await?;
        Ok(envelope.into_rows())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ReportsClient for HttpReportsClient {
    async fn media_fretes(&self, id_estado: RecordId) -> Result<Vec<MediaFretes>> {
        self.rows(format!("media-fretes/{}", id_estado)).await
    }

    async fn arrecadacao_fretes(&self, id_estado: RecordId) -> Result<Vec<ArrecadacaoFretes>> {
        self.rows(format!("arrecadacao-fretes/{}", id_estado)).await
    }

    async fn fretes_funcionarios(&self, mes: u32, ano: i32) -> Result<Vec<FreteFuncionario>> {
        self.rows(format!("fretes-funcionarios/{}/{}", mes, ano)).await
    }
}
