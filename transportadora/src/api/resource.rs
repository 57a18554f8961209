use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Client;
use shared::Result;
use shared_http::api::{Ack, Record, RecordId};
use tracing::{debug, info};

use super::{check, network_error, read_ack, read_json};
use crate::ports::ResourceClient;

/// `ResourceClient` over `{api_base_url}/{collection}`.
pub struct HttpResourceClient<E> {
    client: Client,
    base_url: String,
    _record: PhantomData<fn() -> E>,
}

impl<E: Record> HttpResourceClient<E> {
    pub fn new(client: Client, api_base_url: &str) -> Self {
        Self {
            client,
            base_url: format!("{}/{}", api_base_url.trim_end_matches('/'), E::COLLECTION),
            _record: PhantomData,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl<E> Clone for HttpResourceClient<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<E: Record> ResourceClient<E> for HttpResourceClient<E> {
    async fn find_all(&self) -> Result<Vec<E>> {
        debug!("Fetching {}", self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| network_error(&self.base_url, e))?;
        read_json(check(response).await?).await
    }

    async fn find_by_id(&self, id: RecordId) -> Result<E> {
        let url = self.item_url(id);
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        read_json(check(response).await?).await
    }

    async fn create(&self, record: &E) -> Result<E> {
        let response = self
            .client
            .post(&self.base_url)
            .json(record)
            .send()
            .await
            .map_err(|e| network_error(&self.base_url, e))?;
        let created: E = read_json(check(response).await?).await?;
        info!("Created {} {:?}", E::COLLECTION, created.id());
        Ok(created)
    }

    async fn update(&self, id: RecordId, record: &E) -> Result<E> {
        let url = self.item_url(id);
        let response = self
            .client
            .put(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let updated = read_json(check(response).await?).await?;
        info!("Updated {} {}", E::COLLECTION, id);
        Ok(updated)
    }

    async fn delete(&self, id: RecordId) -> Result<Ack> {
        let url = self.item_url(id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let ack = read_ack(check(response).await?).await?;
        info!("Deleted {} {}", E::COLLECTION, id);
        Ok(ack)
    }
}
