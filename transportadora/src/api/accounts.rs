use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use shared::Result;
use shared_http::api::{Ack, AccountForm, Customer, CustomerPage};
use tracing::{debug, info};

use super::{check, network_error, read_ack, read_json};
use crate::ports::AccountsClient;

/// Client of the token API; every request carries the bearer token.
#[derive(Clone)]
pub struct HttpAccountsClient {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpAccountsClient {
    pub fn new(client: Client, accounts_url: &str, token: impl Into<String>) -> Self {
        Self {
            client,
            base_url: accounts_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AccountsClient for HttpAccountsClient {
    async fn customers(&self, page: u32) -> Result<CustomerPage> {
        let url = format!("{}/get-token/customers", self.base_url);
        debug!("Fetching customers page {}", page);
        let response = self
            .authorized(self.client.get(&url).query(&[("page", page)]))
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let body: Value = read_json(check(response).await?).await?;
        Ok(CustomerPage::from_value(body))
    }

    async fn customer(&self, customer_id: &str) -> Result<Customer> {
        let url = format!("{}/get-token/customers/{}", self.base_url, customer_id);
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        read_json(check(response).await?).await
    }

    async fn deactivate(&self, customer_id: &str, date: NaiveDate) -> Result<Ack> {
        let url = format!("{}/delete-client", self.base_url);
        let form = Form::new()
            .text(AccountForm::ENTRY_CUSTOMER_ID, customer_id.to_string())
            .text(AccountForm::ENTRY_DATE, date.format("%Y-%m-%d").to_string());
        let response = self
            .authorized(self.client.delete(&url).multipart(form))
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let ack = read_ack(check(response).await?).await?;
        info!("Customer {} deactivated as of {}", customer_id, date);
        Ok(ack)
    }

    async fn reactivate(&self, customer_id: &str) -> Result<Ack> {
        let url = format!("{}/reactivate-client", self.base_url);
        let form = Form::new().text(AccountForm::ENTRY_CUSTOMER_ID, customer_id.to_string());
        let response = self
            .authorized(self.client.put(&url).multipart(form))
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        let ack = read_ack(check(response).await?).await?;
        info!("Customer {} reactivated", customer_id);
        Ok(ack)
    }
}
