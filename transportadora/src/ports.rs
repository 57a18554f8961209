use async_trait::async_trait;
use chrono::NaiveDate;
use shared::Result;
use shared_http::api::{
    Ack, ArrecadacaoFretes, Customer, CustomerPage, FreteFuncionario, LoginRequest, LoginResponse,
    MediaFretes, Record, RecordId,
};

// Ports are the seams between the screens and whatever serves the data.
// Browser futures are not `Send`, so the wasm build drops that bound.

/// Remote collection of one record type.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ResourceClient<E: Record>: Send + Sync + 'static {
    async fn find_all(&self) -> Result<Vec<E>>;
    async fn find_by_id(&self, id: RecordId) -> Result<E>;
    /// Returns the record as stored, with its server-assigned id.
    async fn create(&self, record: &E) -> Result<E>;
    /// Full replace of the record at `id`.
    async fn update(&self, id: RecordId, record: &E) -> Result<E>;
    async fn delete(&self, id: RecordId) -> Result<Ack>;
}

/// Read-only dashboard metrics.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ReportsClient: Send + Sync + 'static {
    async fn media_fretes(&self, id_estado: RecordId) -> Result<Vec<MediaFretes>>;
    async fn arrecadacao_fretes(&self, id_estado: RecordId) -> Result<Vec<ArrecadacaoFretes>>;
    async fn fretes_funcionarios(&self, mes: u32, ano: i32) -> Result<Vec<FreteFuncionario>>;
}

/// Customer administration on the token API.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AccountsClient: Send + Sync + 'static {
    async fn customers(&self, page: u32) -> Result<CustomerPage>;
    async fn customer(&self, customer_id: &str) -> Result<Customer>;
    async fn deactivate(&self, customer_id: &str, date: NaiveDate) -> Result<Ack>;
    async fn reactivate(&self, customer_id: &str) -> Result<Ack>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Authenticator: Send + Sync + 'static {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}
