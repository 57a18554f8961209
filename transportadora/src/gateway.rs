use std::sync::Arc;

use reqwest::Client;
use shared::Result;
use shared::config::Config;
use shared_http::api::{
    Cidade, Cliente, Estado, Frete, Funcionario, HealthResponse, PessoaFisica, PessoaJuridica,
    Record,
};
use tracing::info;

use crate::api::{
    self, HttpAccountsClient, HttpAuthenticator, HttpReportsClient, HttpResourceClient,
};
use crate::ports::{AccountsClient, Authenticator, ReportsClient, ResourceClient};

/// Every remote collaborator of the console, shared by all screens.
#[derive(Clone)]
pub struct Gateway {
    pub clientes: Arc<dyn ResourceClient<Cliente>>,
    pub cidades: Arc<dyn ResourceClient<Cidade>>,
    pub estados: Arc<dyn ResourceClient<Estado>>,
    pub fretes: Arc<dyn ResourceClient<Frete>>,
    pub funcionarios: Arc<dyn ResourceClient<Funcionario>>,
    pub pessoas_fisicas: Arc<dyn ResourceClient<PessoaFisica>>,
    pub pessoas_juridicas: Arc<dyn ResourceClient<PessoaJuridica>>,
    pub reports: Arc<dyn ReportsClient>,
    pub accounts: Arc<dyn AccountsClient>,
    pub auth: Arc<dyn Authenticator>,
    client: Client,
    http_server: String,
}

impl Gateway {
    pub fn from_env() -> Self {
        Self::from_config(&Config::from_env())
    }

    pub fn from_config(config: &Config) -> Self {
        info!("Using backend at {}", config.http_server);
        let client = Client::new();
        let api = config.api_base_url.as_str();
        Self {
            clientes: Arc::new(HttpResourceClient::new(client.clone(), api)),
            cidades: Arc::new(HttpResourceClient::new(client.clone(), api)),
            estados: Arc::new(HttpResourceClient::new(client.clone(), api)),
            fretes: Arc::new(HttpResourceClient::new(client.clone(), api)),
            funcionarios: Arc::new(HttpResourceClient::new(client.clone(), api)),
            pessoas_fisicas: Arc::new(HttpResourceClient::new(client.clone(), api)),
            pessoas_juridicas: Arc::new(HttpResourceClient::new(client.clone(), api)),
            reports: Arc::new(HttpReportsClient::new(client.clone(), &config.http_server)),
            accounts: Arc::new(HttpAccountsClient::new(
                client.clone(),
                &config.accounts_url,
                config.api_token.clone(),
            )),
            auth: Arc::new(HttpAuthenticator::new(client.clone(), api)),
            client,
            http_server: config.http_server.clone(),
        }
    }

    pub async fn check_health(&self) -> Result<HealthResponse> {
        let url = format!("{}/health", self.http_server);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| api::network_error(&url, e))?;
        api::read_json(api::check(response).await?).await
    }
}

/// Selects the client of one record type.
pub trait HasResource<E: Record> {
    fn resource(&self) -> Arc<dyn ResourceClient<E>>;
}

macro_rules! has_resource {
    ($($record:ty => $field:ident),* $(,)?) => {
        $(
            impl HasResource<$record> for Gateway {
                fn resource(&self) -> Arc<dyn ResourceClient<$record>> {
                    self.$field.clone()
                }
            }
        )*
    };
}

has_resource! {
    Cliente => clientes,
    Cidade => cidades,
    Estado => estados,
    Frete => fretes,
    Funcionario => funcionarios,
    PessoaFisica => pessoas_fisicas,
    PessoaJuridica => pessoas_juridicas,
}
