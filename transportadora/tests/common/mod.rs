#![allow(dead_code)]

use chrono::NaiveDate;
use server_http::accounts::AccountStore;
use server_http::{build_router, AppState};
use shared::config::{Config, ServerConfig};
use shared_http::api::{Cidade, Cliente, Estado, Funcionario, PessoaFisica, TipoCliente};
use transportadora::Gateway;

pub const ADMIN_EMAIL: &str = "admin@transportadora.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const API_TOKEN: &str = "test-token";

/// Starts the reference backend on an ephemeral port.
pub async fn spawn_backend_with(accounts: AccountStore) -> (Gateway, Config) {
    let state = AppState::new(
        ServerConfig::new(ADMIN_EMAIL, ADMIN_PASSWORD, API_TOKEN),
        accounts,
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, build_router(state)).await.unwrap();
    });

    let config = Config::new(format!("http://{}", addr))
        .with_accounts(format!("http://{}", addr), API_TOKEN);
    (Gateway::from_config(&config), config)
}

pub async fn spawn_backend() -> (Gateway, Config) {
    spawn_backend_with(AccountStore::demo(25)).await
}

pub fn estado(nome: &str, uf: &str) -> Estado {
    Estado {
        id_estado: None,
        nome_estado: nome.into(),
        uf: uf.into(),
        icms_local: 0.18,
        icms_outro_uf: 0.12,
    }
}

pub fn cidade(nome: &str, id_estado: i64) -> Cidade {
    Cidade {
        id_cidade: None,
        nome_cidade: nome.into(),
        preco_unit_peso: 1.5,
        preco_unit_valor: 0.02,
        id_estado,
    }
}

pub fn cliente(id_cidade: i64, tipo: TipoCliente) -> Cliente {
    Cliente {
        id_cliente: None,
        endereco: "Rua das Flores, 10".into(),
        telefone: "1133334444".into(),
        id_cidade,
        data_insc: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        tipo_cliente: tipo,
    }
}

pub fn pessoa_fisica(id_cliente: Option<i64>, nome: &str) -> PessoaFisica {
    PessoaFisica {
        id_cliente,
        nome: nome.into(),
        cpf: "123.456.789-00".into(),
        endereco: "Rua A".into(),
        telefone: "11999990000".into(),
    }
}

pub fn funcionario(nome: &str) -> Funcionario {
    Funcionario {
        id_funcionario: None,
        nome_funcionario: nome.into(),
        numero_registro: "R-1".into(),
    }
}
