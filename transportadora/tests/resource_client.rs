mod common;

use common::{cidade, cliente, estado, pessoa_fisica, spawn_backend};
use reqwest::Client;
use shared::ApiError;
use shared_http::api::{Cidade, Estado, TipoCliente};
use transportadora::api::HttpResourceClient;
use transportadora::ports::ResourceClient;

#[tokio::test]
async fn test_created_record_appears_once_with_its_id() {
    let (gateway, _) = spawn_backend().await;

    let created = gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    let id = created.id_estado.expect("server assigns an id");

    let all = gateway.estados.find_all().await.unwrap();
    assert_eq!(all.iter().filter(|e| e.id_estado == Some(id)).count(), 1);
    assert_eq!(gateway.estados.find_by_id(id).await.unwrap(), created);
}

#[tokio::test]
async fn test_update_is_a_full_replace() {
    let (gateway, _) = spawn_backend().await;
    let sp = gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    let id = sp.id_estado.unwrap();

    let patch = Estado {
        id_estado: None,
        nome_estado: "Paraná".into(),
        uf: "PR".into(),
        icms_local: 0.19,
        icms_outro_uf: 0.07,
    };
    gateway.estados.update(id, &patch).await.unwrap();

    let stored = gateway.estados.find_by_id(id).await.unwrap();
    assert_eq!(stored, Estado { id_estado: Some(id), ..patch });
}

#[tokio::test]
async fn test_deleted_record_is_absent_and_unknown_ids_are_404() {
    let (gateway, _) = spawn_backend().await;
    let sp = gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    let id = sp.id_estado.unwrap();

    gateway.estados.delete(id).await.unwrap();
    assert!(gateway
        .estados
        .find_all()
        .await
        .unwrap()
        .iter()
        .all(|e| e.id_estado != Some(id)));

    let err = gateway.estados.find_by_id(id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(err.server_message().is_some());
}

#[tokio::test]
async fn test_referenced_delete_is_a_conflict_with_message() {
    let (gateway, _) = spawn_backend().await;
    let sp = gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    let id = sp.id_estado.unwrap();
    gateway.cidades.create(&cidade("Campinas", id)).await.unwrap();

    let err = gateway.estados.delete(id).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(
        err.server_message(),
        Some("Não é possível excluir o registro 1 de estados: ele está vinculado a cidades.")
    );
}

#[tokio::test]
async fn test_pessoa_fisica_needs_an_existing_cliente() {
    let (gateway, _) = spawn_backend().await;

    let err = gateway
        .pessoas_fisicas
        .create(&pessoa_fisica(Some(1), "Ana"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.server_message(),
        Some("Referência inválida: clientes 1 não existe.")
    );

    let err = gateway
        .pessoas_fisicas
        .create(&pessoa_fisica(None, "Ana"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));

    gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    gateway.cidades.create(&cidade("Campinas", 1)).await.unwrap();
    gateway.clientes.create(&cliente(1, TipoCliente::Fisica)).await.unwrap();
    let created = gateway
        .pessoas_fisicas
        .create(&pessoa_fisica(Some(1), "Ana"))
        .await
        .unwrap();
    assert_eq!(created.id_cliente, Some(1));
}

#[tokio::test]
async fn test_out_of_range_ids_are_rejected() {
    let (gateway, _) = spawn_backend().await;
    for id in [0, i64::MAX] {
        let row = Estado {
            id_estado: Some(id),
            ..estado("São Paulo", "SP")
        };
        let err = gateway.estados.create(&row).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }
    assert!(gateway.estados.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let client = HttpResourceClient::<Cidade>::new(Client::new(), "http://127.0.0.1:9/api");
    let err = client.find_all().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (gateway, _) = spawn_backend().await;
    assert_eq!(gateway.check_health().await.unwrap().message, "OK");
}
