mod common;

use common::{cidade, estado, spawn_backend};
use shared_http::api::{Cidade, Estado};
use transportadora::notification::{Notification, Severity};
use transportadora::screen::EntityScreen;

#[tokio::test]
async fn test_new_city_row_shows_its_state_name() {
    let (gateway, _) = spawn_backend().await;
    let x = Estado {
        id_estado: Some(10),
        ..estado("X", "XX")
    };
    gateway.estados.create(&x).await.unwrap();
    gateway.cidades.create(&cidade("A", 10)).await.unwrap();

    let mut screen = EntityScreen::<Cidade>::new();
    screen.mount(&gateway).await;
    assert_eq!(screen.rows().len(), 1);

    screen.open_create();
    screen.set_field("nome_cidade", "B");
    screen.set_field("preco_unit_peso", "2.5");
    screen.set_field("preco_unit_valor", "0.1");
    screen.set_field("id_estado", "10");
    screen.save(gateway.cidades.as_ref()).await;

    assert!(screen.dialog().is_none());
    assert_eq!(
        screen.notification(),
        Some(&Notification::success("Cidade cadastrada com sucesso!"))
    );

    let names: Vec<&str> = screen.rows().iter().map(|c| c.nome_cidade.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(screen.rows()[0].id_cidade, Some(1));

    let rows = screen.table_rows();
    let (_, cells) = rows.iter().find(|(_, cells)| cells[1] == "B").unwrap();
    assert_eq!(cells[4], "X");
}

#[tokio::test]
async fn test_failed_create_leaves_list_and_reports_once() {
    let (gateway, _) = spawn_backend().await;
    gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    gateway.cidades.create(&cidade("Campinas", 1)).await.unwrap();

    let mut screen = EntityScreen::<Cidade>::new();
    screen.mount(&gateway).await;
    let before = screen.list().clone();

    screen.open_create();
    screen.set_field("nome_cidade", "Órfã");
    screen.set_field("preco_unit_peso", "1");
    screen.set_field("preco_unit_valor", "1");
    screen.set_field("id_estado", "99");
    screen.save(gateway.cidades.as_ref()).await;

    assert!(screen.dialog().is_none());
    assert_eq!(screen.list(), &before);
    let notification = screen.notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "Erro ao salvar cidade.");
}

#[tokio::test]
async fn test_edit_then_close_leaves_list_as_is() {
    let (gateway, _) = spawn_backend().await;
    gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();

    let mut screen = EntityScreen::<Estado>::new();
    screen.mount(&gateway).await;
    let before = screen.list().clone();

    assert!(screen.open_edit(1));
    screen.set_field("nome_estado", "Outro nome");
    screen.close_dialog();

    assert_eq!(screen.list(), &before);
    assert_eq!(gateway.estados.find_by_id(1).await.unwrap().nome_estado, "São Paulo");
}

#[tokio::test]
async fn test_referenced_delete_message_reaches_notification_verbatim() {
    let (gateway, _) = spawn_backend().await;
    gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();
    gateway.cidades.create(&cidade("Campinas", 1)).await.unwrap();

    let mut screen = EntityScreen::<Estado>::new();
    screen.mount(&gateway).await;
    screen.request_delete(1);
    screen.confirm_delete(gateway.estados.as_ref()).await;

    assert_eq!(
        screen.notification(),
        Some(&Notification::error(
            "Não é possível excluir o registro 1 de estados: ele está vinculado a cidades."
        ))
    );
    assert_eq!(screen.rows().len(), 1);
    assert_eq!(screen.pending_delete(), None);
}

#[tokio::test]
async fn test_edit_round_trip_updates_row() {
    let (gateway, _) = spawn_backend().await;
    gateway.estados.create(&estado("São Paulo", "SP")).await.unwrap();

    let mut screen = EntityScreen::<Estado>::new();
    screen.mount(&gateway).await;
    screen.open_edit(1);
    screen.set_field("uf", "sp");
    screen.save(gateway.estados.as_ref()).await;

    assert_eq!(screen.rows()[0].uf, "sp");
    assert_eq!(
        screen.notification(),
        Some(&Notification::success("Estado atualizado com sucesso!"))
    );
}
