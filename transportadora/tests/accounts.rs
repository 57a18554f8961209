mod common;

use chrono::NaiveDate;
use common::spawn_backend;
use reqwest::Client;
use transportadora::accounts::{AccountsScreen, DEACTIVATED, MISSING_DATE, REACTIVATED, STATUS_FAILED};
use transportadora::api::HttpAccountsClient;
use transportadora::ports::AccountsClient;
use transportadora::{Notification, Severity};

#[tokio::test]
async fn test_pages_follow_backend_paging() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = AccountsScreen::new();

    screen.load(gateway.accounts.as_ref()).await;
    assert_eq!(screen.customers.len(), 10);
    assert_eq!(screen.last_page, 3);
    assert!(!screen.has_previous());
    assert!(screen.has_next());

    screen.next_page();
    screen.next_page();
    screen.load(gateway.accounts.as_ref()).await;
    assert_eq!(screen.page, 3);
    assert_eq!(screen.customers.len(), 5);
    assert!(!screen.has_next());
    assert_eq!(screen.customers[0].customer_id, "cliente-021");
}

#[tokio::test]
async fn test_search_filters_current_page() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = AccountsScreen::new();
    screen.load(gateway.accounts.as_ref()).await;

    screen.set_search("CLIENTE-00");
    assert_eq!(screen.visible().len(), 9);
    screen.set_search("021");
    assert!(screen.visible().is_empty());
}

#[tokio::test]
async fn test_deactivate_then_reactivate() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = AccountsScreen::new();
    screen.load(gateway.accounts.as_ref()).await;

    screen.open_toggle("cliente-003");
    screen.set_date("2024-07-01");
    screen.confirm_and_apply(gateway.accounts.as_ref()).await;

    assert_eq!(screen.notification(), Some(&Notification::success(DEACTIVATED)));
    let customer = gateway.accounts.customer("cliente-003").await.unwrap();
    assert!(!customer.is_active());
    let listed = screen.customers.iter().find(|c| c.customer_id == "cliente-003").unwrap();
    assert!(!listed.is_active());

    screen.open_toggle("cliente-003");
    assert!(screen.dialog().unwrap().reactivate);
    screen.confirm_and_apply(gateway.accounts.as_ref()).await;

    assert_eq!(screen.notification(), Some(&Notification::success(REACTIVATED)));
    assert!(gateway.accounts.customer("cliente-003").await.unwrap().is_active());
}

#[tokio::test]
async fn test_deactivate_without_date_sends_nothing() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = AccountsScreen::new();
    screen.load(gateway.accounts.as_ref()).await;

    screen.open_toggle("cliente-001");
    screen.confirm_and_apply(gateway.accounts.as_ref()).await;

    assert!(screen.dialog().is_none());
    assert_eq!(screen.notification(), Some(&Notification::error(MISSING_DATE)));
    assert!(gateway.accounts.customer("cliente-001").await.unwrap().is_active());
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let (_, config) = spawn_backend().await;
    let client = HttpAccountsClient::new(Client::new(), &config.accounts_url, "wrong");

    let err = client.customers(1).await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    let err = client
        .deactivate("cliente-001", NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_unauthorized_listing_shows_empty_page() {
    let (_, config) = spawn_backend().await;
    let client = HttpAccountsClient::new(Client::new(), &config.accounts_url, "wrong");
    let mut screen = AccountsScreen::new();

    screen.load(&client).await;
    assert!(screen.customers.is_empty());
    assert!(screen.notification().is_none());
    assert!(!screen.loading);
}

#[tokio::test]
async fn test_unknown_customer_status_change_fails() {
    let (gateway, _) = spawn_backend().await;
    let err = gateway
        .accounts
        .reactivate("cliente-999")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));

    let mut screen = AccountsScreen::new();
    screen.open_toggle("cliente-999");
    screen.confirm_and_apply(gateway.accounts.as_ref()).await;
    let notification = screen.notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, STATUS_FAILED);
}
