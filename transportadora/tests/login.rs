mod common;

use common::{spawn_backend, ADMIN_EMAIL, ADMIN_PASSWORD};
use transportadora::login::{LoginScreen, LOGGED_IN};
use transportadora::navigation::Page;
use transportadora::{Notification, Severity};

#[tokio::test]
async fn test_valid_credentials_open_dashboard() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = LoginScreen::new();
    screen.set_email(ADMIN_EMAIL);
    screen.set_password(ADMIN_PASSWORD);

    let next = screen.submit(gateway.auth.as_ref()).await;

    assert_eq!(next, Some(Page::Dashboard));
    assert_eq!(screen.notification(), Some(&Notification::success(LOGGED_IN)));
    let session = screen.session().unwrap();
    assert!(!session.token.is_empty());
    assert_eq!(session.email, ADMIN_EMAIL);
    assert!(!screen.submitting);
}

#[tokio::test]
async fn test_wrong_password_shows_server_message() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = LoginScreen::new();
    screen.set_email(ADMIN_EMAIL);
    screen.set_password("wrong-password");

    let next = screen.submit(gateway.auth.as_ref()).await;

    assert_eq!(next, None);
    assert!(screen.session().is_none());
    let notification = screen.notification().unwrap();
    assert_eq!(notification.severity, Severity::Error);
    assert_eq!(notification.message, "E-mail ou senha inválidos");
}

#[tokio::test]
async fn test_malformed_input_never_reaches_backend() {
    let (gateway, _) = spawn_backend().await;
    let mut screen = LoginScreen::new();
    screen.set_email("not-an-email");
    screen.set_password("123");

    let next = screen.submit(gateway.auth.as_ref()).await;

    assert_eq!(next, None);
    assert_eq!(screen.error_for("email"), Some("Invalid Email address"));
    assert_eq!(screen.error_for("password"), Some("Password must be 6 character length"));
    assert!(screen.notification().is_none());
}
