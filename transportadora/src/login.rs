use shared::{ApiError, FieldError, Result};
use shared_http::api::{LoginRequest, LoginResponse};
use tracing::warn;

use crate::navigation::Page;
use crate::notification::Notification;
use crate::ports::Authenticator;

pub const LOGGED_IN: &str = "Logged In Successfully";
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> std::result::Result<LoginRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required!"));
        } else if !is_email(email) {
            errors.push(FieldError::new("email", "Invalid Email address"));
        }

        if self.password.is_empty() {
            errors.push(FieldError::new("password", "Password is required!"));
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError::new("password", "Password must be 6 character length"));
        }

        if errors.is_empty() {
            Ok(LoginRequest {
                email: email.to_string(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.chars().any(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split('.')
            .all(|label| !label.is_empty())
        && domain.contains('.')
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginScreen {
    pub credentials: Credentials,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
    notification: Option<Notification>,
    session: Option<LoginResponse>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn session(&self) -> Option<&LoginResponse> {
        self.session.as_ref()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.credentials.email = value.into();
        self.errors.retain(|e| e.field != "email");
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.credentials.password = value.into();
        self.errors.retain(|e| e.field != "password");
    }

    /// Request to send, or `None` when the shape check fails.
    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        match self.credentials.validate() {
            Ok(request) => {
                self.errors.clear();
                self.submitting = true;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Page to navigate to on success.
    pub fn finish_submit(&mut self, result: Result<LoginResponse>) -> Option<Page> {
        self.submitting = false;
        match result {
            Ok(session) => {
                self.session = Some(session);
                self.notification = Some(Notification::success(LOGGED_IN));
                Some(Page::Dashboard)
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                self.notification = Some(Notification::error(failure_message(&e)));
                None
            }
        }
    }

    pub async fn submit(&mut self, auth: &dyn Authenticator) -> Option<Page> {
        let request = self.begin_submit()?;
        let result = auth.login(&request).await;
        self.finish_submit(result)
    }
}

fn failure_message(error: &ApiError) -> String {
    error
        .server_message()
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    #[derive(Default)]
    struct CountingAuth {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Authenticator for CountingAuth {
        async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.password == "secret1" {
                Ok(LoginResponse {
                    token: "t".into(),
                    expires_in: 3600,
                    email: request.email.clone(),
                })
            } else {
                Err(ApiError::server(401, Some("E-mail ou senha inválidos".into())))
            }
        }
    }

    #[test]
    fn test_shape_validation() {
        let bad = Credentials {
            email: "not-an-email".into(),
            password: "123".into(),
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 2);

        for email in ["a@b", "@b.com", "a b@c.com", "a@b..com"] {
            assert!(!is_email(email), "{email} should be rejected");
        }
        assert!(is_email("admin@transportadora.com"));
    }

    #[tokio::test]
    async fn test_invalid_credentials_never_reach_authenticator() {
        let auth = CountingAuth::default();
        let mut screen = LoginScreen::new();
        screen.set_email("admin@transportadora.com");
        screen.set_password("123");

        assert_eq!(screen.submit(&auth).await, None);
        assert_eq!(auth.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            screen.error_for("password"),
            Some("Password must be 6 character length")
        );
        assert!(screen.notification().is_none());
    }

    #[tokio::test]
    async fn test_success_redirects_to_dashboard() {
        let auth = CountingAuth::default();
        let mut screen = LoginScreen::new();
        screen.set_email("admin@transportadora.com");
        screen.set_password("secret1");

        assert_eq!(screen.submit(&auth).await, Some(Page::Dashboard));
        assert_eq!(screen.notification(), Some(&Notification::success(LOGGED_IN)));
        assert_eq!(screen.session().map(|s| s.token.as_str()), Some("t"));
    }

    #[tokio::test]
    async fn test_failure_shows_server_message() {
        let auth = CountingAuth::default();
        let mut screen = LoginScreen::new();
        screen.set_email("admin@transportadora.com");
        screen.set_password("wrong-password");

        assert_eq!(screen.submit(&auth).await, None);
        assert!(!screen.submitting);
        assert_eq!(
            screen.notification(),
            Some(&Notification::error("E-mail ou senha inválidos"))
        );
    }
}
