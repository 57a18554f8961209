// shared/src/lib.rs

use std::fmt;

pub mod config;

/// A presentation-level problem with one input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn required(field: &'static str) -> Self {
        Self::new(field, "Campo obrigatório")
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },
    /// A 2xx body that does not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("invalid input: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
}

impl ApiError {
    pub fn server(status: u16, message: Option<String>) -> Self {
        ApiError::Server { status, message }
    }

    /// Message the server attached to a rejected request, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_only_for_server_errors() {
        let conflict = ApiError::server(409, Some("Estado possui cidades".into()));
        assert_eq!(conflict.server_message(), Some("Estado possui cidades"));
        assert_eq!(conflict.status(), Some(409));

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.server_message(), None);
        assert_eq!(network.status(), None);
    }

    #[test]
    fn test_not_found_is_a_server_error() {
        assert!(ApiError::server(404, None).is_not_found());
        assert!(!ApiError::server(500, None).is_not_found());
    }

    #[test]
    fn test_display_formats() {
        let err = ApiError::server(500, None);
        assert_eq!(err.to_string(), "server responded 500: no message");

        let err = ApiError::Validation(vec![
            FieldError::required("uf"),
            FieldError::new("icms_local", "Número inválido"),
        ]);
        assert_eq!(
            err.to_string(),
            "invalid input: uf: Campo obrigatório, icms_local: Número inválido"
        );
    }
}
