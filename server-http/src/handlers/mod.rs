pub mod accounts;
pub mod auth;
pub mod health;
pub mod reports;
pub mod resources;

pub use accounts::{deactivate_client, get_customer, list_customers, reactivate_client};
pub use auth::login;
pub use health::health_check;
pub use reports::{arrecadacao_fretes, fretes_funcionarios, media_fretes};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared_http::api::ErrorResponse;
use tracing::error;

use crate::store::StoreError;

impl StoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } | StoreError::UnknownCustomer(_) => StatusCode::NOT_FOUND,
            StoreError::Duplicate { .. } | StoreError::Referenced { .. } => StatusCode::CONFLICT,
            StoreError::MissingReference { .. } | StoreError::InvalidKey { .. } => {
                StatusCode::BAD_REQUEST
            }
            StoreError::Invalid(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

/// 400 with an `{"error"}` body.
pub(crate) fn bad_request(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}
