use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared_http::api::{ErrorResponse, LoginRequest, LoginResponse};
use tracing::{info, warn};
use uuid::Uuid;

use crate::state::AppState;

const SESSION_TTL_SECS: u64 = 3600;

/// POST /api/auth/login
///
/// Checks the credentials against the configured administrator and hands
/// out an opaque session token.
pub async fn login(State(state): State<AppState>, Json(request): Json<LoginRequest>) -> Response {
    let config = &state.config;
    if !request.email.eq_ignore_ascii_case(&config.admin_email)
        || request.password != config.admin_password
    {
        warn!("Rejected login for {}", request.email);
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("E-mail ou senha inválidos")),
        )
            .into_response();
    }

    info!("Login succeeded for {}", request.email);
    Json(LoginResponse {
        token: Uuid::new_v4().to_string(),
        expires_in: SESSION_TTL_SECS,
        email: request.email,
    })
    .into_response()
}
