use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use shared_http::api::ErrorResponse;
use tracing::warn;

use crate::state::AppState;

/// Extract the token from `Authorization: Bearer <token>`
fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let mut parts = auth_header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Bearer")],
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

/// Guards the token API with the configured bearer token
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, Response> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(unauthorized("Missing Authorization header"));
    };

    let Some(token) = extract_bearer_token(auth_header) else {
        return Err(unauthorized("Invalid Authorization header format"));
    };

    if token != state.config.api_token {
        warn!("Rejected request to {} with an unknown token", request.uri().path());
        return Err(unauthorized("Invalid token"));
    }

    Ok(next.run(request).await)
}
