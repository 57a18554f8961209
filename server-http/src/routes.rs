use crate::handlers::{self, resources};
use crate::middleware::require_bearer;
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use shared::config::ServerConfig;
use shared_http::api::{
    Cidade, Cliente, Estado, Frete, Funcionario, PessoaFisica, PessoaJuridica, Record,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// `/{collection}` and `/{collection}/{id}` for one record type
fn resource_routes<E: Record>() -> Router<AppState> {
    let collection = format!("/{}", E::COLLECTION);
    let item = format!("/{}/{{id}}", E::COLLECTION);
    Router::new()
        .route(
            &collection,
            get(resources::list::<E>).post(resources::create::<E>),
        )
        .route(
            &item,
            get(resources::get::<E>)
                .put(resources::update::<E>)
                .delete(resources::delete::<E>),
        )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build and configure the application router
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(handlers::login))
        .merge(resource_routes::<Cliente>())
        .merge(resource_routes::<Cidade>())
        .merge(resource_routes::<Estado>())
        .merge(resource_routes::<Frete>())
        .merge(resource_routes::<Funcionario>())
        .merge(resource_routes::<PessoaFisica>())
        .merge(resource_routes::<PessoaJuridica>());

    // Token API, bearer-protected
    let accounts = Router::new()
        .route("/get-token/customers", get(handlers::list_customers))
        .route(
            "/get-token/customers/{customer_id}",
            get(handlers::get_customer),
        )
        .route("/delete-client", delete(handlers::deactivate_client))
        .route("/reactivate-client", put(handlers::reactivate_client))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard reports
        .route("/media-fretes/{id_estado}", get(handlers::media_fretes))
        .route(
            "/arrecadacao-fretes/{id_estado}",
            get(handlers::arrecadacao_fretes),
        )
        .route(
            "/fretes-funcionarios/{mes}/{ano}",
            get(handlers::fretes_funcionarios),
        )
        .nest("/api", api)
        .merge(accounts)
        // Middleware
        .layer(cors_layer(&state.config))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountStore;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let config = ServerConfig::new("admin@transportadora.com", "admin123", "secret");
        build_router(AppState::new(config, AccountStore::demo(3)))
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let response = app()
            .oneshot(Request::get("/api/estados/9").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_token_api_requires_bearer() {
        let response = app()
            .oneshot(
                Request::get("/get-token/customers?page=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app()
            .oneshot(
                Request::get("/get-token/customers?page=1")
                    .header(header::AUTHORIZATION, "Bearer secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
