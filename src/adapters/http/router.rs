//! Top-level router assembly.

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::get,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::auth::auth_routes;
use super::chat::chat_routes;
use super::clients::client_routes;
use super::dto::{BannerResponse, HealthResponse};
use super::middleware::auth_middleware;
use super::plans::plan_routes;
use super::sessions::session_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// Every API route, with bearer-token extraction applied.
pub fn api_router(state: AppState) -> Router {
    let auth_state = state.auth.clone();

    Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .nest("/auth", auth_routes())
        .nest("/clients", client_routes())
        .nest("/sessions", session_routes())
        .nest("/plans", plan_routes())
        .nest("/chat", chat_routes())
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state)
}

/// Wraps the API in request tracing, CORS and the request timeout.
pub fn with_server_layers(router: Router, config: &ServerConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors_origins_list()))
            .layer(TimeoutLayer::new(config.request_timeout())),
    )
}

/// CORS policy for the configured origins. `*` allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}

async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "AI Coach API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
