use crate::config::{Config, DEFAULT_MAX_BODY_BYTES};
use crate::handlers::{self, AppState};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Builds the application router around an existing state.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    let business_routes = Router::new()
        .route(
            "/businesses",
            get(handlers::list_businesses).post(handlers::create_business),
        )
        .route(
            "/businesses/:id",
            get(handlers::get_business)
                .put(handlers::update_business)
                .delete(handlers::delete_business),
        )
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(max_body_bytes)));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(business_routes)
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Router with a fresh, empty store.
pub fn app() -> Router {
    build_router(AppState::new(), DEFAULT_MAX_BODY_BYTES)
}

/// Router with a fresh, empty store, sized from `config`.
pub fn app_with_config(config: &Config) -> Router {
    build_router(AppState::new(), config.max_body_bytes)
}
