//! Desk API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost → innermost):
//! 1. CORS → 2. Cache-Control: no-store → 3. Access log

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the desk API router.
pub fn desk_api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/patients", post(endpoints::patients::register))
        .route("/patients/:id/start", post(endpoints::patients::start))
        .route("/patients/:id/complete", post(endpoints::patients::complete))
        .route("/queue", get(endpoints::patients::queue))
        .route("/consultations", get(endpoints::patients::consultations))
        .route("/completed", get(endpoints::patients::completed))
        .route("/assignments", get(endpoints::assignments::list))
        .route("/doctors", get(endpoints::doctors::list))
        .route("/dashboard", get(endpoints::dashboard::summary))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::access_log::log_access))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Browser front end is served from a different origin
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", api)
}
