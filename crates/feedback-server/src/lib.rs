//! feedback-server
//!
//! HTTP API over the feedback store: submissions, listing, statistics,
//! bulk clear and PDF export.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/feedback",
            get(routes::feedback::list_feedback)
                .post(routes::feedback::create_feedback)
                .delete(routes::feedback::clear_feedback),
        )
        .route("/api/feedback/stats", get(routes::stats::get_stats))
        .route("/api/feedback/export", get(routes::export::export_report))
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
