//! fce-api
//!
//! JSON HTTP surface over `fce-scoring` for the evaluation forms.

pub mod config;
pub mod error;
pub mod routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/mtm/standards", get(routes::standards::list_standards))
        .route(
            "/mtm/standards/{task_id}",
            get(routes::standards::get_standard_detail),
        )
        .route("/mtm/standard-time", post(routes::scoring::standard_time))
        .route("/mtm/percent-is", post(routes::scoring::percent_is))
        .route("/mtm/trials", post(routes::scoring::trial))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
