//! vicki-lambda
//!
//! HTTP surface for the Vicki dashboard: the cardiovascular risk calculator
//! and the day's patient roster, served through Axum on AWS Lambda.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/risk", post(routes::risk::compute))
        .route("/risk/form", post(routes::risk::compute_form))
        .route("/risk/coefficients", get(routes::risk::coefficients))
        .route("/patients", get(routes::patients::list_patients))
        .route("/patients/{id}", get(routes::patients::get_patient))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
