//! DocQA Answer Service
//!
//! Answers questions about a single page of a fixed PDF document by
//! prompting a text completion API with that page's text.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    Router,
};
use docqa_utils::AppConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod completion_client;
pub mod handlers;
pub mod middleware;
pub mod prompt;
pub mod routes;
pub mod state;

pub use state::AppState;

use middleware::request_id_middleware;

pub fn create_app(state: AppState, config: &AppConfig) -> Router {
    routes::create_api_routes()
        // Middleware stack
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST])
                        .allow_headers([header::CONTENT_TYPE]),
                )
                .layer(DefaultBodyLimit::max(config.server.max_request_size))
                .layer(axum::middleware::from_fn(request_id_middleware)),
        )
        .with_state(state)
}
