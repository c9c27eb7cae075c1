use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers::*, AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/docs", get(api_docs))
        .route("/openapi.json", get(openapi_spec))
        .route("/health", get(health_check))
        .route("/question_answer_by_chagpt/", post(question_answer_by_chagpt))
}
