use axum::{extract::State, response::Json, Form};
use docqa_models::{QuestionAnswerRequest, QuestionAnswerResponse};
use docqa_utils::{pdf::extract_text_from_page, DocQaError};
use tracing::info;

use crate::middleware::ApiError;
use crate::prompt::{build_prompt, clean_answer};
use crate::AppState;

/// Answer a question about one page of the configured document.
pub async fn question_answer_by_chagpt(
    State(state): State<AppState>,
    Form(request): Form<QuestionAnswerRequest>,
) -> Result<Json<QuestionAnswerResponse>, ApiError> {
    let page_number = request.page_number;
    let pdf_path = state.pdf_path.clone();

    let page_text = tokio::task::spawn_blocking(move || {
        extract_text_from_page(&pdf_path, page_number)
    })
    .await
    .map_err(|e| DocQaError::internal(format!("page extraction task failed: {}", e)))??;

    let prompt = build_prompt(&page_text, &request.question);
    let completion = state.completion.complete(&prompt).await?;
    let answer = clean_answer(&completion);

    info!(
        page_number,
        page_chars = page_text.len(),
        answer_chars = answer.len(),
        "answered question"
    );

    Ok(Json(QuestionAnswerResponse {
        question: request.question,
        answer,
    }))
}
