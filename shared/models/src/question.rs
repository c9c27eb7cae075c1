use serde::{Deserialize, Serialize};

/// Form payload of the answer endpoint.
///
/// `page_number` is zero-based. Negative or too-large values are accepted and
/// simply select no page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswerRequest {
    pub page_number: i64,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerResponse {
    pub question: String,
    pub answer: String,
}
