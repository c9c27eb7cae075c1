//! Answer Service Client

use docqa_models::{QuestionAnswerRequest, QuestionAnswerResponse};
use docqa_utils::DocQaResult;
use reqwest::{Client, StatusCode};
use tracing::debug;

#[derive(Clone)]
pub struct AnswerClient {
    client: Client,
    api_url: String,
}

impl AnswerClient {
    pub fn new(api_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Ask `question` about the zero-based page `page_number`.
    ///
    /// Any status other than 200 becomes the text `Error: <status>` instead
    /// of an error; only transport and decoding failures are returned as `Err`.
    pub async fn ask(&self, page_number: usize, question: &str) -> DocQaResult<String> {
        let request = QuestionAnswerRequest {
            page_number: page_number as i64,
            question: question.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/question_answer_by_chagpt/", self.api_url))
            .form(&request)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, page_number, "answer service responded");

        if status == StatusCode::OK {
            let body: QuestionAnswerResponse = response.json().await?;
            Ok(body.answer)
        } else {
            Ok(format!("Error: {}", status.as_u16()))
        }
    }
}
