//! Completion API Client
//!
//! Calls an OpenAI-compatible text completion endpoint with fixed sampling
//! parameters.

use docqa_utils::{CompletionConfig, DocQaError, DocQaResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const SERVICE_NAME: &str = "completion API";

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f64 = 0.2;
const TOP_P: f64 = 1.0;
const STOP: &str = "\n";

/// Completion client for question answering
#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> DocQaResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `prompt` and return the text of the single completion, untrimmed.
    pub async fn complete(&self, prompt: &str) -> DocQaResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            n: 1,
            stop: STOP,
            logprobs: 0,
            echo: false,
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "requesting completion");

        let response = self
            .client
            .post(format!("{}/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(DocQaError::external_service(
                SERVICE_NAME,
                format!("{}: {}", status, error_text),
            ));
        }

        let result: CompletionResponse = response.json().await?;

        result
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| DocQaError::external_service(SERVICE_NAME, "response contained no choices"))
    }
}

/// Completion API request
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
    n: u32,
    stop: &'a str,
    logprobs: u32,
    echo: bool,
}

/// Completion API response
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}
