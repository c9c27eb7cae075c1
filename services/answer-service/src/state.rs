use std::path::PathBuf;
use std::sync::Arc;

use docqa_utils::{AppConfig, DocQaResult};

use crate::completion_client::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub pdf_path: Arc<PathBuf>,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(pdf_path: impl Into<PathBuf>, completion: CompletionClient) -> Self {
        Self {
            pdf_path: Arc::new(pdf_path.into()),
            completion,
        }
    }

    pub fn from_config(config: &AppConfig) -> DocQaResult<Self> {
        let completion = CompletionClient::new(&config.completion)?;
        Ok(Self::new(&config.document.pdf_path, completion))
    }
}
