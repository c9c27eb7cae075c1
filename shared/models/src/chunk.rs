use serde::{Deserialize, Serialize};

use crate::transcript::TranscriptEntry;

/// One line of the fine-tuning output: a single assistant message wrapped
/// under `messages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub messages: Vec<TranscriptEntry>,
}

impl ChunkRecord {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            messages: vec![TranscriptEntry::assistant(content)],
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}
