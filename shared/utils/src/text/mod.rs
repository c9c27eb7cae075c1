//! Text preparation for prompts and training data.

pub mod chunker;
pub mod normalize;

pub use chunker::{split_into_chunks, ChunkOptions, Chunks, DEFAULT_MAX_WORDS, DEFAULT_OVERLAP};
pub use normalize::{replace_ligatures, LIGATURE_REPLACEMENTS};

/// Collapse every whitespace run to a single space and drop leading and
/// trailing whitespace.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
