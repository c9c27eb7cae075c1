//! Overlapping word chunker
//!
//! Splits a long text into fixed-size word windows so each piece stays under
//! a downstream length limit. Every window after the first repeats the tail
//! of its predecessor.

use std::iter::FusedIterator;

use validator::{Validate, ValidationError};

use crate::error::DocQaResult;
use crate::validation::validate_model;

pub const DEFAULT_MAX_WORDS: usize = 750;
pub const DEFAULT_OVERLAP: usize = 50;

/// Window size and overlap, in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct ChunkOptions {
    pub max_words: usize,
    pub overlap: usize,
}

impl ChunkOptions {
    pub fn new(max_words: usize, overlap: usize) -> Self {
        Self { max_words, overlap }
    }
}

impl Default for ChunkOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORDS, DEFAULT_OVERLAP)
    }
}

fn validate_window(options: &ChunkOptions) -> Result<(), ValidationError> {
    if options.max_words == 0 {
        let mut error = ValidationError::new("max_words");
        error.message = Some("max_words must be at least 1".into());
        return Err(error);
    }
    if options.overlap >= options.max_words {
        let mut error = ValidationError::new("overlap");
        error.message = Some(
            format!(
                "overlap ({}) must be smaller than max_words ({})",
                options.overlap, options.max_words
            )
            .into(),
        );
        return Err(error);
    }
    Ok(())
}

/// Lazy sequence of header-prefixed chunks.
///
/// Cloning the iterator before consuming it replays the same chunks.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    header: &'a str,
    words: Vec<&'a str>,
    options: ChunkOptions,
    position: usize,
}

impl<'a> Chunks<'a> {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.words.len() {
            return None;
        }

        let start = self.position.saturating_sub(self.options.overlap);
        let end = (self.position + self.options.max_words).min(self.words.len());
        self.position += self.options.max_words;

        let body = self.words[start..end].join(" ");
        let mut chunk = String::with_capacity(self.header.len() + body.len());
        chunk.push_str(self.header);
        chunk.push_str(&body);
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .words
            .len()
            .saturating_sub(self.position)
            .div_ceil(self.options.max_words);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}

/// Split `text` on whitespace and window it into chunks of at most
/// `max_words + overlap` words, each prefixed with `header`.
///
/// Chunk `k` covers words `[k*M - O, (k+1)*M)` clamped to the text, so the
/// number of chunks is `ceil(words / M)` and an empty text yields none.
/// Options with `overlap >= max_words` are rejected because the window would
/// stop advancing past previously emitted words.
pub fn split_into_chunks<'a>(
    text: &'a str,
    header: &'a str,
    options: ChunkOptions,
) -> DocQaResult<Chunks<'a>> {
    validate_model(&options)?;

    Ok(Chunks {
        header,
        words: text.split_whitespace().collect(),
        options,
        position: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(count: usize) -> String {
        (0..count)
            .map(|i| format!("w{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunks = split_into_chunks("", "H\n", ChunkOptions::default()).unwrap();
        assert_eq!(chunks.len(), 0);
        assert_eq!(chunks.count(), 0);

        let whitespace_only = split_into_chunks(" \n\t ", "H\n", ChunkOptions::default()).unwrap();
        assert_eq!(whitespace_only.count(), 0);
    }

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks: Vec<String> =
            split_into_chunks("alpha  beta\ngamma", "Filename: a.pdf\n", ChunkOptions::default())
                .unwrap()
                .collect();
        assert_eq!(chunks, vec!["Filename: a.pdf\nalpha beta gamma".to_string()]);
    }

    #[test]
    fn test_window_boundaries() {
        let text = numbered_words(10);
        let chunks: Vec<String> = split_into_chunks(&text, "", ChunkOptions::new(4, 1))
            .unwrap()
            .collect();

        assert_eq!(
            chunks,
            vec![
                "w0 w1 w2 w3".to_string(),
                "w3 w4 w5 w6 w7".to_string(),
                "w7 w8 w9".to_string(),
            ]
        );
    }

    #[test]
    fn test_overlap_matches_previous_tail() {
        let text = numbered_words(1600);
        let chunks: Vec<Vec<String>> = split_into_chunks(&text, "", ChunkOptions::default())
            .unwrap()
            .map(|c| c.split(' ').map(str::to_string).collect())
            .collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 750);
        assert_eq!(chunks[1].len(), 800);
        assert_eq!(chunks[2].len(), 150);
        assert_eq!(chunks[1][..50], chunks[0][700..]);
        assert_eq!(chunks[2][..50], chunks[1][750..]);
    }

    #[test]
    fn test_clone_replays_sequence() {
        let text = numbered_words(40);
        let chunks = split_into_chunks(&text, "H ", ChunkOptions::new(7, 2)).unwrap();
        let first: Vec<String> = chunks.clone().collect();
        let second: Vec<String> = chunks.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_overlap_not_smaller_than_window_is_rejected() {
        let err = split_into_chunks("a b c", "", ChunkOptions::new(5, 5)).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("overlap (5) must be smaller than max_words (5)"));

        let err = split_into_chunks("a b c", "", ChunkOptions::new(0, 0)).unwrap_err();
        assert!(err.to_string().contains("max_words must be at least 1"));
    }
}
