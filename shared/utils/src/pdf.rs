//! PDF text access
//!
//! Text comes from pdf-extract, which breaks lines wherever the text position
//! moves. lopdf is only used to count pages.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::{DocQaError, DocQaResult};
use crate::text::collapse_whitespace;

/// Number of pages in the document.
pub fn page_count(pdf_path: &Path) -> DocQaResult<usize> {
    let document = Document::load(pdf_path).map_err(|e| {
        DocQaError::document_processing(format!("failed to open {}: {}", pdf_path.display(), e))
    })?;
    Ok(document.get_pages().len())
}

/// Text of the zero-based page `page_number`, whitespace-collapsed.
///
/// A page is made of text blocks separated by blank lines. Each block has its
/// words joined by single spaces and the blocks are concatenated. A page
/// number outside the document, including a negative one, yields an empty
/// string.
pub fn extract_text_from_page(pdf_path: &Path, page_number: i64) -> DocQaResult<String> {
    let pages = extract_pages(pdf_path)?;

    let page_text = usize::try_from(page_number)
        .ok()
        .and_then(|index| pages.get(index))
        .map(|raw| join_blocks(raw))
        .unwrap_or_default();

    debug!(
        page_number,
        pages = pages.len(),
        chars = page_text.len(),
        "extracted page text from {}",
        pdf_path.display()
    );
    Ok(page_text)
}

/// Full text of the document, one page after another.
pub fn extract_text(pdf_path: &Path) -> DocQaResult<String> {
    Ok(extract_pages(pdf_path)?.join("\n"))
}

fn join_blocks(raw: &str) -> String {
    let mut text = String::new();
    let mut block = String::new();
    for line in raw.lines() {
        if line.trim().is_empty() {
            text.push_str(&collapse_whitespace(&block));
            block.clear();
        } else {
            block.push_str(line);
            block.push('\n');
        }
    }
    text.push_str(&collapse_whitespace(&block));
    text.trim().to_string()
}

/// Raw text of every page in order. pdf-extract can panic on malformed
/// documents, so a panic is reported as a processing error.
fn extract_pages(pdf_path: &Path) -> DocQaResult<Vec<String>> {
    let bytes = std::fs::read(pdf_path).map_err(|e| {
        DocQaError::document_processing(format!("failed to open {}: {}", pdf_path.display(), e))
    })?;

    match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&bytes)
    })) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(DocQaError::document_processing(format!(
            "failed to extract text from {}: {}",
            pdf_path.display(),
            e
        ))),
        Err(_) => Err(DocQaError::document_processing(format!(
            "failed to extract text from {}: malformed document",
            pdf_path.display()
        ))),
    }
}
