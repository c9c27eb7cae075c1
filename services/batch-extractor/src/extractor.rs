//! Training Data Extractor
//!
//! Turns a folder of PDFs into line-delimited JSON chunk records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use docqa_models::ChunkRecord;
use docqa_utils::pdf;
use docqa_utils::text::{replace_ligatures, split_into_chunks, ChunkOptions};
use docqa_utils::DocQaResult;
use tracing::{debug, info};

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub files: usize,
    pub records: usize,
}

pub struct PdfTextExtractor {
    pdf_folder: PathBuf,
    output_file: PathBuf,
    options: ChunkOptions,
}

impl PdfTextExtractor {
    pub fn new(pdf_folder: impl Into<PathBuf>, output_file: impl Into<PathBuf>, options: ChunkOptions) -> Self {
        Self {
            pdf_folder: pdf_folder.into(),
            output_file: output_file.into(),
            options,
        }
    }

    /// `*.pdf` files directly inside the input folder.
    pub fn pdf_files(&self) -> DocQaResult<Vec<PathBuf>> {
        let folder = glob::Pattern::escape(&self.pdf_folder.to_string_lossy());
        let pattern = format!("{}/*.pdf", folder.trim_end_matches('/'));

        let mut files = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Extract every PDF and write all records. Nothing is written unless
    /// every file succeeds.
    pub fn extract_data(&self) -> DocQaResult<ExtractionSummary> {
        let files = self.pdf_files()?;
        info!(
            folder = %self.pdf_folder.display(),
            files = files.len(),
            "Extracting training data"
        );

        let mut records = Vec::new();
        for path in &files {
            let text = pdf::extract_text(path)?;
            let file_records = records_for_text(&file_name(path), &text, self.options)?;
            debug!(file = %path.display(), chunks = file_records.len(), "chunked document");
            records.extend(file_records);
        }

        write_records(&self.output_file, &records)?;
        info!(
            output = %self.output_file.display(),
            records = records.len(),
            "Wrote training data"
        );

        Ok(ExtractionSummary {
            files: files.len(),
            records: records.len(),
        })
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Normalize one document's text and chunk it under a filename header.
pub fn records_for_text(
    file_name: &str,
    text: &str,
    options: ChunkOptions,
) -> DocQaResult<Vec<ChunkRecord>> {
    let text = replace_ligatures(text);
    let header = format!("Filename: {}\n", file_name);

    let chunks = split_into_chunks(&text, &header, options)?;
    debug!(file_name, words = chunks.word_count(), "split document");

    Ok(chunks.map(ChunkRecord::assistant).collect())
}

/// One JSON object per line.
pub fn write_records(path: &Path, records: &[ChunkRecord]) -> DocQaResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
