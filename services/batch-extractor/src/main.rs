//! DocQA Batch Extractor
//!
//! Converts a folder of PDFs into chunked JSONL records for fine-tuning.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use docqa_utils::text::ChunkOptions;
use docqa_utils::{init_logging, AppConfig};
use tracing::info;

mod extractor;

use extractor::PdfTextExtractor;

#[derive(Parser, Debug)]
#[command(name = "docqa-batch-extractor", version, about = "Extract PDF text into chunked JSONL training data")]
struct Args {
    /// Folder scanned for *.pdf files
    #[arg(long)]
    pdf_folder: Option<PathBuf>,

    /// Output JSONL file (overwritten)
    #[arg(long)]
    output_file: Option<PathBuf>,

    /// Words per chunk before overlap
    #[arg(long)]
    max_words: Option<usize>,

    /// Words repeated from the previous chunk
    #[arg(long)]
    overlap: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    let pdf_folder = args
        .pdf_folder
        .unwrap_or_else(|| PathBuf::from(&config.extraction.pdf_folder));
    let output_file = args
        .output_file
        .unwrap_or_else(|| PathBuf::from(&config.extraction.output_file));
    let options = ChunkOptions::new(
        args.max_words.unwrap_or(config.extraction.max_words),
        args.overlap.unwrap_or(config.extraction.overlap),
    );

    let summary = PdfTextExtractor::new(pdf_folder, output_file, options).extract_data()?;
    info!(files = summary.files, records = summary.records, "Extraction complete");

    Ok(())
}
