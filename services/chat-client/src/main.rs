//! DocQA Chat Client
//!
//! Terminal chat over one PDF: select a page, ask questions about it, and
//! keep the transcript for the life of the process.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use docqa_models::ChatSession;
use docqa_utils::{init_logging, pdf, AppConfig};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod answer_client;
mod chat;

use answer_client::AnswerClient;
use chat::{parse_command, ChatApp, HELP};

#[derive(Parser, Debug)]
#[command(name = "docqa-chat", version, about = "Ask questions about a PDF page")]
struct Args {
    /// Base URL of the answer service
    #[arg(long)]
    api_url: Option<String>,

    /// PDF shown to the user; must match the service's document
    #[arg(long)]
    pdf: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    let api_url = args.api_url.unwrap_or(config.client.api_url);
    let pdf_path = args
        .pdf
        .unwrap_or_else(|| PathBuf::from(&config.document.pdf_path));

    let total_pages = pdf::page_count(&pdf_path)
        .with_context(|| format!("failed to open {}", pdf_path.display()))?;
    info!(api_url = %api_url, pages = total_pages, "Starting chat session");

    let mut app = ChatApp::new(
        ChatSession::new(total_pages),
        AnswerClient::new(&api_url),
        pdf_path,
        config.document.source_url,
    );

    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", HELP)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        write!(stdout, "{}", app.prompt())?;
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if !app.handle(parse_command(&line), &mut stdout).await? {
            break;
        }
    }

    info!(messages = app.session().messages().len(), "Chat session ended");
    Ok(())
}
