use anyhow::Result;
use docqa_answer_service::{create_app, AppState};
use docqa_utils::{init_logging, AppConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration ({}), using defaults", e);
        AppConfig::default()
    });

    init_logging(&config.logging)?;
    info!("Starting DocQA Answer Service");

    if config.completion.api_key.is_empty() {
        warn!("No completion API key configured; set OPENAI_API_KEY");
    }

    let state = AppState::from_config(&config)?;
    info!(
        document = %state.pdf_path.display(),
        model = state.completion.model(),
        "Answering from document"
    );

    let app = create_app(state, &config);

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    info!("Answer Service listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
