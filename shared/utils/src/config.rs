use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub document: DocumentConfig,
    pub completion: CompletionConfig,
    pub client: ClientConfig,
    pub extraction: ExtractionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_size: usize,
}

/// The fixed document served by the answer service and shown by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    pub pdf_path: String,
    pub source_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the answer service.
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub pdf_folder: String,
    pub output_file: String,
    pub max_words: usize,
    pub overlap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with DOCQA prefix, e.g. DOCQA_SERVER__PORT
            .add_source(
                Environment::with_prefix("DOCQA")
                    .prefix_separator("_")
                    .separator("__"),
            )
            // Unprefixed variables used by existing deployments
            .set_override_option("client.api_url", env::var("API_URL").ok())?
            .set_override_option("completion.api_key", env::var("OPENAI_API_KEY").ok())?
            .set_override_option("completion.model", env::var("CHATGPT_MODEL").ok())?;

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                max_request_size: 1024 * 1024, // 1MB
            },
            document: DocumentConfig {
                pdf_path: "data/Attention_Is_All You_Need.pdf".to_string(),
                source_url: "https://doi.org/10.48550/arXiv.1706.03762".to_string(),
            },
            completion: CompletionConfig {
                api_url: "https://api.openai.com/v1".to_string(),
                api_key: String::new(),
                model: "gpt-3.5-turbo-instruct".to_string(),
                timeout_seconds: None,
            },
            client: ClientConfig {
                api_url: "http://localhost:8000".to_string(),
            },
            extraction: ExtractionConfig {
                pdf_folder: "data/train".to_string(),
                output_file: "data/train/output.jsonl".to_string(),
                max_words: 750,
                overlap: 50,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
                file_path: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.extraction.max_words, 750);
        assert_eq!(config.extraction.overlap, 50);
        assert!(config.completion.timeout_seconds.is_none());
    }

    #[test]
    fn test_load_layers_environment_over_defaults() {
        env::set_var("DOCQA_SERVER__PORT", "9100");
        env::set_var("CHATGPT_MODEL", "test-model");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.completion.model, "test-model");
        assert_eq!(config.extraction.output_file, "data/train/output.jsonl");

        env::remove_var("DOCQA_SERVER__PORT");
        env::remove_var("CHATGPT_MODEL");
    }
}
