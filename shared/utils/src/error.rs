use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::format_validation_errors;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum DocQaError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Document processing error: {message}")]
    DocumentProcessing { message: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl DocQaError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn document_processing(message: impl Into<String>) -> Self {
        Self::DocumentProcessing {
            message: message.into(),
        }
    }

    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::DocumentProcessing { .. } => "DOCUMENT_PROCESSING_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::DocumentProcessing { .. } => 422,
            Self::ExternalService { .. } => 502,
            Self::Configuration { .. } => 500,
            Self::Io { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type DocQaResult<T> = Result<T, DocQaError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<DocQaError> for ErrorResponse {
    fn from(error: DocQaError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for DocQaError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for DocQaError {
    fn from(error: reqwest::Error) -> Self {
        Self::external_service("HTTP Client", error.to_string())
    }
}

impl From<serde_json::Error> for DocQaError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}

impl From<lopdf::Error> for DocQaError {
    fn from(error: lopdf::Error) -> Self {
        Self::document_processing(error.to_string())
    }
}

impl From<pdf_extract::OutputError> for DocQaError {
    fn from(error: pdf_extract::OutputError) -> Self {
        Self::document_processing(error.to_string())
    }
}

impl From<glob::PatternError> for DocQaError {
    fn from(error: glob::PatternError) -> Self {
        Self::validation("pattern", error.to_string())
    }
}

impl From<glob::GlobError> for DocQaError {
    fn from(error: glob::GlobError) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for DocQaError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::validation("model", format_validation_errors(&errors))
    }
}

impl From<config::ConfigError> for DocQaError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
