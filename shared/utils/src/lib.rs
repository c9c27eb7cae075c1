pub mod config;
pub mod logging;
pub mod error;
pub mod validation;
pub mod text;
pub mod pdf;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(test)]
mod property_tests;

pub use self::config::*;
pub use self::logging::*;
pub use self::error::*;
pub use self::validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.document.pdf_path, "data/Attention_Is_All You_Need.pdf");
    }

    #[test]
    fn test_error_handling() {
        let error = DocQaError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);

        let error = DocQaError::external_service("completion API", "boom");
        assert_eq!(error.http_status_code(), 502);

        let body = ErrorResponse::from(DocQaError::document_processing("bad xref"));
        assert_eq!(body.code, "DOCUMENT_PROCESSING_ERROR");
        assert!(body.message.contains("bad xref"));
    }
}
