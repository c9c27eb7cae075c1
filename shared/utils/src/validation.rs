use crate::error::{DocQaError, DocQaResult};
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> DocQaResult<()> {
    model.validate().map_err(DocQaError::from)
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, error.code.as_ref()) {
                // struct-level checks are reported under "__all__"
                (Some(message), _) if field == "__all__" => message.to_string(),
                (Some(message), _) => format!("{}: {}", field, message),
                (None, "range") => format!("Value out of range for field '{}'", field),
                (None, "required") => format!("Field '{}' is required", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(range(min = 1))]
        count: usize,
    }

    #[test]
    fn test_range_violation_is_reported() {
        let err = validate_model(&Sample { count: 0 }).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("Value out of range for field 'count'"));
    }

    #[test]
    fn test_valid_model_passes() {
        assert!(validate_model(&Sample { count: 3 }).is_ok());
    }
}
