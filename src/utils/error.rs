use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Calculator '{calculator}' declares field '{field}' more than once")]
    DuplicateFieldError { calculator: String, field: String },

    #[error("Calculator '{calculator}' has an invalid field definition: {message}")]
    InvalidFieldError { calculator: String, message: String },

    #[error("Unknown calculator: '{id}'")]
    UnknownCalculatorError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Catalog,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FormsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormsError::IoError(_) | FormsError::SerializationError(_) => ErrorCategory::Io,
            FormsError::ConfigValidationError { .. }
            | FormsError::MissingConfigError { .. }
            | FormsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            FormsError::DuplicateFieldError { .. } | FormsError::InvalidFieldError { .. } => {
                ErrorCategory::Catalog
            }
            FormsError::UnknownCalculatorError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Configuration => ErrorSeverity::High,
            // 目錄本身壞掉代表建置有問題
            ErrorCategory::Catalog => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FormsError::IoError(_) => "Check that the file exists and is readable",
            FormsError::SerializationError(_) => {
                "The calculator listing must be a JSON array of objects with an \"id\" field"
            }
            FormsError::ConfigValidationError { .. } => "Fix the TOML syntax in the config file",
            FormsError::MissingConfigError { .. } => {
                "Provide the value on the command line or in the config file"
            }
            FormsError::InvalidConfigValueError { .. } => {
                "Correct the value in the config file or command-line flag"
            }
            FormsError::DuplicateFieldError { .. } | FormsError::InvalidFieldError { .. } => {
                "Fix the form definition in the built-in catalog"
            }
            FormsError::UnknownCalculatorError { .. } => {
                "Run `calc-forms list` to see the available calculator ids"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormsError::IoError(e) => format!("Could not read file: {}", e),
            FormsError::SerializationError(e) => format!("Could not parse JSON: {}", e),
            FormsError::UnknownCalculatorError { id } => {
                format!("No form is defined for calculator '{}'", id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormsError::DuplicateFieldError {
            calculator: "bmi".to_string(),
            field: "weight".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Calculator 'bmi' declares field 'weight' more than once"
        );
    }

    #[test]
    fn test_error_severity() {
        let unknown = FormsError::UnknownCalculatorError {
            id: "nope".to_string(),
        };
        assert_eq!(unknown.category(), ErrorCategory::Input);
        assert_eq!(unknown.severity(), ErrorSeverity::Medium);

        let missing = FormsError::MissingConfigError {
            field: "verify.calculators_file".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let invalid = FormsError::InvalidFieldError {
            calculator: "x".to_string(),
            message: "empty label".to_string(),
        };
        assert_eq!(invalid.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FormsError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.user_friendly_message().contains("gone"));
    }
}
