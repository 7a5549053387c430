use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlobeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDateError { value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl GlobeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GlobeError::IoError(_) => ErrorCategory::Io,
            GlobeError::SerializationError(_) | GlobeError::CsvError(_) => ErrorCategory::Data,
            GlobeError::MissingConfigError { .. }
            | GlobeError::InvalidConfigValueError { .. }
            | GlobeError::ConfigValidationError { .. }
            | GlobeError::InvalidDateError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GlobeError::SerializationError(_) | GlobeError::CsvError(_) => ErrorSeverity::Medium,
            GlobeError::MissingConfigError { .. }
            | GlobeError::InvalidConfigValueError { .. }
            | GlobeError::ConfigValidationError { .. }
            | GlobeError::InvalidDateError { .. } => ErrorSeverity::High,
            GlobeError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the species file exists and the output directory is writable",
            ErrorCategory::Data => "Check that the species file is a valid JSON array of species records",
            ErrorCategory::Configuration => "Fix the reported option in the command line or TOML file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GlobeError::IoError(e) => format!("Could not access a file: {}", e),
            GlobeError::SerializationError(e) => format!("The species data is not valid JSON: {}", e),
            GlobeError::CsvError(e) => format!("Could not write the CSV export: {}", e),
            GlobeError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            GlobeError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            GlobeError::InvalidDateError { value } => {
                format!("'{}' is not a calendar date (use YYYY-MM-DD)", value)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlobeError>;
