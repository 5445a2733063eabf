use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumerologyError {
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("Validation error on '{field}': {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Calculation was cancelled before results were ready")]
    Cancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Session,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumerologyError {
    pub fn validation(field: &str, message: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDate { .. } | Self::ValidationError { .. } => ErrorCategory::Input,
            Self::InvalidConfigValueError { .. }
            | Self::ConfigError { .. }
            | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::Cancelled => ErrorCategory::Session,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Cancelled => ErrorSeverity::Low,
            Self::InvalidDate { .. } | Self::ValidationError { .. } => ErrorSeverity::Medium,
            Self::InvalidConfigValueError { .. }
            | Self::ConfigError { .. }
            | Self::TomlError(_) => ErrorSeverity::High,
            Self::IoError(_) | Self::SerializationError(_) | Self::CsvError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidDate { input, .. } => {
                format!("Could not read '{}' as a birth date", input)
            }
            Self::ValidationError { message, .. } => message.clone(),
            Self::InvalidConfigValueError { field, value, .. } => {
                format!("Setting '{}' has an unusable value '{}'", field, value)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::Cancelled => "The calculation was cancelled".to_string(),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Could not format the numerology results".to_string()
            }
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidDate { .. } => {
                "Use YYYY-MM-DD, MM/DD/YYYY or 'Month D, YYYY' for the birth date"
            }
            Self::ValidationError { .. } => "Fill in first name, last name and birth date",
            Self::InvalidConfigValueError { .. } | Self::ConfigError { .. } => {
                "Check the command-line flags and the [calculation] / [output] tables"
            }
            Self::TomlError(_) => "Fix the syntax of the configuration file",
            Self::Cancelled => "Submit the form again to start a new calculation",
            Self::IoError(_) => "Make sure the output directory exists and is writable",
            Self::SerializationError(_) | Self::CsvError(_) => "Try another output format",
        }
    }
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
