use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scenario parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Scenario serialization error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    High,
    Critical,
}

impl TravelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TravelError::IoError(_) => ErrorCategory::Io,
            TravelError::TomlError(_)
            | TravelError::TomlSerializeError(_)
            | TravelError::ConfigError { .. }
            | TravelError::InvalidConfigValueError { .. }
            | TravelError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A closed stdout pipe is the usual cause
            TravelError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            TravelError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TravelError::IoError(_) => "Could not write the report to the console".to_string(),
            TravelError::TomlError(_) | TravelError::TomlSerializeError(_) => {
                "The travel scenario is not valid TOML".to_string()
            }
            TravelError::ConfigError { message } => format!("Configuration problem: {}", message),
            TravelError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            TravelError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TravelError::IoError(_) => "Check that standard output is writable",
            TravelError::TomlError(_) | TravelError::TomlSerializeError(_) => {
                "Check the scenario document for syntax errors"
            }
            TravelError::ConfigError { .. } => "Review the scenario and command line options",
            TravelError::InvalidConfigValueError { .. } => {
                "Pass a value that refers to an existing passenger or entry"
            }
            TravelError::MissingConfigError { .. } => "Add the missing setting to the scenario",
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
