use thiserror::Error;

#[derive(Error, Debug)]
pub enum TitlesError {
    #[error("Store {operation} failed: {message}")]
    Store {
        operation: &'static str,
        message: String,
    },

    #[error("Queue {operation} failed: {message}")]
    Queue {
        operation: &'static str,
        message: String,
    },

    #[error("Object store access failed: {message}")]
    ObjectStore { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something unusable.
    Request,
    /// One of the managed services failed.
    Upstream,
    Internal,
    Configuration,
}

impl TitlesError {
    pub fn store(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Store {
            operation,
            message: err.to_string(),
        }
    }

    pub fn queue(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Queue {
            operation,
            message: err.to_string(),
        }
    }

    pub fn object_store(err: impl std::fmt::Display) -> Self {
        Self::ObjectStore {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationError { .. } => ErrorCategory::Request,
            Self::Store { .. } | Self::Queue { .. } | Self::ObjectStore { .. } => {
                ErrorCategory::Upstream
            }
            Self::SerializationError(_) | Self::IoError(_) => ErrorCategory::Internal,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TitlesError>;
