use thiserror::Error;

#[derive(Error, Debug)]
pub enum MasonError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{kind} '{key}' already exists")]
    DuplicateKey { kind: &'static str, key: String },

    #[error("{kind} '{key}' not found")]
    NotFound { kind: &'static str, key: String },

    #[error("'{field}' is not a valid {entity} field")]
    InvalidField { entity: &'static str, field: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl MasonError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate(kind: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            kind,
            key: key.into(),
        }
    }

    pub fn not_found(kind: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MasonError>;
