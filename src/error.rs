//! Error type for the fallible edges of the crate (JSON parsing, config loading).
//!
//! Validation itself never fails: findings are reported as data in
//! [`crate::validate::ValidationResult`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("[Parse] Failed to parse {what} JSON: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("[Config] {0}")]
    Config(String),
}

impl WorkflowError {
    pub fn parse(what: &'static str, source: serde_json::Error) -> Self {
        WorkflowError::Parse { what, source }
    }
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
