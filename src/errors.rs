// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobboardError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Duplicate work order: {0}")]
    DuplicateWorkOrder(String),

    #[error("Cycle detected in dependency graph: {0}")]
    DependencyCycle(String),

    #[error("Invalid {field} '{value}' for work order '{work_order}': {source}")]
    DateParse {
        work_order: String,
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, JobboardError>;
