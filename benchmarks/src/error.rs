//! Error types for benchmark declarations, lookup and configuration.

use std::io;

use thiserror::Error;

/// The main error type for the benchmark catalog
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// Lookup of a name that is not registered
    #[error("Unknown benchmark: {name}")]
    UnknownBenchmark { name: String },

    /// Two descriptors declared with the same name
    #[error("Duplicate benchmark name: {name}")]
    DuplicateName { name: String },

    /// Malformed trace category filter item
    #[error("Invalid trace category '{category}': {reason}")]
    InvalidCategory { category: String, reason: String },

    /// Memory dump triggers must fire at a positive interval
    #[error("Invalid memory dump interval: {0}ms")]
    InvalidDumpInterval(u64),

    /// Configuration values that fail validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl BenchmarkError {
    pub(crate) fn invalid_category(category: &str, reason: impl Into<String>) -> Self {
        BenchmarkError::InvalidCategory {
            category: category.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, BenchmarkError>;
