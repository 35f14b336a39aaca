//! Page-Survey: a concurrent page metadata surveyor
//!
//! This crate fetches a batch of URLs concurrently, extracts a small
//! structured record from each page (title, meta description, headings),
//! and returns exactly one record per submitted URL. Individual failures
//! degrade the fields of the affected record; they never drop it and never
//! abort the batch.

pub mod config;
pub mod output;
pub mod survey;

use thiserror::Error;

/// Main error type for Page-Survey operations
///
/// Per-URL fetch failures are deliberately absent here: the fetch task
/// folds them into outcome data, so they never surface as errors.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Page-Survey operations
pub type Result<T> = std::result::Result<T, SurveyError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, FetcherConfig};
pub use output::PageRecord;
pub use survey::{run_batch, FetchFault, PageContent, PageOutcome};
