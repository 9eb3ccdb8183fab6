//! # CLI Error Types
//!
//! Everything that can stop a quote from being printed.
//!
//! ```text
//! CoreError ───────────┐
//! io::Error ───────────┤
//! toml::de::Error ─────┼──► QuoteError ──► "error: ..." on stderr, exit 1
//! serde_json::Error ───┤
//! InvalidConfig ───────┘
//! ```

use thiserror::Error;
use wedding_core::CoreError;

/// Result type alias for CLI operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// Pricing or selection failure from wedding-core.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Config file could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for [`QuoteConfig`](crate::config::QuoteConfig).
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config parsed but holds an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}
