//! # Quote Configuration
//!
//! Settings for the quote CLI.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied by the caller)       │
//! │     --year 2021                                                        │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     WEDDING_QUOTE_YEAR=2021                                            │
//! │     WEDDING_QUOTE_LOG=debug                                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/quote/quote.toml (Linux)                                  │
//! │     ~/Library/Application Support/com.wedding.quote/quote.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     latest pricing year, log level "info"                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # quote.toml
//! [pricing]
//! default_year = 2022
//!
//! [logging]
//! level = "info"   # RUST_LOG still wins when set
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wedding_core::validation::validate_year;
use wedding_core::Year;

use crate::error::{QuoteError, QuoteResult};

// =============================================================================
// Settings Sections
// =============================================================================

/// Pricing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Year used when `--year` is not given.
    pub default_year: u16,
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            default_year: Year::LATEST.as_u16(),
        }
    }
}

/// Logging defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

// =============================================================================
// Quote Config
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    /// File this config was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,

    /// Problems found while loading, logged once tracing is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

impl QuoteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote.toml), explicit path or platform default
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(config_path: Option<PathBuf>) -> QuoteResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> QuoteResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: QuoteConfig = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> QuoteResult<()> {
        validate_year(self.pricing.default_year)
            .map_err(|e| QuoteError::InvalidConfig(format!("pricing.default_year: {e}")))?;

        if self.logging.level.trim().is_empty() {
            return Err(QuoteError::InvalidConfig(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `WEDDING_QUOTE_*` overrides read through `lookup`.
    ///
    /// Runs before logging is initialized, so rejected values are kept in
    /// [`QuoteConfig::warnings`] instead of being logged here.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(year) = lookup("WEDDING_QUOTE_YEAR") {
            match year.trim().parse::<u16>() {
                Ok(y) => self.pricing.default_year = y,
                Err(_) => self
                    .warnings
                    .push(format!("Ignoring non-numeric WEDDING_QUOTE_YEAR: {year}")),
            }
        }

        if let Some(level) = lookup("WEDDING_QUOTE_LOG") {
            self.logging.level = level;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "wedding", "quote")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }

    /// The configured default pricing year.
    pub fn default_year(&self) -> QuoteResult<Year> {
        Ok(Year::try_from(self.pricing.default_year)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
