//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the console
//! starts. The binary loads a `.env` file first if one exists.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter (default: `warn`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SHORT_CODE_LENGTH` - Length of generated short codes (default: 7, range: 1-30)

use anyhow::{Context, Result};
use std::env;

use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, check_code_length};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes. Custom codes are not affected.
    pub code_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SHORT_CODE_LENGTH` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let code_length = match env::var("SHORT_CODE_LENGTH") {
            Ok(v) => v
                .trim()
                .parse::<usize>()
                .with_context(|| format!("SHORT_CODE_LENGTH must be a number, got '{v}'"))?,
            Err(_) => defaults.code_length,
        };

        Ok(Self {
            log_level,
            log_format,
            code_length,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `code_length` is outside 1-30
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        check_code_length(self.code_length).context("Invalid SHORT_CODE_LENGTH")?;

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Short code length: {}", self.code_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
