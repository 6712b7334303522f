//! Environment-driven configuration
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file by the caller). Unset variables fall back to defaults;
//! malformed ones are an error rather than silently ignored.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::level_filters::LevelFilter;

use crate::error::{DashboardError, Result};
use crate::generator::DEFAULT_HISTORY_LEN;
use crate::logging::LogFormat;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const SEED_VAR: &str = "AETHERFIT_SEED";
const LOAD_DELAY_VAR: &str = "AETHERFIT_LOAD_DELAY_MS";
const HISTORY_LEN_VAR: &str = "AETHERFIT_HISTORY_LEN";
const LOG_LEVEL_VAR: &str = "AETHERFIT_LOG_LEVEL";
const LOG_FORMAT_VAR: &str = "AETHERFIT_LOG_FORMAT";

/// Simulated round trip before the first sample appears
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
  /// Fixed seed for reproducible demo data; None draws from OS entropy
  pub seed: Option<u64>,
  pub load_delay: Duration,
  pub history_len: usize,
  pub log_level: String,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      seed: None,
      load_delay: Duration::from_millis(DEFAULT_LOAD_DELAY_MS),
      history_len: DEFAULT_HISTORY_LEN,
      log_level: "info".to_string(),
      log_format: LogFormat::Pretty,
    }
  }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>> {
  match env::var(name) {
    Ok(raw) => raw
      .trim()
      .parse::<T>()
      .map(Some)
      .map_err(|_| DashboardError::Config(format!("{} has invalid value '{}'", name, raw))),
    Err(_) => Ok(None),
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let defaults = Self::default();

    let log_level = match env::var(LOG_LEVEL_VAR) {
      Ok(raw) => {
        let level = raw.trim().to_lowercase();
        LevelFilter::from_str(&level).map_err(|_| {
          DashboardError::Config(format!("{} has invalid value '{}'", LOG_LEVEL_VAR, raw))
        })?;
        level
      }
      Err(_) => defaults.log_level,
    };

    let log_format = match env::var(LOG_FORMAT_VAR) {
      Ok(raw) => raw.parse::<LogFormat>()?,
      Err(_) => defaults.log_format,
    };

    Ok(Self {
      seed: parse_var(SEED_VAR)?,
      load_delay: parse_var::<u64>(LOAD_DELAY_VAR)?
        .map(Duration::from_millis)
        .unwrap_or(defaults.load_delay),
      history_len: parse_var(HISTORY_LEN_VAR)?.unwrap_or(defaults.history_len),
      log_level,
      log_format,
    })
  }
}
