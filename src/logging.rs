//! Structured logging setup

use std::env;
use std::str::FromStr;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::error::DashboardError;

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  /// Multi-line output for development
  Pretty,
  /// Single-line output
  Compact,
  /// `JSON` lines for log shipping
  Json,
}

impl FromStr for LogFormat {
  type Err = DashboardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "compact" => Ok(LogFormat::Compact),
      "json" => Ok(LogFormat::Json),
      other => Err(DashboardError::Config(format!("unknown log format '{}'", other))),
    }
  }
}

fn env_filter(level: &str) -> EnvFilter {
  // RUST_LOG wins over the configured level when present
  env::var("RUST_LOG").map_or_else(
    |_| {
      EnvFilter::new(level).add_directive(
        format!("aetherfit_lib={}", level)
          .parse()
          .unwrap_or_else(|_| tracing::Level::INFO.into()),
      )
    },
    |directive| EnvFilter::new(&directive),
  )
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init(config: &AppConfig) {
  let registry = tracing_subscriber::registry().with(env_filter(&config.log_level));

  let result = match config.log_format {
    LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    LogFormat::Compact => registry.with(fmt::layer().compact()).try_init(),
    LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
  };

  if result.is_ok() {
    tracing::info!(
      level = %config.log_level,
      format = ?config.log_format,
      "Logging initialized"
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  fn test_parse_log_format() {
    assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
    assert_eq!(" Compact ".parse::<LogFormat>(), Ok(LogFormat::Compact));
    assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    assert!("xml".parse::<LogFormat>().is_err());
  }

  #[test]
  #[serial]
  fn test_configured_level_applies_without_rust_log() {
    temp_env::with_var("RUST_LOG", None::<&str>, || {
      let filter = env_filter("debug").to_string();
      assert!(filter.contains("aetherfit_lib=debug"));
    });
  }

  #[test]
  #[serial]
  fn test_rust_log_overrides_configured_level() {
    temp_env::with_var("RUST_LOG", Some("aetherfit_lib=trace"), || {
      let filter = env_filter("info").to_string();
      assert!(filter.contains("aetherfit_lib=trace"));
      assert!(!filter.contains("aetherfit_lib=info"));
    });
  }

  #[test]
  #[serial]
  fn test_init_twice_is_harmless() {
    let config = AppConfig::default();
    init(&config);
    init(&config);
  }
}
