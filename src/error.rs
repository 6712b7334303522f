use serde::Serialize;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DashboardError {
  #[error("Invalid argument: {0}")]
  InvalidArgument(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Configuration error: {0}")]
  Config(String),

  #[error("Dashboard state unavailable")]
  StateUnavailable,
}

impl Serialize for DashboardError {
  fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_error_serializes_as_message() {
    let err = DashboardError::InvalidArgument("count must not be negative".into());
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, "\"Invalid argument: count must not be negative\"");
  }

  #[test]
  fn test_failed_result_carries_message() {
    let result: Result<u32> = Err(DashboardError::NotFound("alert 9".into()));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json, serde_json::json!({ "Err": "Not found: alert 9" }));
  }
}
