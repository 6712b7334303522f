use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Notify when the AQFA score reaches `threshold` for an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAlert {
  pub id: u32,
  pub title: String,
  pub activity: String,
  pub location: String,
  pub time: NaiveTime,
  pub threshold: u8,
  pub enabled: bool,
  pub last_triggered: Option<String>,
}

/// For creating new alerts (without id, last_triggered)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
  pub title: String,
  pub activity: String,
  pub location: String,
  pub time: NaiveTime,
  pub threshold: u8,
  pub enabled: bool,
}
