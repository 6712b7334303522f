//! Activity alerts: notify when the AQFA score reaches a threshold
//!
//! `AlertBook` is the single owner of the alert list and hands out ids in
//! ascending order.

use chrono::NaiveTime;
use tracing::info;

use crate::error::{DashboardError, Result};
use crate::models::{ActivityAlert, NewAlert};

/// Thresholds a user can pick from
pub const MIN_THRESHOLD: u8 = 4;
pub const MAX_THRESHOLD: u8 = 9;

#[derive(Debug, Clone)]
pub struct AlertBook {
  alerts: Vec<ActivityAlert>,
  next_id: u32,
}

impl Default for AlertBook {
  fn default() -> Self {
    Self::new()
  }
}

impl AlertBook {
  pub fn new() -> Self {
    Self {
      alerts: Vec::new(),
      next_id: 1,
    }
  }

  /// Book pre-filled with the demo alerts
  pub fn with_demo_alerts() -> Self {
    let demo = [
      ("Morning Run Alert", "Running", "Golden Gate Park", (6, 0), 6, true, Some("2 days ago")),
      ("Cycling Commute", "Cycling", "Embarcadero Route", (8, 0), 7, true, None),
      ("Weekend Hike", "Hiking", "Twin Peaks", (9, 0), 8, false, Some("1 week ago")),
    ];

    let mut book = Self::new();
    for (title, activity, location, (hour, minute), threshold, enabled, last_triggered) in demo {
      let id = book.take_id();
      book.alerts.push(ActivityAlert {
        id,
        title: title.to_string(),
        activity: activity.to_string(),
        location: location.to_string(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default(),
        threshold,
        enabled,
        last_triggered: last_triggered.map(str::to_string),
      });
    }
    book
  }

  fn take_id(&mut self) -> u32 {
    let id = self.next_id;
    self.next_id += 1;
    id
  }

  pub fn list(&self) -> &[ActivityAlert] {
    &self.alerts
  }

  pub fn create(&mut self, new_alert: NewAlert) -> Result<ActivityAlert> {
    if new_alert.title.trim().is_empty() {
      return Err(DashboardError::InvalidArgument("alert title must not be empty".into()));
    }
    if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&new_alert.threshold) {
      return Err(DashboardError::InvalidArgument(format!(
        "alert threshold must be between {} and {}, got {}",
        MIN_THRESHOLD, MAX_THRESHOLD, new_alert.threshold
      )));
    }

    let alert = ActivityAlert {
      id: self.take_id(),
      title: new_alert.title,
      activity: new_alert.activity,
      location: new_alert.location,
      time: new_alert.time,
      threshold: new_alert.threshold,
      enabled: new_alert.enabled,
      last_triggered: None,
    };

    info!(alert_id = alert.id, threshold = alert.threshold, "Created activity alert");
    self.alerts.push(alert.clone());
    Ok(alert)
  }

  /// Flip the enabled flag, returning the new value
  pub fn toggle(&mut self, id: u32) -> Result<bool> {
    let alert = self
      .alerts
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| DashboardError::NotFound(format!("alert {}", id)))?;

    alert.enabled = !alert.enabled;
    Ok(alert.enabled)
  }

  pub fn delete(&mut self, id: u32) -> Result<ActivityAlert> {
    let index = self
      .alerts
      .iter()
      .position(|a| a.id == id)
      .ok_or_else(|| DashboardError::NotFound(format!("alert {}", id)))?;

    info!(alert_id = id, "Deleted activity alert");
    Ok(self.alerts.remove(index))
  }

  /// Enabled alerts whose threshold the score reaches
  pub fn triggered(&self, score: f64) -> Vec<&ActivityAlert> {
    self
      .alerts
      .iter()
      .filter(|a| a.enabled && score >= f64::from(a.threshold))
      .collect()
  }
}
