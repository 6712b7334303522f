//! Tauri commands for activity alerts

use std::sync::Arc;
use tauri::State;

use crate::error::DashboardError;
use crate::models::{ActivityAlert, NewAlert};
use crate::state::AppState;

#[tauri::command]
pub fn list_alerts(state: State<'_, Arc<AppState>>) -> Result<Vec<ActivityAlert>, DashboardError> {
  Ok(state.alerts()?.list().to_vec())
}

#[tauri::command]
pub fn create_alert(
  state: State<'_, Arc<AppState>>,
  alert: NewAlert,
) -> Result<ActivityAlert, DashboardError> {
  state.alerts()?.create(alert)
}

/// Enable or disable an alert, returning the new enabled flag
#[tauri::command]
pub fn toggle_alert(state: State<'_, Arc<AppState>>, id: u32) -> Result<bool, DashboardError> {
  state.alerts()?.toggle(id)
}

#[tauri::command]
pub fn delete_alert(
  state: State<'_, Arc<AppState>>,
  id: u32,
) -> Result<ActivityAlert, DashboardError> {
  state.alerts()?.delete(id)
}

/// Enabled alerts that the given score would fire
#[tauri::command]
pub fn triggered_alerts(
  state: State<'_, Arc<AppState>>,
  score: f64,
) -> Result<Vec<ActivityAlert>, DashboardError> {
  Ok(state.alerts()?.triggered(score).into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::test_app_state;
  use chrono::NaiveTime;
  use tauri::Manager;

  fn new_alert(threshold: u8) -> NewAlert {
    NewAlert {
      title: "Lunch Walk".to_string(),
      activity: "Walking".to_string(),
      location: "Mission Bay".to_string(),
      time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
      threshold,
      enabled: true,
    }
  }

  #[test]
  fn test_list_alerts() {
    let app = tauri::test::mock_app();
    app.manage(test_app_state(4));

    let alerts = list_alerts(app.state()).unwrap();
    assert_eq!(alerts.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 3]);
  }

  #[test]
  fn test_create_alert() {
    let app = tauri::test::mock_app();
    app.manage(test_app_state(4));

    let alert = create_alert(app.state(), new_alert(5)).unwrap();
    assert_eq!(alert.id, 4);
    assert_eq!(list_alerts(app.state()).unwrap().len(), 4);
  }

  #[test]
  fn test_create_alert_threshold_out_of_range() {
    let app = tauri::test::mock_app();
    app.manage(test_app_state(4));

    let err = create_alert(app.state(), new_alert(3)).unwrap_err();
    assert_eq!(
      serde_json::to_value(&err).unwrap(),
      "Invalid argument: alert threshold must be between 4 and 9, got 3"
    );
    assert_eq!(list_alerts(app.state()).unwrap().len(), 3);
  }

  #[test]
  fn test_toggle_and_delete_alert() {
    let app = tauri::test::mock_app();
    app.manage(test_app_state(4));

    assert!(!toggle_alert(app.state(), 1).unwrap());
    assert!(toggle_alert(app.state(), 1).unwrap());

    let removed = delete_alert(app.state(), 2).unwrap();
    assert_eq!(removed.title, "Cycling Commute");

    let err = delete_alert(app.state(), 2).unwrap_err();
    assert_eq!(serde_json::to_value(&err).unwrap(), "Not found: alert 2");
  }

  #[test]
  fn test_triggered_alerts() {
    let app = tauri::test::mock_app();
    app.manage(test_app_state(4));

    let fired = triggered_alerts(app.state(), 7.0).unwrap();
    let titles: Vec<_> = fired.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Morning Run Alert", "Cycling Commute"]);
  }
}
