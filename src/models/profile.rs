use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityLevel {
  Low,
  Moderate,
  High,
}

impl SensitivityLevel {
  pub fn description(&self) -> &'static str {
    match self {
      SensitivityLevel::Low => "I rarely experience air quality effects",
      SensitivityLevel::Moderate => "I notice effects during poor air quality",
      SensitivityLevel::High => "I am sensitive to air quality changes",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
  pub push: bool,
  pub email: bool,
  pub sms: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  pub name: String,
  pub email: String,
  pub location: String,
  pub timezone: String,
  pub preferred_activities: Vec<String>,
  pub sensitivity_level: SensitivityLevel,
  pub notifications: NotificationPrefs,
  pub health_conditions: Vec<String>,
  pub goals: String,
}

impl Default for UserProfile {
  fn default() -> Self {
    Self {
      name: "Alex Johnson".to_string(),
      email: "alex.johnson@email.com".to_string(),
      location: "San Francisco, CA".to_string(),
      timezone: "Pacific Time (PT)".to_string(),
      preferred_activities: vec!["Running".into(), "Cycling".into(), "Hiking".into()],
      sensitivity_level: SensitivityLevel::Moderate,
      notifications: NotificationPrefs {
        push: true,
        email: false,
        sms: false,
      },
      health_conditions: vec!["None".into()],
      goals: "Maintain optimal performance while staying healthy".to_string(),
    }
  }
}

/// Open/closed flags for the collapsible parts of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
  pub sidebar_open: bool,
  pub notifications_open: bool,
  pub profile_menu_open: bool,
}

impl Default for PanelState {
  fn default() -> Self {
    Self {
      sidebar_open: true,
      notifications_open: false,
      profile_menu_open: false,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
  Sidebar,
  Notifications,
  ProfileMenu,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_profile_parses_frontend_json() {
    let json = serde_json::json!({
      "name": "Priya Shah",
      "email": "priya@example.com",
      "location": "Oakland, CA",
      "timezone": "Pacific Time (PT)",
      "preferredActivities": ["Cycling"],
      "sensitivityLevel": "high",
      "notifications": { "push": false, "email": true, "sms": false },
      "healthConditions": ["Asthma"],
      "goals": "Commute by bike on clean-air days"
    });

    let profile: UserProfile = serde_json::from_value(json).unwrap();
    assert_eq!(profile.sensitivity_level, SensitivityLevel::High);
    assert_eq!(profile.sensitivity_level.description(), "I am sensitive to air quality changes");
    assert!(profile.notifications.email);
  }

  #[test]
  fn test_panel_names() {
    let panel: Panel = serde_json::from_str("\"profile_menu\"").unwrap();
    assert_eq!(panel, Panel::ProfileMenu);
  }
}
