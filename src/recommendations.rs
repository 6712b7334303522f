//! Activity recommendations derived from the current AQFA score
//!
//! Each activity shifts the score by its own offset and runs the result
//! through the shared classifier. The offsets are configuration, not domain
//! constants: callers can pass their own rule set.

use serde::{Deserialize, Serialize};

use crate::classify::{classify_with_offset, Category};

/// ---------------------------------------------------------------------------
/// Status
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStatus {
  Recommended,
  Caution,
  Avoid,
}

impl RecommendationStatus {
  pub fn from_category(category: Category) -> Self {
    match category {
      Category::Excellent | Category::Good => RecommendationStatus::Recommended,
      Category::Moderate => RecommendationStatus::Caution,
      Category::Poor => RecommendationStatus::Avoid,
    }
  }

  pub fn text(&self) -> &'static str {
    match self {
      RecommendationStatus::Recommended => "Recommended",
      RecommendationStatus::Caution => "Use Caution",
      RecommendationStatus::Avoid => "Not Recommended",
    }
  }

  /// Label of the follow-up action offered with the card
  pub fn action_label(&self) -> &'static str {
    match self {
      RecommendationStatus::Recommended => "Plan Activity",
      RecommendationStatus::Caution => "View Alternatives",
      RecommendationStatus::Avoid => "Indoor Options",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Rules
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendedActivity {
  Running,
  Cycling,
  Walking,
  OutdoorSports,
}

impl RecommendedActivity {
  pub fn as_str(&self) -> &'static str {
    match self {
      RecommendedActivity::Running => "Running",
      RecommendedActivity::Cycling => "Cycling",
      RecommendedActivity::Walking => "Walking",
      RecommendedActivity::OutdoorSports => "Outdoor Sports",
    }
  }

  pub fn reason(&self, status: RecommendationStatus) -> &'static str {
    use RecommendationStatus::*;
    match (self, status) {
      (RecommendedActivity::Running, Recommended) => "Excellent air quality",
      (RecommendedActivity::Running, Caution) => "Moderate pollutant levels",
      (RecommendedActivity::Running, Avoid) => "High pollution levels",
      (RecommendedActivity::Cycling, Recommended) => "Good conditions for cycling",
      (RecommendedActivity::Cycling, Caution) => "Consider shorter routes",
      (RecommendedActivity::Cycling, Avoid) => "Poor air quality",
      (RecommendedActivity::Walking, Recommended) => "Light activity suitable",
      (RecommendedActivity::Walking, Caution) => "Limit outdoor time",
      (RecommendedActivity::Walking, Avoid) => "Stay indoors",
      (RecommendedActivity::OutdoorSports, Recommended) => "Perfect for intense activities",
      (RecommendedActivity::OutdoorSports, Caution) => "Monitor air quality",
      (RecommendedActivity::OutdoorSports, Avoid) => "High intensity not recommended",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRule {
  pub activity: RecommendedActivity,
  /// Added to the composite score before classification
  pub offset: f64,
  pub time_window: String,
  pub location: String,
}

impl RecommendationRule {
  fn new(activity: RecommendedActivity, offset: f64, time_window: &str, location: &str) -> Self {
    Self {
      activity,
      offset,
      time_window: time_window.to_string(),
      location: location.to_string(),
    }
  }
}

/// The demo rule set shown on the dashboard
pub fn default_rules() -> Vec<RecommendationRule> {
  vec![
    RecommendationRule::new(
      RecommendedActivity::Running,
      0.0,
      "6:00 AM - 8:00 AM",
      "Golden Gate Park",
    ),
    RecommendationRule::new(
      RecommendedActivity::Cycling,
      0.5,
      "7:00 AM - 9:00 AM",
      "Embarcadero Trail",
    ),
    RecommendationRule::new(RecommendedActivity::Walking, 1.0, "Anytime", "Mission Bay"),
    RecommendationRule::new(
      RecommendedActivity::OutdoorSports,
      -1.0,
      "5:00 PM - 7:00 PM",
      "Crissy Field",
    ),
  ]
}

pub const AIR_QUALITY_TIPS: [&str; 4] = [
  "Early morning hours typically have the best air quality",
  "Avoid activities near busy roads and industrial areas",
  "Consider indoor alternatives if you have respiratory conditions",
  "Stay hydrated and take breaks if you notice any discomfort",
];

/// ---------------------------------------------------------------------------
/// Recommendations
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecommendation {
  pub activity: RecommendedActivity,
  pub activity_name: String,
  /// Composite score shifted by the rule's offset
  pub score: f64,
  pub category: Category,
  pub status: RecommendationStatus,
  pub status_text: String,
  pub reason: String,
  pub action_label: String,
  pub time_window: String,
  pub location: String,
}

impl ActivityRecommendation {
  pub fn from_rule(score: f64, rule: &RecommendationRule) -> Self {
    let category = classify_with_offset(score, rule.offset);
    let status = RecommendationStatus::from_category(category);

    Self {
      activity: rule.activity,
      activity_name: rule.activity.as_str().to_string(),
      score: score + rule.offset,
      category,
      status,
      status_text: status.text().to_string(),
      reason: rule.activity.reason(status).to_string(),
      action_label: status.action_label().to_string(),
      time_window: rule.time_window.clone(),
      location: rule.location.clone(),
    }
  }
}

pub fn recommend(score: f64, rules: &[RecommendationRule]) -> Vec<ActivityRecommendation> {
  rules
    .iter()
    .map(|rule| ActivityRecommendation::from_rule(score, rule))
    .collect()
}
