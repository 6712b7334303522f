//! Workout log summaries and chart data

use serde::{Deserialize, Serialize};

use crate::models::WorkoutRecord;

const CHART_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn round_tenth(value: f64) -> f64 {
  (value * 10.0).round() / 10.0
}

/// ---------------------------------------------------------------------------
/// Summary Stats
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
  pub total_workouts: usize,
  /// None when there are no workouts to average
  pub avg_performance: Option<f64>,
  pub avg_aqfa: Option<f64>,
  pub total_hours: f64,
}

impl WorkoutSummary {
  pub fn from_records(records: &[WorkoutRecord]) -> Self {
    let count = records.len();
    let average = |field: fn(&WorkoutRecord) -> f64| -> Option<f64> {
      if count == 0 {
        return None;
      }
      let sum: f64 = records.iter().map(field).sum();
      Some(round_tenth(sum / count as f64))
    };

    let total_minutes: u32 = records.iter().map(|w| w.duration_minutes).sum();

    Self {
      total_workouts: count,
      avg_performance: average(|w| w.performance_score),
      avg_aqfa: average(|w| w.aqfa_score),
      total_hours: round_tenth(f64::from(total_minutes) / 60.0),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Chart Data
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
  pub day: String,
  pub aqfa: f64,
  pub performance: f64,
}

/// AQFA vs performance for the first week of records, labelled Mon..Sun
pub fn correlation_chart(records: &[WorkoutRecord]) -> Vec<CorrelationPoint> {
  records
    .iter()
    .zip(CHART_DAYS.iter())
    .map(|(workout, day)| CorrelationPoint {
      day: day.to_string(),
      aqfa: workout.aqfa_score,
      performance: workout.performance_score,
    })
    .collect()
}

/// Leading entries for the recent-activity list, in generation order
pub fn recent(records: &[WorkoutRecord], n: usize) -> &[WorkoutRecord] {
  &records[..n.min(records.len())]
}
