pub mod alerts;
pub mod profile;

use crate::classify::ScoreDisplay;
use crate::dashboard::DashboardSnapshot;
use crate::error::DashboardError;
use crate::models::{AirQualitySample, WorkoutRecord};
use crate::recommendations::{recommend, ActivityRecommendation};
use crate::routes::{suggested_routes, RouteSuggestion};
use crate::state::AppState;
use crate::workout_log::WorkoutSummary;
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn load_dashboard(
  state: State<'_, Arc<AppState>>,
) -> Result<DashboardSnapshot, DashboardError> {
  state.load_dashboard().await
}

#[tauri::command]
pub async fn get_air_quality(
  state: State<'_, Arc<AppState>>,
) -> Result<AirQualitySample, DashboardError> {
  state.air_quality()
}

#[tauri::command]
pub async fn get_workout_history(
  state: State<'_, Arc<AppState>>,
  count: Option<i64>,
) -> Result<Vec<WorkoutRecord>, DashboardError> {
  state.workout_history(count)
}

#[tauri::command]
pub async fn get_workout_summary(
  state: State<'_, Arc<AppState>>,
  count: Option<i64>,
) -> Result<WorkoutSummary, DashboardError> {
  let workouts = state.workout_history(count)?;
  Ok(WorkoutSummary::from_records(&workouts))
}

#[tauri::command]
pub fn classify_score(score: f64) -> ScoreDisplay {
  ScoreDisplay::new(score)
}

#[tauri::command]
pub fn get_recommendations(
  state: State<'_, Arc<AppState>>,
  score: f64,
) -> Vec<ActivityRecommendation> {
  recommend(score, state.rules())
}

#[tauri::command]
pub fn get_routes() -> Vec<RouteSuggestion> {
  suggested_routes()
}
