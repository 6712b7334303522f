use std::sync::{Mutex, MutexGuard};

use crate::alerts::AlertBook;
use crate::config::AppConfig;
use crate::context::DashboardContext;
use crate::dashboard::{self, DashboardSnapshot};
use crate::error::{DashboardError, Result};
use crate::generator::{validate_history_count, SampleGenerator};
use crate::models::{AirQualitySample, WorkoutRecord};
use crate::recommendations::{default_rules, RecommendationRule};

/// Application state shared by the desktop commands
///
/// Every lock is taken and released within synchronous code; the dashboard
/// delay is awaited before the generator is locked.
pub struct AppState {
  pub config: AppConfig,
  generator: Mutex<SampleGenerator>,
  context: Mutex<DashboardContext>,
  alerts: Mutex<AlertBook>,
  rules: Vec<RecommendationRule>,
}

impl AppState {
  pub fn new(config: AppConfig) -> Self {
    Self::with_generator(SampleGenerator::from_seed_option(config.seed), config)
  }

  pub fn with_generator(generator: SampleGenerator, config: AppConfig) -> Self {
    Self {
      config,
      generator: Mutex::new(generator),
      context: Mutex::new(DashboardContext::default()),
      alerts: Mutex::new(AlertBook::with_demo_alerts()),
      rules: default_rules(),
    }
  }

  pub fn rules(&self) -> &[RecommendationRule] {
    &self.rules
  }

  pub fn context(&self) -> Result<MutexGuard<'_, DashboardContext>> {
    self.context.lock().map_err(|_| DashboardError::StateUnavailable)
  }

  pub fn alerts(&self) -> Result<MutexGuard<'_, AlertBook>> {
    self.alerts.lock().map_err(|_| DashboardError::StateUnavailable)
  }

  fn generator(&self) -> Result<MutexGuard<'_, SampleGenerator>> {
    self.generator.lock().map_err(|_| DashboardError::StateUnavailable)
  }

  pub async fn load_dashboard(&self) -> Result<DashboardSnapshot> {
    dashboard::load_dashboard(&self.generator, self.config.load_delay, &self.rules).await
  }

  pub fn air_quality(&self) -> Result<AirQualitySample> {
    Ok(self.generator()?.generate_air_quality_sample())
  }

  /// Workout history of `count` records, or the configured length when None
  pub fn workout_history(&self, count: Option<i64>) -> Result<Vec<WorkoutRecord>> {
    let count = match count {
      Some(requested) => validate_history_count(requested)?,
      None => self.config.history_len,
    };
    Ok(self.generator()?.generate_workout_history(count))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::Panel;
  use crate::test_utils::{seeded_generator, test_app_state};
  use std::sync::Arc;
  use std::time::Duration;
  use tokio::time::Instant;

  fn test_state() -> AppState {
    let config = AppConfig {
      load_delay: Duration::from_millis(50),
      history_len: 12,
      ..AppConfig::default()
    };
    AppState::with_generator(seeded_generator(17), config)
  }

  #[test]
  fn test_workout_history_counts() {
    let state = test_state();
    assert_eq!(state.workout_history(None).unwrap().len(), 12);
    assert_eq!(state.workout_history(Some(3)).unwrap().len(), 3);
    assert!(state.workout_history(Some(0)).unwrap().is_empty());
    assert!(matches!(
      state.workout_history(Some(-5)),
      Err(DashboardError::InvalidArgument(_))
    ));
  }

  #[tokio::test(start_paused = true)]
  async fn test_load_dashboard_uses_configured_rules() {
    let state = test_state();
    let snapshot = state.load_dashboard().await.unwrap();
    assert_eq!(snapshot.recommendations.len(), state.rules().len());
  }

  #[tokio::test(start_paused = true)]
  async fn test_reads_not_blocked_by_pending_load() {
    let config = AppConfig {
      load_delay: Duration::from_millis(1000),
      ..AppConfig::default()
    };
    let state = Arc::new(AppState::with_generator(seeded_generator(3), config));

    let loading = tokio::spawn({
      let state = Arc::clone(&state);
      async move { state.load_dashboard().await }
    });
    // Let the load reach its delay
    tokio::task::yield_now().await;

    let started = Instant::now();
    let sample = state.air_quality().unwrap();
    let history = state.workout_history(Some(2)).unwrap();
    assert_eq!(started.elapsed(), Duration::ZERO);
    assert_eq!(history.len(), 2);
    assert!(!loading.is_finished());

    let snapshot = loading.await.unwrap().unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_ne!(snapshot.sample.forecast, sample.forecast);
  }

  #[test]
  fn test_successive_samples_differ() {
    let state = test_state();
    let first = state.air_quality().unwrap();
    let second = state.air_quality().unwrap();
    assert_ne!(first.forecast, second.forecast);
  }

  #[test]
  fn test_context_and_alerts_are_shared() {
    let state = test_app_state(17);
    state.context().unwrap().toggle(Panel::Notifications);
    assert!(state.context().unwrap().panels().notifications_open);

    state.alerts().unwrap().delete(1).unwrap();
    assert_eq!(state.alerts().unwrap().list().len(), 2);
  }
}
