//! First load of the dashboard view
//!
//! The dashboard shows a loading state for a fixed delay, then a freshly
//! generated sample together with everything derived from it.

use rand::Rng;
use serde::Serialize;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

use crate::classify::ScoreDisplay;
use crate::error::{DashboardError, Result};
use crate::generator::SampleGenerator;
use crate::models::{AirQualitySample, ForecastPoint};
use crate::pollutants::{breakdown, PollutantRow};
use crate::recommendations::{
  recommend, ActivityRecommendation, RecommendationRule, AIR_QUALITY_TIPS,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
  pub sample: AirQualitySample,
  pub score: ScoreDisplay,
  pub recommendations: Vec<ActivityRecommendation>,
  pub pollutants: Vec<PollutantRow>,
  pub best_hour: Option<ForecastPoint>,
  pub tips: Vec<String>,
}

impl DashboardSnapshot {
  pub fn build(sample: AirQualitySample, rules: &[RecommendationRule]) -> Self {
    Self {
      score: ScoreDisplay::new(sample.aqfa_score),
      recommendations: recommend(sample.aqfa_score, rules),
      pollutants: breakdown(&sample),
      best_hour: sample.best_forecast_hour().copied(),
      tips: AIR_QUALITY_TIPS
        .iter()
        .map(|tip| tip.to_string())
        .collect(),
      sample,
    }
  }
}

/// Wait out the artificial delay, then draw one sample
///
/// The generator is only locked after the delay, so other readers of the
/// same generator are served while a load is pending.
pub async fn load_dashboard<R: Rng>(
  generator: &Mutex<SampleGenerator<R>>,
  delay: Duration,
  rules: &[RecommendationRule],
) -> Result<DashboardSnapshot> {
  tokio::time::sleep(delay).await;

  let sample = generator
    .lock()
    .map_err(|_| DashboardError::StateUnavailable)?
    .generate_air_quality_sample();
  let snapshot = DashboardSnapshot::build(sample, rules);
  info!(
    aqfa_score = snapshot.sample.aqfa_score,
    category = snapshot.score.label.as_str(),
    "Dashboard loaded"
  );
  Ok(snapshot)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::FORECAST_HOURS;
  use crate::recommendations::default_rules;
  use crate::test_utils::{sample_with_score, seeded_generator};
  use tokio::time::Instant;

  #[tokio::test(start_paused = true)]
  async fn test_load_waits_for_delay() {
    let generator = Mutex::new(seeded_generator(21));
    let started = Instant::now();

    let snapshot = load_dashboard(&generator, Duration::from_millis(1000), &default_rules())
      .await
      .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(1000));
    assert_eq!(snapshot.sample.forecast.len(), FORECAST_HOURS);
    assert_eq!(snapshot.recommendations.len(), 4);
    assert_eq!(snapshot.pollutants.len(), 4);
  }

  #[tokio::test(start_paused = true)]
  async fn test_load_matches_direct_generation() {
    let loaded = Mutex::new(seeded_generator(5));
    let mut direct = seeded_generator(5);

    let snapshot = load_dashboard(&loaded, Duration::ZERO, &default_rules())
      .await
      .unwrap();
    assert_eq!(snapshot.sample, direct.generate_air_quality_sample());
  }

  #[test]
  fn test_snapshot_derives_from_sample() {
    let snapshot = DashboardSnapshot::build(sample_with_score(8.2), &default_rules());
    assert_eq!(snapshot.score.label, "Excellent");
    assert_eq!(snapshot.score.formatted, "8.2");
    assert_eq!(snapshot.best_hour.map(|p| p.hour), Some(0));
    assert_eq!(snapshot.tips.len(), 4);
  }
}
