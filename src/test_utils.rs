//! Test utilities shared by the unit tests
//!
//! This module provides:
//! - Seeded generators pinned to a fixed clock
//! - Hand-built samples and workouts with known values
//! - Shared application state for command tests

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::generator::SampleGenerator;
use crate::models::{
  Activity, AirQualitySample, ForecastPoint, Location, Place, PollutantReadings, WorkoutRecord,
};
use crate::state::AppState;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

/// ---------------------------------------------------------------------------
/// Generators
/// ---------------------------------------------------------------------------

/// Fixed "now" so date-relative assertions are stable
pub fn fixed_now() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2025, 6, 15, 9, 30, 0).unwrap()
}

/// Deterministic generator anchored at `fixed_now()`
pub fn seeded_generator(seed: u64) -> SampleGenerator {
  SampleGenerator::seeded(seed).with_reference_time(fixed_now())
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Sample with a given composite score and pollutant readings
pub fn sample_with(aqfa_score: f64, pollutants: PollutantReadings) -> AirQualitySample {
  AirQualitySample {
    aqfa_score,
    pollutants,
    location: Location::default(),
    timestamp: fixed_now(),
    forecast: (0..24)
      .map(|hour| ForecastPoint {
        hour,
        aqfa_score,
        temperature: 70,
      })
      .collect(),
  }
}

pub fn sample_with_score(aqfa_score: f64) -> AirQualitySample {
  sample_with(
    aqfa_score,
    PollutantReadings {
      ozone: 45,
      no2: 30,
      pm25: 60,
      pm10: 110,
    },
  )
}

/// Workout with the scores and effort that matter for summaries
pub fn workout(
  id: u32,
  aqfa_score: f64,
  performance_score: f64,
  duration_minutes: u32,
) -> WorkoutRecord {
  WorkoutRecord {
    id,
    activity: Activity::Running,
    date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
    time: NaiveTime::from_hms_opt(7, 15, 0).unwrap(),
    duration_minutes,
    location: Place::GoldenGatePark,
    aqfa_score,
    performance_score,
    distance: 5.0,
    calories: 400,
  }
}

/// ---------------------------------------------------------------------------
/// Application State
/// ---------------------------------------------------------------------------

/// Seeded state with no load delay and the demo alerts
pub fn test_app_state(seed: u64) -> Arc<AppState> {
  let config = AppConfig {
    load_delay: Duration::ZERO,
    ..AppConfig::default()
  };
  Arc::new(AppState::with_generator(seeded_generator(seed), config))
}
