//! Mock data generation for the dashboard
//!
//! Every field is drawn independently from a fixed range. The values are
//! deliberately uncorrelated demo data, not a simulation. The random source
//! is injected so tests can seed a reproducible sequence.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::models::{
  Activity, AirQualitySample, ForecastPoint, Location, Place, Pollutant, PollutantReadings,
  WorkoutRecord, FORECAST_HOURS,
};

/// ---------------------------------------------------------------------------
/// Sampling Ranges
/// ---------------------------------------------------------------------------

/// Workouts generated per history when the caller has no preference
pub const DEFAULT_HISTORY_LEN: usize = 20;

// Decimal-valued fields are sampled in tenths so every value lands exactly
// on one decimal place inside its closed range.
const AQFA_TENTHS: (u32, u32) = (30, 90);
const PERFORMANCE_TENTHS: (u32, u32) = (50, 100);
const DISTANCE_TENTHS: (u32, u32) = (10, 150);

const TEMPERATURE_F: (i32, i32) = (60, 80);
const DURATION_MINUTES: (u32, u32) = (20, 120);
const CALORIES: (u32, u32) = (150, 800);
const RECENT_DAYS: i64 = 30;
const MINUTES_PER_DAY: u32 = 24 * 60;

/// ---------------------------------------------------------------------------
/// Generator
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SampleGenerator<R = ChaCha8Rng> {
  rng: R,
  reference_time: Option<DateTime<Utc>>,
  location: Location,
}

impl SampleGenerator<ChaCha8Rng> {
  /// Deterministic generator: the same seed yields the same samples
  pub fn seeded(seed: u64) -> Self {
    Self::new(ChaCha8Rng::seed_from_u64(seed))
  }

  pub fn from_entropy() -> Self {
    Self::new(ChaCha8Rng::from_entropy())
  }

  /// Seeded when a seed is configured, entropy otherwise
  pub fn from_seed_option(seed: Option<u64>) -> Self {
    match seed {
      Some(seed) => Self::seeded(seed),
      None => Self::from_entropy(),
    }
  }
}

impl<R: Rng> SampleGenerator<R> {
  pub fn new(rng: R) -> Self {
    Self {
      rng,
      reference_time: None,
      location: Location::default(),
    }
  }

  /// Pin "now" for timestamps and recent dates instead of reading the clock
  pub fn with_reference_time(mut self, now: DateTime<Utc>) -> Self {
    self.reference_time = Some(now);
    self
  }

  pub fn with_location(mut self, location: Location) -> Self {
    self.location = location;
    self
  }

  fn now(&self) -> DateTime<Utc> {
    self.reference_time.unwrap_or_else(Utc::now)
  }

  fn tenths(&mut self, (min, max): (u32, u32)) -> f64 {
    f64::from(self.rng.gen_range(min..=max)) / 10.0
  }

  fn aqfa_score(&mut self) -> f64 {
    self.tenths(AQFA_TENTHS)
  }

  fn pollutant(&mut self, pollutant: Pollutant) -> u32 {
    let (min, max) = pollutant.bounds();
    self.rng.gen_range(min..=max)
  }

  fn pick<T: Copy>(&mut self, options: &[T]) -> T {
    options[self.rng.gen_range(0..options.len())]
  }

  pub fn generate_air_quality_sample(&mut self) -> AirQualitySample {
    let aqfa_score = self.aqfa_score();
    let pollutants = PollutantReadings {
      ozone: self.pollutant(Pollutant::Ozone),
      no2: self.pollutant(Pollutant::No2),
      pm25: self.pollutant(Pollutant::Pm25),
      pm10: self.pollutant(Pollutant::Pm10),
    };

    let forecast = (0..FORECAST_HOURS)
      .map(|hour| ForecastPoint {
        hour: hour as u8,
        aqfa_score: self.aqfa_score(),
        temperature: self.rng.gen_range(TEMPERATURE_F.0..=TEMPERATURE_F.1),
      })
      .collect();

    let sample = AirQualitySample {
      aqfa_score,
      pollutants,
      location: self.location.clone(),
      timestamp: self.now(),
      forecast,
    };

    debug!(aqfa_score = sample.aqfa_score, "Generated air quality sample");
    sample
  }

  /// Generate `count` workouts with ids 1..=count in generation order
  pub fn generate_workout_history(&mut self, count: usize) -> Vec<WorkoutRecord> {
    let now = self.now();

    let records: Vec<WorkoutRecord> = (1..=count)
      .map(|id| {
        let activity = self.pick(&Activity::ALL);
        let minutes_ago = self.rng.gen_range(0..RECENT_DAYS * 24 * 60);
        let date = (now - Duration::minutes(minutes_ago)).date_naive();
        let minute_of_day = self.rng.gen_range(0..MINUTES_PER_DAY);
        let time = NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0)
          .unwrap_or_default();

        WorkoutRecord {
          id: id as u32,
          activity,
          date,
          time,
          duration_minutes: self.rng.gen_range(DURATION_MINUTES.0..=DURATION_MINUTES.1),
          location: self.pick(&Place::ALL),
          aqfa_score: self.aqfa_score(),
          performance_score: self.tenths(PERFORMANCE_TENTHS),
          distance: self.tenths(DISTANCE_TENTHS),
          calories: self.rng.gen_range(CALORIES.0..=CALORIES.1),
        }
      })
      .collect();

    debug!(count = records.len(), "Generated workout history");
    records
  }
}

/// Validate a history length coming from an untrusted caller
pub fn validate_history_count(requested: i64) -> Result<usize> {
  usize::try_from(requested).map_err(|_| {
    DashboardError::InvalidArgument(format!(
      "workout count must not be negative, got {}",
      requested
    ))
  })
}
