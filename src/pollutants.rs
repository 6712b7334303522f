use serde::{Deserialize, Serialize};

use crate::classify::PollutantLevel;
use crate::models::{AirQualitySample, Pollutant};

/// Index at which a pollutant bar is drawn full
const BAR_FULL_SCALE: f64 = 200.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantRow {
  pub pollutant: Pollutant,
  pub symbol: String,
  pub label: String,
  /// Series color, fixed per pollutant
  pub color: String,
  pub value: u32,
  pub level: PollutantLevel,
  pub level_label: String,
  /// Bar color, follows the level
  pub fill: String,
  /// Bar width, 0-100
  pub fill_percent: f64,
}

fn series_color(pollutant: Pollutant) -> &'static str {
  match pollutant {
    Pollutant::Ozone => "#3B82F6",
    Pollutant::No2 => "#EF4444",
    Pollutant::Pm25 => "#F59E0B",
    Pollutant::Pm10 => "#10B981",
  }
}

/// One row per pollutant in display order (O3, NO2, PM2.5, PM10)
pub fn breakdown(sample: &AirQualitySample) -> Vec<PollutantRow> {
  Pollutant::ALL
    .iter()
    .map(|&pollutant| {
      let value = sample.pollutants.get(pollutant);
      let level = PollutantLevel::from_index(value);

      PollutantRow {
        pollutant,
        symbol: pollutant.symbol().to_string(),
        label: pollutant.label().to_string(),
        color: series_color(pollutant).to_string(),
        value,
        level,
        level_label: level.label().to_string(),
        fill: level.bar_color().to_string(),
        fill_percent: (f64::from(value) / BAR_FULL_SCALE * 100.0).min(100.0),
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::PollutantReadings;
  use crate::test_utils::{sample_with, sample_with_score};

  #[test]
  fn test_breakdown_order_and_levels() {
    let rows = breakdown(&sample_with_score(6.0));
    let symbols: Vec<&str> = rows.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["O₃", "NO₂", "PM2.5", "PM10"]);

    // ozone 45, no2 30, pm25 60, pm10 110
    assert_eq!(rows[0].level, PollutantLevel::Good);
    assert_eq!(rows[2].level, PollutantLevel::Moderate);
    assert_eq!(rows[3].level, PollutantLevel::UnhealthyForSensitive);
    assert_eq!(rows[3].level_label, "Unhealthy for Sensitive");
    assert_eq!(rows[3].fill, "#F97316");
  }

  #[test]
  fn test_fill_percent_capped() {
    let sample = sample_with(
      5.0,
      PollutantReadings {
        ozone: 100,
        no2: 0,
        pm25: 200,
        pm10: 450,
      },
    );
    let rows = breakdown(&sample);
    assert_eq!(rows[0].fill_percent, 50.0);
    assert_eq!(rows[1].fill_percent, 0.0);
    assert_eq!(rows[2].fill_percent, 100.0);
    assert_eq!(rows[3].fill_percent, 100.0);
    assert_eq!(rows[3].level, PollutantLevel::Unhealthy);
  }
}
