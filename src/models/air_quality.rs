use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of hourly forecast points in a sample, one per hour of the day
pub const FORECAST_HOURS: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
  Ozone,
  No2,
  Pm25,
  Pm10,
}

impl Pollutant {
  pub const ALL: [Pollutant; 4] = [
    Pollutant::Ozone,
    Pollutant::No2,
    Pollutant::Pm25,
    Pollutant::Pm10,
  ];

  /// Inclusive index range the generator draws from
  pub fn bounds(&self) -> (u32, u32) {
    match self {
      Pollutant::Ozone => (20, 120),
      Pollutant::No2 => (15, 80),
      Pollutant::Pm25 => (10, 100),
      Pollutant::Pm10 => (15, 120),
    }
  }

  pub fn symbol(&self) -> &'static str {
    match self {
      Pollutant::Ozone => "O₃",
      Pollutant::No2 => "NO₂",
      Pollutant::Pm25 => "PM2.5",
      Pollutant::Pm10 => "PM10",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Pollutant::Ozone => "Ozone",
      Pollutant::No2 => "Nitrogen Dioxide",
      Pollutant::Pm25 => "Fine Particles",
      Pollutant::Pm10 => "Coarse Particles",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollutantReadings {
  pub ozone: u32,
  pub no2: u32,
  pub pm25: u32,
  pub pm10: u32,
}

impl PollutantReadings {
  pub fn get(&self, pollutant: Pollutant) -> u32 {
    match pollutant {
      Pollutant::Ozone => self.ozone,
      Pollutant::No2 => self.no2,
      Pollutant::Pm25 => self.pm25,
      Pollutant::Pm10 => self.pm10,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
  pub lat: f64,
  pub lng: f64,
  pub address: String,
}

impl Default for Location {
  fn default() -> Self {
    Self {
      lat: 37.7749,
      lng: -122.4194,
      address: "San Francisco, CA".to_string(),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
  pub hour: u8,
  pub aqfa_score: f64,
  /// Degrees Fahrenheit
  pub temperature: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirQualitySample {
  pub aqfa_score: f64,
  pub pollutants: PollutantReadings,
  pub location: Location,
  pub timestamp: DateTime<Utc>,
  pub forecast: Vec<ForecastPoint>,
}

impl AirQualitySample {
  /// Forecast hour with the highest predicted score, earliest hour on ties
  pub fn best_forecast_hour(&self) -> Option<&ForecastPoint> {
    self.forecast.iter().fold(None, |best: Option<&ForecastPoint>, point| match best {
      Some(b) if b.aqfa_score >= point.aqfa_score => Some(b),
      _ => Some(point),
    })
  }
}
