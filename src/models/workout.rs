use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activity {
  Running,
  Cycling,
  Walking,
  Hiking,
  Swimming,
}

impl Activity {
  pub const ALL: [Activity; 5] = [
    Activity::Running,
    Activity::Cycling,
    Activity::Walking,
    Activity::Hiking,
    Activity::Swimming,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Activity::Running => "Running",
      Activity::Cycling => "Cycling",
      Activity::Walking => "Walking",
      Activity::Hiking => "Hiking",
      Activity::Swimming => "Swimming",
    }
  }
}

/// Named places a workout can be logged at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Place {
  #[serde(rename = "Golden Gate Park")]
  GoldenGatePark,
  #[serde(rename = "Embarcadero Trail")]
  EmbarcaderoTrail,
  #[serde(rename = "Mission Bay")]
  MissionBay,
  #[serde(rename = "Crissy Field")]
  CrissyField,
  Presidio,
  #[serde(rename = "Twin Peaks")]
  TwinPeaks,
}

impl Place {
  pub const ALL: [Place; 6] = [
    Place::GoldenGatePark,
    Place::EmbarcaderoTrail,
    Place::MissionBay,
    Place::CrissyField,
    Place::Presidio,
    Place::TwinPeaks,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Place::GoldenGatePark => "Golden Gate Park",
      Place::EmbarcaderoTrail => "Embarcadero Trail",
      Place::MissionBay => "Mission Bay",
      Place::CrissyField => "Crissy Field",
      Place::Presidio => "Presidio",
      Place::TwinPeaks => "Twin Peaks",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
  pub id: u32,
  pub activity: Activity,
  pub date: NaiveDate,
  pub time: NaiveTime,
  pub duration_minutes: u32,
  pub location: Place,
  pub aqfa_score: f64,
  pub performance_score: f64,
  /// Miles
  pub distance: f64,
  pub calories: u32,
}
