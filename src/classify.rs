//! Score classification shared by every display surface
//!
//! A single set of thresholds turns an AQFA score into a category. Labels,
//! colors, the score ring and recommendation statuses all derive from
//! `classify`, so no surface carries its own copy of the bands.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// AQFA Categories
/// ---------------------------------------------------------------------------

pub const EXCELLENT_MIN: f64 = 8.0;
pub const GOOD_MIN: f64 = 6.0;
pub const MODERATE_MIN: f64 = 4.0;

/// Upper end of the AQFA scale
pub const SCORE_SCALE_MAX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
  Poor,
  Moderate,
  Good,
  Excellent,
}

/// Map a score onto its category. Bands are closed at the lower bound.
/// NaN compares false against every threshold and lands in `Poor`.
pub fn classify(score: f64) -> Category {
  match score {
    s if s >= EXCELLENT_MIN => Category::Excellent,
    s if s >= GOOD_MIN => Category::Good,
    s if s >= MODERATE_MIN => Category::Moderate,
    _ => Category::Poor,
  }
}

/// Shift a score by a caller-supplied offset, then classify it
pub fn classify_with_offset(score: f64, offset: f64) -> Category {
  classify(score + offset)
}

impl Category {
  pub fn label(&self) -> &'static str {
    match self {
      Category::Excellent => "Excellent",
      Category::Good => "Good",
      Category::Moderate => "Moderate",
      Category::Poor => "Poor",
    }
  }

  /// Text tone used for scores in this category
  pub fn color(&self) -> &'static str {
    match self {
      Category::Excellent => "green",
      Category::Good => "yellow",
      Category::Moderate => "orange",
      Category::Poor => "red",
    }
  }

  /// Start and end stops of the score ring gradient
  pub fn gradient(&self) -> (&'static str, &'static str) {
    match self {
      Category::Excellent => ("#4ade80", "#16a34a"),
      Category::Good => ("#facc15", "#ca8a04"),
      Category::Moderate => ("#fb923c", "#ea580c"),
      Category::Poor => ("#f87171", "#dc2626"),
    }
  }
}

/// Everything the score card needs to render one AQFA value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDisplay {
  pub score: f64,
  pub formatted: String,
  pub category: Category,
  pub label: String,
  pub color: String,
  pub gradient: [String; 2],
  /// Share of the ring to fill, 0-100
  pub percentage: f64,
}

impl ScoreDisplay {
  pub fn new(score: f64) -> Self {
    let category = classify(score);
    let (start, end) = category.gradient();
    let percentage = if score.is_nan() {
      0.0
    } else {
      (score / SCORE_SCALE_MAX * 100.0).clamp(0.0, 100.0)
    };

    Self {
      score,
      formatted: format!("{:.1}", score),
      category,
      label: category.label().to_string(),
      color: category.color().to_string(),
      gradient: [start.to_string(), end.to_string()],
      percentage,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Pollutant Levels
/// ---------------------------------------------------------------------------

/// AQI-style band for a single pollutant index (upper bounds inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollutantLevel {
  Good,
  Moderate,
  UnhealthyForSensitive,
  Unhealthy,
}

impl PollutantLevel {
  pub fn from_index(value: u32) -> Self {
    match value {
      0..=50 => PollutantLevel::Good,
      51..=100 => PollutantLevel::Moderate,
      101..=150 => PollutantLevel::UnhealthyForSensitive,
      _ => PollutantLevel::Unhealthy,
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PollutantLevel::Good => "Good",
      PollutantLevel::Moderate => "Moderate",
      PollutantLevel::UnhealthyForSensitive => "Unhealthy for Sensitive",
      PollutantLevel::Unhealthy => "Unhealthy",
    }
  }

  pub fn bar_color(&self) -> &'static str {
    match self {
      PollutantLevel::Good => "#10B981",
      PollutantLevel::Moderate => "#F59E0B",
      PollutantLevel::UnhealthyForSensitive => "#F97316",
      PollutantLevel::Unhealthy => "#EF4444",
    }
  }
}
