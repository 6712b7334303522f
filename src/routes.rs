use serde::{Deserialize, Serialize};

use crate::classify::{classify, Category};

/// Suggested route for the map view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSuggestion {
  pub id: u32,
  pub name: String,
  pub distance_miles: f64,
  pub score: f64,
  pub category: Category,
  pub color: String,
}

impl RouteSuggestion {
  pub fn new(id: u32, name: &str, distance_miles: f64, score: f64) -> Self {
    let category = classify(score);
    Self {
      id,
      name: name.to_string(),
      distance_miles,
      score,
      category,
      color: category.color().to_string(),
    }
  }
}

pub fn suggested_routes() -> Vec<RouteSuggestion> {
  vec![
    RouteSuggestion::new(1, "Golden Gate Park Loop", 3.2, 8.5),
    RouteSuggestion::new(2, "Embarcadero Trail", 5.1, 7.2),
    RouteSuggestion::new(3, "Mission Bay Circuit", 2.8, 6.8),
    RouteSuggestion::new(4, "Downtown Core", 4.0, 4.2),
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_route_colors_follow_classifier() {
    let routes = suggested_routes();
    let colors: Vec<&str> = routes.iter().map(|r| r.color.as_str()).collect();
    assert_eq!(colors, vec!["green", "yellow", "yellow", "orange"]);
    assert_eq!(routes[3].category, Category::Moderate);
  }
}
