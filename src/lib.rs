pub mod alerts;
pub mod classify;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod generator;
pub mod logging;
pub mod models;
pub mod pollutants;
pub mod recommendations;
pub mod routes;
pub mod state;
pub mod workout_log;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(test)]
mod test_utils;

pub use classify::{classify, Category, ScoreDisplay};
pub use error::DashboardError;
pub use generator::{validate_history_count, SampleGenerator, DEFAULT_HISTORY_LEN};
pub use models::{AirQualitySample, WorkoutRecord};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  use std::sync::Arc;
  use tauri::Manager;

  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let config = match config::AppConfig::from_env() {
    Ok(config) => config,
    Err(e) => {
      eprintln!("Invalid configuration, using defaults: {}", e);
      config::AppConfig::default()
    }
  };
  logging::init(&config);

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(move |app| {
      tracing::info!(
        seed = ?config.seed,
        history_len = config.history_len,
        "Dashboard state ready"
      );
      app.manage(Arc::new(state::AppState::new(config)));
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::load_dashboard,
      commands::get_air_quality,
      commands::get_workout_history,
      commands::get_workout_summary,
      commands::classify_score,
      commands::get_recommendations,
      commands::get_routes,
      // Profile and panels
      commands::profile::get_profile,
      commands::profile::update_profile,
      commands::profile::get_panels,
      commands::profile::toggle_panel,
      commands::profile::close_menus,
      // Alerts
      commands::alerts::list_alerts,
      commands::alerts::create_alert,
      commands::alerts::toggle_alert,
      commands::alerts::delete_alert,
      commands::alerts::triggered_alerts,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
