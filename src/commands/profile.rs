//! Tauri commands for the user profile and shell panels

use std::sync::Arc;
use tauri::State;

use crate::error::DashboardError;
use crate::models::{Panel, PanelState, UserProfile};
use crate::state::AppState;

#[tauri::command]
pub fn get_profile(state: State<'_, Arc<AppState>>) -> Result<UserProfile, DashboardError> {
  Ok(state.context()?.profile().clone())
}

#[tauri::command]
pub fn update_profile(
  state: State<'_, Arc<AppState>>,
  profile: UserProfile,
) -> Result<UserProfile, DashboardError> {
  let mut context = state.context()?;
  context.update_profile(profile).cloned()
}

#[tauri::command]
pub fn get_panels(state: State<'_, Arc<AppState>>) -> Result<PanelState, DashboardError> {
  Ok(state.context()?.panels())
}

#[tauri::command]
pub fn toggle_panel(
  state: State<'_, Arc<AppState>>,
  panel: Panel,
) -> Result<PanelState, DashboardError> {
  Ok(state.context()?.toggle(panel))
}

/// Dismiss dropdown menus after a click outside them
#[tauri::command]
pub fn close_menus(state: State<'_, Arc<AppState>>) -> Result<PanelState, DashboardError> {
  Ok(state.context()?.close_menus())
}
