//! Explicit owner of per-session UI state
//!
//! The user profile and the open/closed panel flags live here instead of in
//! ambient globals. Whoever holds the `DashboardContext` is the only writer.

use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::models::{Panel, PanelState, UserProfile};

#[derive(Debug, Clone, Default)]
pub struct DashboardContext {
  profile: UserProfile,
  panels: PanelState,
}

impl DashboardContext {
  pub fn new(profile: UserProfile, panels: PanelState) -> Self {
    Self { profile, panels }
  }

  pub fn profile(&self) -> &UserProfile {
    &self.profile
  }

  pub fn panels(&self) -> PanelState {
    self.panels
  }

  /// Replace the profile after checking the fields the shell relies on
  pub fn update_profile(&mut self, profile: UserProfile) -> Result<&UserProfile> {
    if profile.name.trim().is_empty() {
      return Err(DashboardError::InvalidArgument("profile name must not be empty".into()));
    }
    if !profile.email.contains('@') {
      return Err(DashboardError::InvalidArgument(format!(
        "invalid email address: {}",
        profile.email
      )));
    }

    self.profile = profile;
    debug!("Profile updated");
    Ok(&self.profile)
  }

  /// Flip one panel and return the resulting state
  pub fn toggle(&mut self, panel: Panel) -> PanelState {
    match panel {
      Panel::Sidebar => self.panels.sidebar_open = !self.panels.sidebar_open,
      Panel::Notifications => self.panels.notifications_open = !self.panels.notifications_open,
      Panel::ProfileMenu => self.panels.profile_menu_open = !self.panels.profile_menu_open,
    }
    self.panels
  }

  /// Click outside: dismiss the dropdown menus, leave the sidebar alone
  pub fn close_menus(&mut self) -> PanelState {
    self.panels.notifications_open = false;
    self.panels.profile_menu_open = false;
    self.panels
  }

  pub fn close_sidebar(&mut self) -> PanelState {
    self.panels.sidebar_open = false;
    self.panels
  }
}
