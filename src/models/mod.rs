pub mod air_quality;
pub mod alert;
pub mod profile;
pub mod workout;

pub use air_quality::{
  AirQualitySample, ForecastPoint, Location, Pollutant, PollutantReadings, FORECAST_HOURS,
};
pub use alert::{ActivityAlert, NewAlert};
pub use profile::{NotificationPrefs, Panel, PanelState, SensitivityLevel, UserProfile};
pub use workout::{Activity, Place, WorkoutRecord};
