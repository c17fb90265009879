//! Configuration module for airfreight.
//!
//! Handles loading and managing application settings and the place catalog.

mod places;
mod settings;

pub use places::{default_places, Place};
pub use settings::{EstimatorSettings, GeneralSettings, PlaceSettings, Settings, SurveySettings};
