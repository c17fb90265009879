//! CLI command implementations.

mod config;
mod estimate;
mod mcp;
mod places;
mod survey;

pub use config::run_config;
pub use estimate::run_estimate;
pub use mcp::run_mcp;
pub use places::run_places;
pub use survey::run_survey;

use crate::config::Settings;

/// Speed from the command line, else the configured default.
fn effective_speed(speed: Option<f64>, settings: &Settings) -> f64 {
    speed.unwrap_or(settings.estimator.default_speed_kmh)
}
