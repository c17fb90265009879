//! Estimate command implementation.

use super::effective_speed;
use crate::cli::Output;
use crate::config::Settings;
use crate::estimator::TravelRequest;
use anyhow::Result;
use serde_json::json;

/// Run the estimate command.
pub fn run_estimate(
    from: &str,
    to: &str,
    speed: Option<f64>,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let origin = settings.resolve_point(from)?;
    let destination = settings.resolve_point(to)?;
    let speed = effective_speed(speed, settings);

    for (label, point) in [("origin", origin), ("destination", destination)] {
        if !point.is_within_bounds() {
            Output::warning(&format!("{} {} is outside the usual lat/lon range", label, point));
        }
    }

    let request = TravelRequest::new(origin, destination).with_speed(speed);
    let estimate = request.estimate()?;
    tracing::debug!(hours = estimate.hours, distance_km = estimate.distance_km, "estimated");

    if json {
        let body = json!({
            "request": request,
            "estimate": estimate,
            "summary": request.describe(&estimate),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    Output::success(&request.describe(&estimate));
    Output::estimate_details(&estimate, speed);
    Ok(())
}
