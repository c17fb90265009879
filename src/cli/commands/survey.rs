//! Survey command implementation.

use super::effective_speed;
use crate::cli::Output;
use crate::config::Settings;
use crate::estimator::survey;
use anyhow::Result;

/// Run the survey command.
pub fn run_survey(from: Option<&str>, speed: Option<f64>, json: bool, settings: &Settings) -> Result<()> {
    let from = from.unwrap_or(settings.survey.origin.as_str());
    let origin = settings.resolve_point(from)?;
    let speed = effective_speed(speed, settings);

    let entries = survey(origin, &settings.places(), speed)?;
    tracing::debug!(count = entries.len(), "survey complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        Output::info("No destinations in the catalog. Add [places.<key>] entries to your config.");
        return Ok(());
    }

    Output::header(&format!("Travel times from {} {} at {} km/h", from, origin, speed));
    println!();
    for (i, entry) in entries.iter().enumerate() {
        Output::survey_row(i + 1, entry);
    }
    println!();
    Output::kv("Destinations", &entries.len().to_string());

    Ok(())
}
