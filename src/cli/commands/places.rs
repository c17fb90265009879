//! Places command implementation.

use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the places command.
pub fn run_places(settings: &Settings) -> Result<()> {
    let places = settings.places();

    if places.is_empty() {
        Output::info("The place catalog is empty.");
        return Ok(());
    }

    Output::header(&format!("Places ({})", places.len()));
    println!();
    for place in &places {
        Output::place(place);
    }

    Ok(())
}
