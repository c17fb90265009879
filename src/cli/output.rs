//! CLI output formatting utilities.

use crate::config::Place;
use crate::estimator::{SurveyEntry, TravelEstimate};
use crate::geo::format_decimal;
use console::style;

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print the distance breakdown behind an estimate.
    pub fn estimate_details(estimate: &TravelEstimate, speed_kmh: f64) {
        Output::kv("Great-circle", &format!("{:.2} km", estimate.distance_km));
        Output::kv("Routed", &format!("{:.2} km", estimate.route_distance_km));
        Output::kv("Cruising speed", &format!("{} km/h", format_decimal(speed_kmh)));
        Output::kv("Flight time", &format!("{:.2} h", estimate.hours));
    }

    /// Print a catalog place.
    pub fn place(place: &Place) {
        println!(
            "  {} {} {} {} ({:.4}, {:.4})",
            style("*").cyan(),
            style(&place.key).bold(),
            style(format!("[{}]", place.kind)).dim(),
            place.label,
            place.latitude,
            place.longitude
        );
    }

    /// Print one survey row.
    pub fn survey_row(rank: usize, entry: &SurveyEntry) {
        println!(
            "  {:>2}. {:>6} h  {:>9.1} km  {} {}",
            rank,
            style(format!("{:.2}", entry.estimate.hours)).green(),
            entry.estimate.distance_km,
            style(&entry.place.label).bold(),
            style(format!("[{}]", entry.place.kind)).dim(),
        );
    }
}
