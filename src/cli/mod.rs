//! CLI module for airfreight.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// airfreight - cargo flight travel-time estimator
///
/// Estimates how long a cargo plane takes between two points on Earth, and
/// serves the estimator as an MCP tool for AI assistants.
#[derive(Parser, Debug)]
#[command(name = "airfreight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "AIRFREIGHT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate travel time between two points
    Estimate {
        /// Origin: place key (e.g. "gotham") or "lat,lon"
        #[arg(allow_hyphen_values = true)]
        from: String,

        /// Destination: place key or "lat,lon"
        #[arg(allow_hyphen_values = true)]
        to: String,

        /// Cruising speed in km/h (defaults to estimator.default_speed_kmh)
        #[arg(short, long)]
        speed: Option<f64>,

        /// Print the estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate travel time from one origin to every catalog place
    Survey {
        /// Origin: place key or "lat,lon" (defaults to survey.origin)
        #[arg(allow_hyphen_values = true)]
        from: Option<String>,

        /// Cruising speed in km/h (defaults to estimator.default_speed_kmh)
        #[arg(short, long)]
        speed: Option<f64>,

        /// Print the survey as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the place catalog
    Places,

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Write the current configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show configuration file path
    Path,
}
