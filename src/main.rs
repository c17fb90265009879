//! airfreight CLI entry point.

use airfreight::cli::{commands, Cli, Commands};
use airfreight::config::Settings;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => Settings::expand_path(path),
        None => Settings::default_config_path(),
    };
    let settings = Settings::load_from(Some(config_path.as_path()))?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout carries MCP frames and --json output.
    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("airfreight={}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Execute command
    match &cli.command {
        Commands::Estimate {
            from,
            to,
            speed,
            json,
        } => {
            commands::run_estimate(from, to, *speed, *json, &settings)?;
        }

        Commands::Survey { from, speed, json } => {
            commands::run_survey(from.as_deref(), *speed, *json, &settings)?;
        }

        Commands::Places => {
            commands::run_places(&settings)?;
        }

        Commands::Mcp => {
            commands::run_mcp().await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, &config_path, &settings)?;
        }
    }

    Ok(())
}
