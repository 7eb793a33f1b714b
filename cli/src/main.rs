//! CLI entrypoint for Party Launcher
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use launcher_application::{LaunchInput, LaunchPartiesUseCase, LaunchPaths};
use launcher_infrastructure::{JsonProtocolConfigReader, ProcessWorkerSpawner, SettingsLoader};
use launcher_presentation::{Cli, ConsoleReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; stdout is reserved for the launch plan
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Party Launcher");

    let input = prepare_input(cli)?;

    // === Dependency Injection ===
    let use_case = LaunchPartiesUseCase::new(
        Arc::new(JsonProtocolConfigReader::new()),
        Arc::new(ProcessWorkerSpawner::new()),
    );

    let reporter = ConsoleReporter::new();
    let output = use_case.execute_with_progress(input, &reporter).await?;

    info!(
        "Handed {} of {} parties to the OS",
        output.handles.len(),
        output.party_count
    );

    Ok(())
}

/// Validate the positional paths, then load launcher settings
///
/// Path errors are reported even when the settings sources are broken.
fn prepare_input(cli: Cli) -> Result<LaunchInput> {
    let paths = LaunchPaths::validate(cli.config, cli.bin, cli.input)?;

    let file_settings = if cli.no_settings {
        SettingsLoader::load_defaults()
    } else {
        SettingsLoader::load(cli.settings.as_ref()).context("Failed to load launcher settings")?
    };
    let settings = file_settings.into_settings()?;

    let mut input = LaunchInput::new(
        paths.config(),
        paths.executable(),
        paths.input_dir(),
    )
    .with_settings(settings);
    if cli.dry_run {
        input = input.dry_run();
    }

    Ok(input)
}
