//! Binary for the volatility analysis.
//!
//! Builds the 2025 day table from the built-in configuration, prints the
//! per-category summary, saves the box plot, and exports the table.
//!
//! # Run Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load and validate the built-in configuration
//! 3. Seed the random generator from the configured seed
//! 4. Simulate categories and scores, then apply the recorded overrides
//! 5. Print the per-category summary
//! 6. Render the box plot
//! 7. Export the table and print the completion message

mod error;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use volatility_core::pipeline::log_summary;
use volatility_core::{AnalysisConfig, summarize};
use volatility_report::{render_box_plot, render_summary, write_csv};

use crate::error::EngineError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if any stage fails; nothing after the failing stage
/// runs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("volatility-engine starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        seed = config.seed,
        start = %config.calendar.start,
        end = %config.calendar.end,
        overrides = config.overrides.len(),
        "Configuration loaded"
    );

    analyze(&config)?;
    Ok(())
}

fn load_config() -> Result<AnalysisConfig, EngineError> {
    let config = AnalysisConfig::default();
    config.validate()?;
    Ok(config)
}

fn analyze(config: &AnalysisConfig) -> Result<(), EngineError> {
    // 3. Seed the generator.
    let mut rng = StdRng::seed_from_u64(config.seed);

    // 4. Build the table.
    let result = volatility_core::run(config, &mut rng)?;

    // 5. Summarize.
    let summary = summarize(&result.table);
    log_summary(&summary);
    println!("{}", render_summary(&summary));

    // 6. Chart.
    render_box_plot(&result.table, &config.chart, &config.output.chart_path)?;

    // 7. Export.
    write_csv(&result.table, &config.output.csv_path)?;
    println!(
        "Analysis complete. Data exported to '{}'.",
        config.output.csv_path.display()
    );

    info!(rows = result.table.len(), "volatility-engine finished");
    Ok(())
}
