//! Table construction: calendar, sampling, and overrides.
//!
//! [`simulate`] builds the synthetic table for a configuration and an
//! explicit random generator. [`run`] validates the configuration,
//! simulates, and then applies the configured overrides, returning the
//! final table together with an [`OverrideReport`].
//!
//! Draw order is fixed: one category per day in calendar order, then one
//! score per day in calendar order. The same seed always reproduces the
//! same pre-override table.

use rand::Rng;
use tracing::{info, warn};
use volatility_types::{DayRecord, DayTable};

use crate::calendar;
use crate::config::AnalysisConfig;
use crate::error::CoreError;
use crate::overrides::{self, OverrideReport};
use crate::sampler;
use crate::summary::Summary;
use crate::utility;

/// Output of a full [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    /// The final table after overrides.
    pub table: DayTable,
    /// What the override stage did.
    pub overrides: OverrideReport,
}

/// Build the simulated table, before overrides.
///
/// # Errors
///
/// Returns [`CoreError::EmptyDistribution`] if a weight table has no
/// positive weight.
pub fn simulate<R: Rng + ?Sized>(
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<DayTable, CoreError> {
    let days = calendar::generate(&config.calendar);
    info!(
        start = %config.calendar.start,
        end = %config.calendar.end,
        days = days.len(),
        "Calendar generated"
    );

    let categories = sampler::sample_categories(&days, &config.weights, rng)?;

    let mut records = Vec::with_capacity(days.len());
    for (date, category) in days.into_iter().zip(categories) {
        let utility_score = utility::draw_score(category, &config.crisis_scores, rng)?;
        records.push(DayRecord {
            date,
            category,
            utility_score,
        });
    }
    info!(records = records.len(), "Categories and scores sampled");

    Ok(DayTable::from_records(records))
}

/// Validate the configuration, simulate, and apply overrides.
///
/// # Errors
///
/// Returns [`CoreError::Config`] if the configuration is invalid, or any
/// error from [`simulate`].
pub fn run<R: Rng + ?Sized>(
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<PipelineResult, CoreError> {
    config.validate()?;

    let mut table = simulate(config, rng)?;
    let report = overrides::apply_overrides(&mut table, &config.overrides);
    info!(
        applied = report.applied,
        unmatched = report.unmatched,
        superseded = report.superseded,
        "Overrides applied"
    );

    Ok(PipelineResult {
        table,
        overrides: report,
    })
}

/// Log the per-category outcome of a run.
pub fn log_summary(summary: &Summary) {
    for row in summary.rows() {
        if row.count == 0 {
            warn!(category = %row.category, "Category has no days; statistics undefined");
            continue;
        }
        info!(
            category = %row.category,
            count = row.count,
            mean = row.mean,
            std_dev = row.std_dev,
            "Category summary"
        );
    }
}
