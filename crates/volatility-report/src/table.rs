//! Plain-text rendering of the per-category summary.

use std::fmt;

use volatility_core::Summary;

/// Heading printed above the summary table.
pub const SUMMARY_HEADING: &str = "--- ANNUAL UTILITY SUMMARY ---";

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "NaN".to_owned(), |v| format!("{v:.6}"))
}

/// Display adapter printing the `count / mean / std` table.
pub struct SummaryTable<'a>(pub &'a Summary);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_HEADING}")?;
        writeln!(f, "{:<10}{:>8}{:>12}{:>12}", "Category", "count", "mean", "std")?;
        for row in self.0.rows() {
            writeln!(
                f,
                "{:<10}{:>8}{:>12}{:>12}",
                row.category.as_str(),
                row.count,
                cell(row.mean),
                cell(row.std_dev)
            )?;
        }
        Ok(())
    }
}

/// Render the summary table, one row per category.
///
/// Undefined statistics print as `NaN`.
pub fn render_summary(summary: &Summary) -> String {
    SummaryTable(summary).to_string()
}
