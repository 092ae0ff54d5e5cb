//! Presentation stages of the volatility analysis.
//!
//! Everything here consumes a finished [`volatility_types::DayTable`] or
//! its [`volatility_core::Summary`] and produces something for a person
//! or another tool to read:
//!
//! - [`table`] -- The plain-text per-category summary.
//! - [`chart`] -- The per-category box plot, saved as SVG.
//! - [`export`] -- CSV export and reload of the day table.
//! - [`error`] -- [`ReportError`].

pub mod chart;
pub mod error;
pub mod export;
pub mod table;

pub use chart::render_box_plot;
pub use error::ReportError;
pub use export::{read_csv, write_csv};
pub use table::render_summary;
