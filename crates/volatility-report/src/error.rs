//! Error types for the reporting layer.
//!
//! [`ReportError`] unifies every failure of the presentation stages:
//! writing or reading the delimited table, and rendering the chart.

use volatility_types::TypeError;

/// Errors that can occur while exporting, reloading, or rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Opening, writing, or flushing a file failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The CSV writer or reader failed, including malformed rows.
    #[error("CSV error: {source}")]
    Csv {
        /// The underlying CSV error.
        #[from]
        source: csv::Error,
    },

    /// A value in a reloaded row is not a valid domain value.
    #[error("invalid value: {source}")]
    InvalidValue {
        /// The underlying conversion error.
        #[from]
        source: TypeError,
    },

    /// The chart backend failed to draw or save.
    #[error("chart error: {message}")]
    Chart {
        /// Description of the drawing failure.
        message: String,
    },

    /// A palette entry is not a `#RRGGBB` color.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
