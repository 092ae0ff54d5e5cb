//! Error types for the analysis binary.
//!
//! [`EngineError`] wraps every failure mode of a run so `main` can
//! propagate with `?`.

/// Top-level error for the analysis binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The configuration is invalid.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: volatility_core::ConfigError,
    },

    /// Building the day table failed.
    #[error("pipeline error: {source}")]
    Pipeline {
        /// The underlying pipeline error.
        #[from]
        source: volatility_core::CoreError,
    },

    /// Rendering the chart or writing the export failed.
    #[error("report error: {source}")]
    Report {
        /// The underlying report error.
        #[from]
        source: volatility_report::ReportError,
    },
}
