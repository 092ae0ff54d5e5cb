//! Error types for the `volatility-core` crate.
//!
//! All fallible pipeline operations return [`CoreError`].

use volatility_types::TypeError;

use crate::config::ConfigError;

/// Errors that can occur while building the analysis table.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The configuration failed to load or validate.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: ConfigError,
    },

    /// A raw value could not become a domain type.
    #[error("invalid input: {source}")]
    InvalidInput {
        /// The underlying conversion error.
        #[from]
        source: TypeError,
    },

    /// A weighted draw was attempted over a table with no positive weight.
    #[error("cannot sample from empty distribution: {distribution}")]
    EmptyDistribution {
        /// Which table was empty.
        distribution: &'static str,
    },
}
