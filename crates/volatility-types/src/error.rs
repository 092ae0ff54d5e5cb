//! Error types for the `volatility-types` crate.
//!
//! Raised at the boundary where untyped input (CSV fields, YAML values,
//! string labels) becomes a domain type.

/// Errors produced when converting raw values into domain types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The label is not one of `Stable`, `Peak`, `Low_Perf`, `Crisis`.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// The score lies outside the closed range `[0, 5]`.
    #[error("utility score {0} is outside the range 0..=5")]
    ScoreOutOfRange(u8),
}
