//! Calendar, sampling, overrides, and summary statistics for the
//! volatility analysis.
//!
//! This crate owns every stage that produces or describes the day table:
//! calendar generation, category sampling, utility scoring, manual
//! overrides, and per-category statistics. Rendering and file output live
//! in `volatility-report`.
//!
//! # Modules
//!
//! - [`calendar`] -- Inclusive daily date range.
//! - [`config`] -- [`AnalysisConfig`] and its YAML loader.
//! - [`error`] -- [`CoreError`].
//! - [`overrides`] -- Exact-date ground-truth overrides.
//! - [`pipeline`] -- [`pipeline::run`], the end-to-end table builder.
//! - [`sampler`] -- Weighted category draws.
//! - [`summary`] -- Count, mean, standard deviation, and quartiles.
//! - [`utility`] -- Per-category [`utility::ScoringRule`].
//!
//! [`AnalysisConfig`]: config::AnalysisConfig

pub mod calendar;
pub mod config;
pub mod error;
pub mod overrides;
pub mod pipeline;
pub mod sampler;
pub mod summary;
pub mod utility;

pub use config::{AnalysisConfig, ConfigError};
pub use error::CoreError;
pub use overrides::{OverrideReport, apply_overrides};
pub use pipeline::{PipelineResult, run, simulate};
pub use summary::{CategoryStats, Summary, summarize};
