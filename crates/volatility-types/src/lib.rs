//! Shared type definitions for the volatility and utility analysis.
//!
//! This crate is the single source of truth for the domain types threaded
//! through every pipeline stage, from calendar generation to export.
//!
//! # Modules
//!
//! - [`enums`] -- The closed [`Category`] label set and its display order
//! - [`score`] -- The bounded [`UtilityScore`] newtype
//! - [`structs`] -- [`DayRecord`], [`DayTable`], and [`Override`]
//! - [`error`] -- [`TypeError`] for rejected labels and scores

pub mod enums;
pub mod error;
pub mod score;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::Category;
pub use error::TypeError;
pub use score::UtilityScore;
pub use structs::{DATE_FORMAT, DayRecord, DayTable, Override};
