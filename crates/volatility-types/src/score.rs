//! The bounded utility score.
//!
//! A [`UtilityScore`] can only hold a value in `[0, 5]`. Every constructor
//! and the serde path go through the same range check, so a score read
//! back from disk is as trustworthy as one drawn by the sampler.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Integer measure of a day's outcome value, higher is better.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct UtilityScore(u8);

impl UtilityScore {
    /// Smallest valid score.
    pub const MIN: Self = Self(0);

    /// Largest valid score.
    pub const MAX: Self = Self(5);

    /// Create a score, rejecting values above [`UtilityScore::MAX`].
    pub const fn new(value: u8) -> Result<Self, TypeError> {
        if value > Self::MAX.0 {
            return Err(TypeError::ScoreOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a score, saturating values above [`UtilityScore::MAX`].
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX.0 {
            return Self::MAX;
        }
        Self(value)
    }

    /// Return the raw score.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for UtilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for UtilityScore {
    type Error = TypeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UtilityScore> for u8 {
    fn from(score: UtilityScore) -> Self {
        score.0
    }
}

impl From<UtilityScore> for f64 {
    fn from(score: UtilityScore) -> Self {
        Self::from(score.0)
    }
}
