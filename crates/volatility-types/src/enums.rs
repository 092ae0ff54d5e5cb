//! Enumeration types for the volatility analysis.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The character of a single day.
///
/// The four variants are mutually exclusive. Their external labels are the
/// exact strings used in the exported table, including the underscore in
/// `Low_Perf`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Category {
    /// Routine day: low risk, average reward.
    Stable,
    /// High-performance day.
    Peak,
    /// Unproductive day with low utility.
    LowPerf,
    /// High-volatility event: either rock bottom or a large lesson.
    Crisis,
}

impl Category {
    /// Every category in the fixed display order used by the summary and
    /// the chart.
    pub const ALL: [Self; 4] = [Self::Stable, Self::Peak, Self::LowPerf, Self::Crisis];

    /// Return the external label of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::Peak => "Peak",
            Self::LowPerf => "Low_Perf",
            Self::Crisis => "Crisis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TypeError;

    /// Parse an exact, case-sensitive label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TypeError::UnknownCategory(s.to_owned()))
    }
}

impl TryFrom<String> for Category {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for &'static str {
    fn from(category: Category) -> Self {
        category.as_str()
    }
}
