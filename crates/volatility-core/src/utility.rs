//! Utility scoring rules.
//!
//! Every category maps to exactly one [`ScoringRule`]:
//!
//! - `Stable`   -- uniform over `{1, 2, 3}`
//! - `Peak`     -- uniform over `{3, 4, 5}`
//! - `Low_Perf` -- uniform over `{0, 1, 2}`
//! - `Crisis`   -- weighted over the configured table, by default
//!   `{0: 30, 1: 20, 4: 20, 5: 30}`. The middle scores are excluded so a
//!   crisis is either rock bottom or a large lesson.
//!
//! The category-to-rule mapping is an exhaustive match over [`Category`],
//! so there is no "unknown category" path at this stage. Unknown labels
//! are rejected when text is parsed into a [`Category`].

use rand::Rng;
use volatility_types::{Category, UtilityScore};

use crate::config::WeightedScore;
use crate::error::CoreError;

/// How a score is drawn for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringRule<'a> {
    /// Every score in `low..=high` is equally likely.
    Uniform {
        /// Smallest score produced.
        low: UtilityScore,
        /// Largest score produced.
        high: UtilityScore,
    },
    /// Scores are drawn proportionally to the table's weights.
    Weighted(&'a [WeightedScore]),
}

impl ScoringRule<'_> {
    /// Return `true` if this rule can produce `score`.
    pub fn admits(&self, score: UtilityScore) -> bool {
        match *self {
            Self::Uniform { low, high } => (low..=high).contains(&score),
            Self::Weighted(table) => table
                .iter()
                .any(|entry| entry.weight > 0 && entry.score == score),
        }
    }

    /// Draw one score.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyDistribution`] for a weighted table with
    /// no positive weight.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<UtilityScore, CoreError> {
        match *self {
            Self::Uniform { low, high } => {
                let (low, high) = if low <= high { (low, high) } else { (high, low) };
                let raw = rng.random_range(low.value()..=high.value());
                Ok(UtilityScore::clamped(raw))
            }
            Self::Weighted(table) => draw_weighted(table, rng),
        }
    }
}

/// Draw from a weighted score table by cumulative weight.
fn draw_weighted<R: Rng + ?Sized>(
    table: &[WeightedScore],
    rng: &mut R,
) -> Result<UtilityScore, CoreError> {
    let empty = CoreError::EmptyDistribution {
        distribution: "weighted score table",
    };
    let total = table
        .iter()
        .try_fold(0_u32, |acc, entry| acc.checked_add(entry.weight));
    let total = match total {
        Some(total) if total > 0 => total,
        _ => return Err(empty),
    };

    let roll = rng.random_range(0..total);
    let mut cumulative: u32 = 0;
    for entry in table {
        cumulative = cumulative.saturating_add(entry.weight);
        if roll < cumulative {
            return Ok(entry.score);
        }
    }
    Err(empty)
}

/// Return the scoring rule for a category.
///
/// `crisis_scores` is the configured weighted table used by
/// [`Category::Crisis`].
pub const fn scoring_rule(category: Category, crisis_scores: &[WeightedScore]) -> ScoringRule<'_> {
    match category {
        Category::Stable => ScoringRule::Uniform {
            low: UtilityScore::clamped(1),
            high: UtilityScore::clamped(3),
        },
        Category::Peak => ScoringRule::Uniform {
            low: UtilityScore::clamped(3),
            high: UtilityScore::clamped(5),
        },
        Category::LowPerf => ScoringRule::Uniform {
            low: UtilityScore::MIN,
            high: UtilityScore::clamped(2),
        },
        Category::Crisis => ScoringRule::Weighted(crisis_scores),
    }
}

/// Draw the score for one day of the given category.
pub fn draw_score<R: Rng + ?Sized>(
    category: Category,
    crisis_scores: &[WeightedScore],
    rng: &mut R,
) -> Result<UtilityScore, CoreError> {
    scoring_rule(category, crisis_scores).draw(rng)
}
