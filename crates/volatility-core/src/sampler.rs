//! Category sampling.
//!
//! Each day independently draws one [`Category`] from the configured
//! weights. A draw maps a uniform roll in `[0, total_weight)` onto the
//! cumulative weights in [`Category::ALL`] order, so with the default
//! weights:
//!
//! | Category | Weight | Roll range |
//! |----------|--------|------------|
//! | Stable   | 50     | 0..50      |
//! | Peak     | 20     | 50..70     |
//! | `Low_Perf` | 20   | 70..90     |
//! | Crisis   | 10     | 90..100    |
//!
//! The generator is always passed in explicitly; the same seed yields the
//! same sequence.

use chrono::NaiveDate;
use rand::Rng;
use volatility_types::Category;

use crate::config::CategoryWeights;
use crate::error::CoreError;

/// Map a roll in `[0, total)` to the category whose cumulative weight
/// first exceeds it.
fn select(weights: &CategoryWeights, roll: u32) -> Option<Category> {
    let mut cumulative: u32 = 0;
    for category in Category::ALL {
        cumulative = cumulative.saturating_add(weights.weight(category));
        if roll < cumulative {
            return Some(category);
        }
    }
    None
}

/// Draw a single category.
///
/// # Errors
///
/// Returns [`CoreError::EmptyDistribution`] if every weight is zero or the
/// weights overflow.
pub fn sample_category<R: Rng + ?Sized>(
    weights: &CategoryWeights,
    rng: &mut R,
) -> Result<Category, CoreError> {
    let empty = CoreError::EmptyDistribution {
        distribution: "category weights",
    };
    let total = match weights.total() {
        Some(total) if total > 0 => total,
        _ => return Err(empty),
    };
    let roll = rng.random_range(0..total);
    select(weights, roll).ok_or(empty)
}

/// Draw one category per day, in calendar order.
///
/// All categories are drawn before any score, so the category sequence
/// for a seed does not depend on the score rules.
pub fn sample_categories<R: Rng + ?Sized>(
    days: &[NaiveDate],
    weights: &CategoryWeights,
    rng: &mut R,
) -> Result<Vec<Category>, CoreError> {
    days.iter()
        .map(|_| sample_category(weights, rng))
        .collect()
}
