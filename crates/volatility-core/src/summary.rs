//! Per-category descriptive statistics.
//!
//! [`summarize`] groups the table by category and reports, for each of the
//! four categories in display order, the count, mean, sample standard
//! deviation, and the five-number summary (min, quartiles, max).
//!
//! Undefined statistics are `None` rather than NaN: a category with no
//! days has only a count, and the standard deviation needs at least two
//! days.

use volatility_types::{Category, DayTable};

/// Statistics for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    /// The category described.
    pub category: Category,
    /// Number of days in the category.
    pub count: usize,
    /// Arithmetic mean of the scores.
    pub mean: Option<f64>,
    /// Sample standard deviation (divisor `n - 1`).
    pub std_dev: Option<f64>,
    /// Smallest score.
    pub min: Option<f64>,
    /// First quartile.
    pub q1: Option<f64>,
    /// Median.
    pub median: Option<f64>,
    /// Third quartile.
    pub q3: Option<f64>,
    /// Largest score.
    pub max: Option<f64>,
}

impl CategoryStats {
    /// Compute statistics from one category's scores.
    pub fn from_scores(category: Category, scores: &[f64]) -> Self {
        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = len_as_f64(sorted.len());
        let mean = n
            .filter(|n| *n > 0.0)
            .map(|n| sorted.iter().sum::<f64>() / n);
        let std_dev = match (mean, n) {
            (Some(mean), Some(n)) if n >= 2.0 => {
                let squares: f64 = sorted.iter().map(|v| (v - mean).powi(2)).sum();
                Some((squares / (n - 1.0)).sqrt())
            }
            _ => None,
        };

        Self {
            category,
            count: sorted.len(),
            mean,
            std_dev,
            min: sorted.first().copied(),
            q1: quartile(&sorted, 1),
            median: quartile(&sorted, 2),
            q3: quartile(&sorted, 3),
            max: sorted.last().copied(),
        }
    }
}

/// Statistics for all four categories, in [`Category::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    rows: Vec<CategoryStats>,
}

impl Summary {
    /// Return every row in display order.
    pub fn rows(&self) -> &[CategoryStats] {
        &self.rows
    }

    /// Return the row for one category.
    pub fn get(&self, category: Category) -> Option<&CategoryStats> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Return the number of days across all categories.
    pub fn total_count(&self) -> usize {
        self.rows
            .iter()
            .fold(0_usize, |acc, row| acc.saturating_add(row.count))
    }
}

/// Group the table by category and describe each group.
pub fn summarize(table: &DayTable) -> Summary {
    let rows = Category::ALL
        .into_iter()
        .map(|category| {
            let scores: Vec<f64> = table
                .iter()
                .filter(|record| record.category == category)
                .map(|record| f64::from(record.utility_score))
                .collect();
            CategoryStats::from_scores(category, &scores)
        })
        .collect();
    Summary { rows }
}

/// Convert a length to `f64`, `None` beyond `u32::MAX`.
fn len_as_f64(len: usize) -> Option<f64> {
    u32::try_from(len).ok().map(f64::from)
}

/// Linear-interpolated quartile (`quarter` in `1..=3`) of sorted values.
///
/// The rank is `quarter * (n - 1) / 4`, kept in integers so the
/// fractional part is exact.
fn quartile(sorted: &[f64], quarter: usize) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let scaled = last.checked_mul(quarter)?;
    let lower = scaled.checked_div(4)?;
    let remainder = scaled.checked_rem(4)?;

    let low = *sorted.get(lower)?;
    if remainder == 0 {
        return Some(low);
    }
    let high = *sorted.get(lower.checked_add(1)?)?;
    let fraction = len_as_f64(remainder)? / 4.0;
    Some((high - low).mul_add(fraction, low))
}
