//! Manual override application.
//!
//! Ground-truth observations replace the simulated category and score of
//! the record whose date text matches exactly. Entries are applied in list
//! order, so for a repeated date the last entry wins. An entry for a date
//! outside the table is skipped without error.
//!
//! Applying the same list twice leaves the table as applying it once.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use tracing::debug;
use volatility_types::{DayTable, Override};

/// Counts describing one [`apply_overrides`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideReport {
    /// Entries that matched a record and were written.
    pub applied: usize,
    /// Entries whose date matched no record.
    pub unmatched: usize,
    /// Applied entries that overwrote an earlier entry for the same date.
    pub superseded: usize,
}

/// Overwrite matching records with the given observations.
pub fn apply_overrides(table: &mut DayTable, overrides: &[Override]) -> OverrideReport {
    let index: BTreeMap<String, usize> = table
        .iter()
        .enumerate()
        .map(|(row, record)| (record.date_key(), row))
        .collect();

    let mut report = OverrideReport::default();
    let mut touched: BTreeSet<NaiveDate> = BTreeSet::new();
    let records = table.records_mut();

    for entry in overrides {
        let row = index.get(&entry.date).copied();
        let Some(record) = row.and_then(|row| records.get_mut(row)) else {
            debug!(date = %entry.date, "override date not in calendar, skipped");
            report.unmatched = report.unmatched.saturating_add(1);
            continue;
        };

        debug!(
            date = %entry.date,
            from_category = %record.category,
            from_score = %record.utility_score,
            to_category = %entry.category,
            to_score = %entry.score,
            "override applied"
        );
        record.category = entry.category;
        record.utility_score = entry.score;

        report.applied = report.applied.saturating_add(1);
        if !touched.insert(record.date) {
            report.superseded = report.superseded.saturating_add(1);
        }
    }

    report
}
