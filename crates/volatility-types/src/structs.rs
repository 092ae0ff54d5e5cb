//! Core record structs for the volatility analysis.
//!
//! A [`DayTable`] is the one mutable table every pipeline stage works on.
//! It is created fully populated by the samplers, patched in place by the
//! override stage, and read-only from the summary onward.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Category;
use crate::score::UtilityScore;

/// Text format of every date in the exported table and the override list.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// DayRecord
// ---------------------------------------------------------------------------

/// One row of the dataset: a calendar date with its category and score.
///
/// Field names serialize as the exported column headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Calendar date, unique within a table.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Category assigned to the day.
    #[serde(rename = "Category")]
    pub category: Category,
    /// Utility score of the day.
    #[serde(rename = "Utility_Score")]
    pub utility_score: UtilityScore,
}

impl DayRecord {
    /// Return the record's date in [`DATE_FORMAT`].
    pub fn date_key(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

// ---------------------------------------------------------------------------
// DayTable
// ---------------------------------------------------------------------------

/// Chronologically ordered collection of [`DayRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTable {
    records: Vec<DayRecord>,
}

impl DayTable {
    /// Wrap an already ordered list of records.
    pub const fn from_records(records: Vec<DayRecord>) -> Self {
        Self { records }
    }

    /// Return all records in row order.
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Return mutable access to the records for in-place stages.
    pub fn records_mut(&mut self) -> &mut [DayRecord] {
        &mut self.records
    }

    /// Return the number of rows.
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Return `true` if the table has no rows.
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in row order.
    pub fn iter(&self) -> core::slice::Iter<'_, DayRecord> {
        self.records.iter()
    }

    /// Find the record for a date, if the table covers it.
    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.records.iter().find(|record| record.date == date)
    }
}

impl<'a> IntoIterator for &'a DayTable {
    type Item = &'a DayRecord;
    type IntoIter = core::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Override
// ---------------------------------------------------------------------------

/// A manually entered ground-truth observation for one date.
///
/// The date stays as literal text: it only matches a record whose date
/// formats to exactly the same string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// Date of the observation as `YYYY-MM-DD`.
    pub date: String,
    /// Observed category.
    pub category: Category,
    /// Observed utility score.
    pub score: UtilityScore,
}

impl Override {
    /// Create an override entry.
    pub fn new(date: impl Into<String>, category: Category, score: UtilityScore) -> Self {
        Self {
            date: date.into(),
            category,
            score,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(y: i32, m: u32, d: u32, category: Category, score: u8) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            category,
            utility_score: UtilityScore::new(score).unwrap(),
        }
    }

    #[test]
    fn date_key_is_zero_padded() {
        let r = record(2025, 1, 9, Category::Crisis, 1);
        assert_eq!(r.date_key(), "2025-01-09");
    }

    #[test]
    fn table_lookup_by_date() {
        let table = DayTable::from_records(vec![
            record(2025, 1, 1, Category::Peak, 3),
            record(2025, 1, 2, Category::Stable, 2),
        ]);
        assert_eq!(table.len(), 2);
        let hit = table.get(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()).unwrap();
        assert_eq!(hit.category, Category::Stable);
        assert!(table.get(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()).is_none());
    }

    #[test]
    fn record_serializes_with_column_names() {
        let r = record(2025, 12, 1, Category::Peak, 4);
        let yaml = serde_yml::to_string(&r).unwrap();
        assert!(yaml.contains("Date:"));
        assert!(yaml.contains("2025-12-01"));
        assert!(yaml.contains("Category: Peak"));
        assert!(yaml.contains("Utility_Score: 4"));
    }
}
