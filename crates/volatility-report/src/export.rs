//! Delimited export and reload of the day table.
//!
//! The exported file is UTF-8, comma-separated, with the header
//! `Date,Category,Utility_Score` and one row per record in table order.
//! There is no index column. An existing file at the target path is
//! truncated.

use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use volatility_types::{Category, DayRecord, DayTable, UtilityScore};

use crate::error::ReportError;

/// Header row of the exported table.
pub const HEADER: [&str; 3] = ["Date", "Category", "Utility_Score"];

/// Serialize every record to `writer`, header first.
///
/// The CSV writer is flushed before returning.
pub fn write_records<W: io::Write>(table: &DayTable, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in table {
        csv_writer.serialize(record)?;
    }
    if table.is_empty() {
        // serde only emits the header alongside the first row
        csv_writer.write_record(HEADER)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the table to `path`, replacing any existing file.
pub fn write_csv(table: &DayTable, path: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_records(table, io::BufWriter::new(file))?;
    info!(
        path = %path.display(),
        rows = table.len(),
        "Table exported"
    );
    Ok(())
}

/// One row as it appears on disk, before domain validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Utility_Score")]
    utility_score: u8,
}

impl TryFrom<RawRow> for DayRecord {
    type Error = ReportError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        Ok(Self {
            date: raw.date,
            category: raw.category.parse::<Category>()?,
            utility_score: UtilityScore::new(raw.utility_score)?,
        })
    }
}

/// Parse an exported table from `reader`, preserving row order.
///
/// # Errors
///
/// Returns [`ReportError::Csv`] for malformed rows or dates, and
/// [`ReportError::InvalidValue`] for unknown categories or scores
/// outside `[0, 5]`.
pub fn read_records<R: io::Read>(reader: R) -> Result<DayTable, ReportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let records = csv_reader
        .deserialize::<RawRow>()
        .map(|row| DayRecord::try_from(row?))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DayTable::from_records(records))
}

/// Reload a table previously written by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<DayTable, ReportError> {
    let file = std::fs::File::open(path)?;
    read_records(io::BufReader::new(file))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> DayTable {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let rows = [
            (Category::Peak, 3),
            (Category::LowPerf, 0),
            (Category::Crisis, 5),
        ];
        DayTable::from_records(
            start
                .iter_days()
                .zip(rows)
                .map(|(date, (category, score))| DayRecord {
                    date,
                    category,
                    utility_score: UtilityScore::clamped(score),
                })
                .collect(),
        )
    }

    fn to_text(table: &DayTable) -> String {
        let mut buf = Vec::new();
        write_records(table, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_header_and_rows_without_index() {
        let text = to_text(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Date,Category,Utility_Score",
                "2025-01-01,Peak,3",
                "2025-01-02,Low_Perf,0",
                "2025-01-03,Crisis,5",
            ]
        );
    }

    #[test]
    fn empty_table_still_has_header() {
        let text = to_text(&DayTable::default());
        assert_eq!(text.trim_end(), "Date,Category,Utility_Score");
    }

    #[test]
    fn reads_back_what_it_wrote() {
        let table = sample();
        let text = to_text(&table);
        let reloaded = read_records(text.as_bytes()).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn unknown_category_is_a_typed_error() {
        let text = "Date,Category,Utility_Score\n2025-01-01,Calm,3\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::InvalidValue { .. }));
    }

    #[test]
    fn out_of_range_score_is_a_typed_error() {
        let text = "Date,Category,Utility_Score\n2025-01-01,Peak,7\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::InvalidValue { .. }));
    }

    #[test]
    fn malformed_date_is_a_csv_error() {
        let text = "Date,Category,Utility_Score\n01/01/2025,Peak,3\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ReportError::Csv { .. }));
    }
}
