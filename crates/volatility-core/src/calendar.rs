//! Calendar generation.
//!
//! Produces the ordered list of days the dataset covers. The calendar is
//! the only source of dates: every later stage keeps its row order.

use chrono::NaiveDate;

use crate::config::CalendarConfig;

/// Return every day from `config.start` to `config.end`, both included.
///
/// Dates are strictly increasing and contiguous. A range whose end lies
/// before its start yields no days; [`AnalysisConfig::validate`] rejects
/// such ranges before the pipeline runs.
///
/// [`AnalysisConfig::validate`]: crate::config::AnalysisConfig::validate
pub fn generate(config: &CalendarConfig) -> Vec<NaiveDate> {
    let end = config.end;
    config
        .start
        .iter_days()
        .take_while(|day| *day <= end)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> CalendarConfig {
        CalendarConfig {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn full_year_2025_has_365_days() {
        let days = generate(&CalendarConfig::default());
        assert_eq!(days.len(), 365);
        assert_eq!(days[0].to_string(), "2025-01-01");
        assert_eq!(days[364].to_string(), "2025-12-31");
    }

    #[test]
    fn days_are_contiguous_without_duplicates() {
        let days = generate(&CalendarConfig::default());
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }
    }

    #[test]
    fn leap_year_has_366_days() {
        let days = generate(&range((2024, 1, 1), (2024, 12, 31)));
        assert_eq!(days.len(), 366);
        assert!(days.iter().any(|d| d.month() == 2 && d.day() == 29));
    }

    #[test]
    fn single_day_range() {
        let days = generate(&range((2025, 6, 1), (2025, 6, 1)));
        assert_eq!(days.len(), 1);
    }

    #[test]
    fn reversed_range_is_empty() {
        let days = generate(&range((2025, 6, 2), (2025, 6, 1)));
        assert!(days.is_empty());
    }
}
