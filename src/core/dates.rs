//! Date parsing and the calendar dimension
//!
//! The sources ship dates as plain 8-digit keys, hyphenated calendar
//! dates, US and EU slash forms, and hyphenated datetimes. Parsing tries
//! the known formats in fixed order; unparseable input yields no date and
//! the record is retained with a null `DateKey`. The calendar dimension
//! covers every day of the supported span regardless of what the input
//! references, with fiscal year/quarter on the regulatory October to
//! September cycle.

use crate::config::CalendarConfig;
use crate::domain::tables::DimDateRow;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

/// Date-only formats, attempted against the first ten characters.
const DATE_FORMATS: &[&str] = &[
    "%Y%m%d",   // 20240115
    "%Y-%m-%d", // 2024-01-15
    "%m/%d/%Y", // 01/15/2024
    "%d/%m/%Y", // 15/01/2024
];

/// Datetime formats, attempted against the full string.
const DATETIME_FORMATS: &[&str] = &[
    "%d-%m-%Y %H:%M:%S",    // 15-01-2024 10:30:00 (RASFF current era)
    "%Y-%m-%dT%H:%M:%S",    // 2024-01-15T10:30:00 (UK FSA `created`)
    "%Y-%m-%dT%H:%M:%S%.f", // fractional-second variant
    "%Y-%m-%dT%H:%M:%S%z",  // zoned variant
];

/// Parses a native date representation in any of the known formats.
///
/// Returns `None` for unparseable input; callers keep the record and
/// leave its date key null.
pub fn parse_native_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }

    let head: String = trimmed.chars().take(10).collect();
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&head, format) {
            return Some(date);
        }
    }

    None
}

/// `YYYYMMDD` integer key for a calendar date. Injective over valid
/// dates: distinct dates never collapse to the same key.
pub fn date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// ISO calendar date text, the form all date columns are emitted in.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Regulatory fiscal year: FY N runs October N-1 through September N.
pub fn fiscal_year(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Fiscal quarter on the October-September cycle: Q1 = Oct-Dec,
/// Q2 = Jan-Mar, Q3 = Apr-Jun, Q4 = Jul-Sep.
pub fn fiscal_quarter(date: NaiveDate) -> u32 {
    ((date.month() + 2) % 12) / 3 + 1
}

/// Builds the complete calendar dimension for the configured span, one
/// row per day, independent of any input record.
pub fn build_dim_date(calendar: &CalendarConfig) -> Vec<DimDateRow> {
    let start = NaiveDate::from_ymd_opt(calendar.start_year, 1, 1)
        .expect("January 1 exists in every year");
    let end = NaiveDate::from_ymd_opt(calendar.end_year, 12, 31)
        .expect("December 31 exists in every year");

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .map(|date| DimDateRow {
            date_key: date_key(date),
            date: iso_date(date),
            year: date.year(),
            fiscal_year: fiscal_year(date),
            quarter: (date.month() - 1) / 3 + 1,
            fiscal_quarter: fiscal_quarter(date),
            month: date.month(),
            month_name: date.format("%B").to_string(),
            day: date.day(),
            day_of_week: weekday_number(date.weekday()),
            day_name: date.format("%A").to_string(),
            week_of_year: date.iso_week().week(),
        })
        .collect()
}

/// True when a date key falls inside the configured calendar span. Keys
/// outside the span cannot resolve against the date dimension and are
/// nulled by the assembler to keep the zero-orphan invariant.
pub fn in_calendar_span(calendar: &CalendarConfig, key: u32) -> bool {
    let year = (key / 10_000) as i32;
    year >= calendar.start_year && year <= calendar.end_year
}

fn weekday_number(weekday: Weekday) -> u32 {
    // 1 = Monday
    weekday.number_from_monday()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("20240115"; "plain eight digit")]
    #[test_case("2024-01-15"; "hyphenated")]
    #[test_case("01/15/2024"; "us slashes")]
    #[test_case("15-01-2024 10:30:00"; "hyphenated datetime")]
    #[test_case("2024-01-15T08:00:00"; "iso datetime")]
    fn test_known_formats_parse_to_same_day(input: &str) {
        let date = parse_native_date(input).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_unparseable_input_is_none() {
        assert!(parse_native_date("not-a-date").is_none());
        assert!(parse_native_date("").is_none());
        assert!(parse_native_date("20241315").is_none());
    }

    #[test]
    fn test_date_key_is_injective_across_formats() {
        // A full leap year of distinct days yields distinct keys
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let keys: std::collections::HashSet<u32> =
            start.iter_days().take(366).map(date_key).collect();
        assert_eq!(keys.len(), 366);
    }

    #[test]
    fn test_date_key_layout() {
        let date = NaiveDate::from_ymd_opt(2019, 7, 4).unwrap();
        assert_eq!(date_key(date), 20190704);
        assert_eq!(iso_date(date), "2019-07-04");
    }

    #[test_case(2023, 9, 30, 2023; "september closes the fiscal year")]
    #[test_case(2023, 10, 1, 2024; "october opens the next")]
    #[test_case(2024, 1, 15, 2024; "midwinter stays in fy")]
    fn test_fiscal_year(y: i32, m: u32, d: u32, expected: i32) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(fiscal_year(date), expected);
    }

    #[test_case(10, 1; "october is q1")]
    #[test_case(12, 1; "december is q1")]
    #[test_case(1, 2; "january is q2")]
    #[test_case(4, 3; "april is q3")]
    #[test_case(9, 4; "september is q4")]
    fn test_fiscal_quarter(month: u32, expected: u32) {
        let date = NaiveDate::from_ymd_opt(2024, month, 1).unwrap();
        assert_eq!(fiscal_quarter(date), expected);
    }

    #[test]
    fn test_dim_date_covers_full_span() {
        let calendar = CalendarConfig {
            start_year: 2020,
            end_year: 2021,
        };
        let rows = build_dim_date(&calendar);
        // 2020 is a leap year
        assert_eq!(rows.len(), 366 + 365);
        assert_eq!(rows.first().unwrap().date_key, 20200101);
        assert_eq!(rows.last().unwrap().date_key, 20211231);
    }

    #[test]
    fn test_dim_date_keys_unique_and_ascending() {
        let rows = build_dim_date(&CalendarConfig {
            start_year: 2023,
            end_year: 2023,
        });
        let mut prev = 0;
        for row in &rows {
            assert!(row.date_key > prev);
            prev = row.date_key;
        }
    }

    #[test]
    fn test_dim_date_weekday_convention() {
        let rows = build_dim_date(&CalendarConfig {
            start_year: 2024,
            end_year: 2024,
        });
        // 2024-01-01 was a Monday
        assert_eq!(rows[0].day_of_week, 1);
        assert_eq!(rows[0].day_name, "Monday");
    }

    #[test]
    fn test_in_calendar_span() {
        let calendar = CalendarConfig::default();
        assert!(in_calendar_span(&calendar, 20120101));
        assert!(in_calendar_span(&calendar, 20261231));
        assert!(!in_calendar_span(&calendar, 20111231));
        assert!(!in_calendar_span(&calendar, 20270101));
    }
}
