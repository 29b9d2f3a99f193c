use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Canonical textual date form used for storage and comparison.
/// Lexicographic order of this form equals chronological order.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One dated weight measurement. `date` is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightRecord {
    pub date: NaiveDate,
    pub weight_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WeightRecord {
    #[must_use]
    pub fn new(date: NaiveDate, weight_kg: f64, notes: Option<String>) -> Self {
        WeightRecord {
            date,
            weight_kg,
            notes,
        }
    }

    #[must_use]
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

// Accepted input formats, tried in order. First match wins, so the ISO form
// can never be shadowed by the US forms.
const INPUT_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m-%d-%Y", "%m/%d/%Y"];

/// A date string that matches none of the accepted input formats.
///
/// Kept as its own type so the CLI can tell bad user input apart from
/// storage failures when unwinding an `anyhow` chain.
#[derive(Debug, Clone)]
pub struct InvalidDate(pub String);

impl fmt::Display for InvalidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid date '{}'. Use YYYY-MM-DD, YYYY/MM/DD, MM-DD-YYYY or MM/DD/YYYY",
            self.0
        )
    }
}

impl std::error::Error for InvalidDate {}

/// Parse a user-supplied date string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, InvalidDate> {
    let s = s.trim();
    for fmt in INPUT_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    Err(InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_slash() {
        let date = parse_date("2024/01/15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_us_dash() {
        let date = parse_date("01-15-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_us_slash() {
        let date = parse_date("01/15/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        let date = parse_date("  2024-01-15 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("15/01/2024").is_err()); // no day-first format
    }

    #[test]
    fn test_date_str_canonical_form() {
        let record = WeightRecord::new(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(), 4.2, None);
        assert_eq!(record.date_str(), "2024-03-07");
    }

    #[test]
    fn test_parse_then_format_round_trip() {
        // No timezone drift, no off-by-one from textual conversion.
        for input in ["2024-01-01", "2024-12-31", "2000-02-29"] {
            let date = parse_date(input).unwrap();
            assert_eq!(date.format(DATE_FORMAT).to_string(), input);
        }
    }
}
