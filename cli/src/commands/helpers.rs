use anyhow::{Result, bail};
use chrono::NaiveDate;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use catdb_core::models::WeightRecord;

/// Parse a user-supplied date, keeping the `InvalidDate` type intact in the
/// error chain so `main` can treat it as non-fatal input validation.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    catdb_core::models::parse_date(s).map_err(anyhow::Error::new)
}

pub(crate) fn ensure_positive_weight(weight: f64) -> Result<()> {
    if weight <= 0.0 {
        bail!("Weight must be greater than 0");
    }
    Ok(())
}

pub(crate) fn print_record_table(records: &[WeightRecord]) {
    #[derive(Tabled)]
    struct RecordRow {
        #[tabled(rename = "Date")]
        date: String,
        #[tabled(rename = "Weight (kg)")]
        weight: String,
        #[tabled(rename = "Notes")]
        notes: String,
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            date: r.date_str(),
            weight: format!("{:.2}", r.weight_kg),
            notes: r.notes.clone().unwrap_or_default(),
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}

/// Describe a record on one line for success messages.
pub(crate) fn describe_record(record: &WeightRecord) -> String {
    match &record.notes {
        Some(n) => format!("{}, {} kg, Notes: {n}", record.date_str(), record.weight_kg),
        None => format!("{}, {} kg", record.date_str(), record.weight_kg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catdb_core::models::InvalidDate;

    #[test]
    fn test_parse_date_accepts_all_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for input in ["2024-01-15", "2024/01/15", "01-15-2024", "01/15/2024"] {
            assert_eq!(parse_date(input).unwrap(), expected);
        }
    }

    #[test]
    fn test_parse_date_error_is_downcastable() {
        let err = parse_date("bogus").unwrap_err();
        assert!(err.downcast_ref::<InvalidDate>().is_some());
    }

    #[test]
    fn test_ensure_positive_weight() {
        assert!(ensure_positive_weight(4.2).is_ok());
        assert!(ensure_positive_weight(0.0).is_err());
        assert!(ensure_positive_weight(-1.0).is_err());
    }

    #[test]
    fn test_describe_record() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let with_notes = WeightRecord::new(date, 4.2, Some("vet".to_string()));
        assert_eq!(describe_record(&with_notes), "2024-01-15, 4.2 kg, Notes: vet");

        let without = WeightRecord::new(date, 4.2, None);
        assert_eq!(describe_record(&without), "2024-01-15, 4.2 kg");
    }
}
