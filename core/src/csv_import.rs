use std::io::Read;

use anyhow::{Context, Result, bail};

use crate::models::{WeightRecord, parse_date};

/// Parse a weight-record CSV from any reader.
///
/// Expected header: `date,weight,notes` (case-insensitive; `notes` is
/// optional). Dates may use any of the accepted input formats; blank rows
/// are skipped.
pub fn parse_weight_csv<R: Read>(reader: R) -> Result<Vec<WeightRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV headers")?.clone();

    let col =
        |name: &str| -> Option<usize> { headers.iter().position(|h| h.eq_ignore_ascii_case(name)) };

    let idx_date = col("date").context("Missing required column: date")?;
    let idx_weight = col("weight").context("Missing required column: weight")?;
    let idx_notes = col("notes");

    let mut records = Vec::new();

    for (line_num, result) in rdr.records().enumerate() {
        let row = line_num + 2; // 1-based, after the header
        let record = result.with_context(|| format!("Failed to parse CSV row {row}"))?;

        let date_field = record.get(idx_date).unwrap_or("").trim();
        if date_field.is_empty() {
            continue; // skip blank rows
        }

        let date = parse_date(date_field).with_context(|| format!("CSV row {row}"))?;

        let weight_kg: f64 = record
            .get(idx_weight)
            .unwrap_or("")
            .trim()
            .parse()
            .with_context(|| format!("Invalid weight in CSV row {row}"))?;
        if weight_kg <= 0.0 {
            bail!("Weight must be greater than 0 (CSV row {row})");
        }

        let notes = idx_notes
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        records.push(WeightRecord::new(date, weight_kg, notes));
    }

    Ok(records)
}
