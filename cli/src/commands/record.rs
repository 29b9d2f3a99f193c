use anyhow::Result;

use catdb_core::db::Database;
use catdb_core::models::WeightRecord;

use super::helpers::{describe_record, ensure_positive_weight, parse_date};

pub(crate) fn cmd_add(
    db: &Database,
    date_str: &str,
    weight: f64,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    ensure_positive_weight(weight)?;
    let date = parse_date(date_str)?;
    let record = WeightRecord::new(date, weight, notes);

    let added = db.add(&record)?;

    if json {
        if added {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!(
                "{}",
                serde_json::json!({ "error": format!("Record already exists for {}", record.date_str()) })
            );
        }
    } else if added {
        println!("Record added: {}", describe_record(&record));
    } else {
        eprintln!(
            "Failed to add record for {}. A record already exists for that date.",
            record.date_str()
        );
    }

    Ok(())
}

pub(crate) fn cmd_update(
    db: &Database,
    date_str: &str,
    weight: f64,
    notes: Option<String>,
    json: bool,
) -> Result<()> {
    ensure_positive_weight(weight)?;
    let date = parse_date(date_str)?;

    let updated = db.update(date, weight, notes.as_deref())?;
    let record = WeightRecord::new(date, weight, notes);

    if json {
        if updated {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!(
                "{}",
                serde_json::json!({ "error": format!("No record found for {}", record.date_str()) })
            );
        }
    } else if updated {
        println!("Record updated: {}", describe_record(&record));
    } else {
        eprintln!(
            "No record found for {}. Nothing updated.",
            record.date_str()
        );
    }

    Ok(())
}

pub(crate) fn cmd_delete(db: &Database, date_str: &str, json: bool) -> Result<()> {
    let date = parse_date(date_str)?;
    let date_fmt = date.format(catdb_core::models::DATE_FORMAT);

    let deleted = db.delete(date)?;

    if json {
        if deleted {
            println!("{}", serde_json::json!({ "deleted": date_fmt.to_string() }));
        } else {
            println!(
                "{}",
                serde_json::json!({ "error": format!("No record found for {date_fmt}") })
            );
        }
    } else if deleted {
        println!("Record deleted for {date_fmt}");
    } else {
        eprintln!("No record found for {date_fmt}. Nothing deleted.");
    }

    Ok(())
}
