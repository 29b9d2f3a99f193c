use std::path::Path;

use anyhow::{Context, Result};

use catdb_core::csv_import::parse_weight_csv;
use catdb_core::db::Database;

/// Create the schema if absent, then optionally bulk-load a CSV file.
pub(crate) fn cmd_init(db: &Database, csv: Option<&Path>) -> Result<()> {
    let created = db.init_schema()?;

    if created {
        println!("Database initialized. Table 'weight_records' created.");
    } else {
        println!("Database already initialized. Table 'weight_records' already exists.");
    }

    if let Some(path) = csv {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        let records = parse_weight_csv(file)?;

        if records.is_empty() {
            eprintln!("No rows found in CSV file.");
            return Ok(());
        }

        db.upsert_many(&records)?;
        println!(
            "Imported {} record(s) from {}",
            records.len(),
            path.display()
        );
    }

    Ok(())
}
