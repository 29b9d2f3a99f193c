use anyhow::{Result, bail};

use catdb_core::db::Database;

use super::helpers::{parse_date, print_record_table};

/// List records: everything by default, a single date with `--begin-date`
/// alone, or an inclusive range when both dates are given.
pub(crate) fn cmd_list(
    db: &Database,
    begin_date: Option<&str>,
    end_date: Option<&str>,
    json: bool,
) -> Result<()> {
    let (records, empty_msg) = match (begin_date, end_date) {
        (None, None) => (db.get_all()?, "No records found.".to_string()),
        (Some(begin), None) => {
            let date = parse_date(begin)?;
            let msg = format!("No record found for {}.", date.format("%Y-%m-%d"));
            (db.get(date)?.into_iter().collect(), msg)
        }
        (Some(begin), Some(end)) => {
            let begin = parse_date(begin)?;
            let end = parse_date(end)?;
            let msg = format!(
                "No records found between {} and {}.",
                begin.format("%Y-%m-%d"),
                end.format("%Y-%m-%d")
            );
            (db.get_range(begin, end)?, msg)
        }
        (None, Some(_)) => bail!("--end-date requires --begin-date"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else if records.is_empty() {
        eprintln!("{empty_msg}");
    } else {
        print_record_table(&records);
    }

    Ok(())
}
