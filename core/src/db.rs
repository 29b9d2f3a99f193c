use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, params};

use crate::models::{DATE_FORMAT, WeightRecord};

/// Handle to one SQLite database, scoped to a single command invocation.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database file. Does not create the schema — call
    /// [`Database::init_schema`] for that.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        Ok(Database { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database { conn })
    }

    /// Ensure the `weight_records` table exists.
    ///
    /// Returns `true` when the table was just created, `false` when it
    /// already existed. Never touches existing rows.
    pub fn init_schema(&self) -> Result<bool> {
        let exists = self
            .conn
            .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'weight_records'")?
            .exists([])?;
        if exists {
            return Ok(false);
        }
        self.conn.execute_batch(
            "CREATE TABLE weight_records (
                date TEXT PRIMARY KEY,
                weight REAL NOT NULL,
                notes TEXT
            );",
        )?;
        Ok(true)
    }

    // --- Weight Records ---

    /// Insert a new record. Returns `false` when a record already exists for
    /// the date; the existing record is left unchanged.
    pub fn add(&self, record: &WeightRecord) -> Result<bool> {
        let result = self.conn.execute(
            "INSERT INTO weight_records (date, weight, notes) VALUES (?1, ?2, ?3)",
            params![record.date_str(), record.weight_kg, record.notes],
        );
        match result {
            Ok(_) => Ok(true),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Ok(false)
            }
            Err(e) => Err(e).context("Failed to insert weight record"),
        }
    }

    /// Overwrite weight and notes for an existing date. Returns `false` when
    /// no record exists for the date; nothing is created in that case.
    pub fn update(&self, date: NaiveDate, weight_kg: f64, notes: Option<&str>) -> Result<bool> {
        let rows = self.conn.execute(
            "UPDATE weight_records SET weight = ?1, notes = ?2 WHERE date = ?3",
            params![weight_kg, notes, date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(rows > 0)
    }

    /// Remove the record for a date. Returns `false` when none existed.
    pub fn delete(&self, date: NaiveDate) -> Result<bool> {
        let rows = self.conn.execute(
            "DELETE FROM weight_records WHERE date = ?1",
            params![date.format(DATE_FORMAT).to_string()],
        )?;
        Ok(rows > 0)
    }

    pub fn get(&self, date: NaiveDate) -> Result<Option<WeightRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, weight, notes FROM weight_records WHERE date = ?1")?;
        let mut rows = stmt.query(params![date.format(DATE_FORMAT).to_string()])?;
        if let Some(row) = rows.next()? {
            Ok(Some(Self::record_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    pub fn get_all(&self) -> Result<Vec<WeightRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, weight, notes FROM weight_records ORDER BY date")?;
        let records = stmt
            .query_map([], Self::record_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Fetch records with `begin <= date <= end`, ascending by date.
    ///
    /// An inverted range (`begin > end`) is rejected rather than silently
    /// returning an empty set, since it is always a caller mistake.
    pub fn get_range(&self, begin: NaiveDate, end: NaiveDate) -> Result<Vec<WeightRecord>> {
        if begin > end {
            bail!(
                "Invalid range: begin date {} is after end date {}",
                begin.format(DATE_FORMAT),
                end.format(DATE_FORMAT)
            );
        }
        let mut stmt = self.conn.prepare(
            "SELECT date, weight, notes FROM weight_records
             WHERE date BETWEEN ?1 AND ?2 ORDER BY date",
        )?;
        let records = stmt
            .query_map(
                params![
                    begin.format(DATE_FORMAT).to_string(),
                    end.format(DATE_FORMAT).to_string()
                ],
                Self::record_from_row,
            )?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    /// Insert-or-overwrite every record, keyed by date, in one transaction.
    /// Either the whole batch commits or none of it does.
    pub fn upsert_many(&self, records: &[WeightRecord]) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for record in records {
            tx.execute(
                "INSERT INTO weight_records (date, weight, notes)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(date) DO UPDATE SET
                    weight = excluded.weight,
                    notes = excluded.notes",
                params![record.date_str(), record.weight_kg, record.notes],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Close the connection. Consuming `self` makes double-close
    /// unrepresentable; dropping without calling this also releases the
    /// connection.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| anyhow::Error::from(e).context("Failed to close database"))
    }

    fn record_from_row(row: &rusqlite::Row) -> rusqlite::Result<WeightRecord> {
        let date_str: String = row.get(0)?;
        let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(WeightRecord {
            date,
            weight_kg: row.get(1)?,
            notes: row.get(2)?,
        })
    }
}
