use std::path::PathBuf;

use anyhow::Result;

use catdb_core::db::Database;

use crate::chart::{default_graph_file, render_weight_chart};

pub(crate) fn cmd_graph(db: &Database, graph_file: Option<PathBuf>) -> Result<()> {
    let records = db.get_all()?;

    if records.is_empty() {
        eprintln!("No records to graph.");
        return Ok(());
    }

    let path = graph_file.unwrap_or_else(default_graph_file);
    render_weight_chart(&records, &path)?;
    println!("Graph saved to {}", path.display());

    Ok(())
}
