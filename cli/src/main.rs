mod chart;
mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{cmd_add, cmd_delete, cmd_graph, cmd_init, cmd_list, cmd_update};
use catdb_core::db::Database;
use catdb_core::models::InvalidDate;

#[derive(Parser)]
#[command(name = "catdb", version, about = "Cat weight tracker CLI")]
struct Cli {
    /// Path to the database file. Overrides the CAT_DB environment variable.
    #[arg(long, global = true, value_name = "PATH")]
    db_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init {
        /// Path to a CSV file to load initial data (columns: date, weight, notes)
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,
    },
    /// Add a new weight record
    Add {
        /// Date of the record (YYYY-MM-DD, YYYY/MM/DD, MM-DD-YYYY or MM/DD/YYYY)
        date: String,
        /// Weight of the cat in kg
        weight: f64,
        /// Optional notes for the record
        #[arg(long)]
        notes: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Update an existing weight record
    Update {
        /// Date of the record to update
        date: String,
        /// New weight of the cat in kg
        weight: f64,
        /// New notes for the record (omitting clears any existing notes)
        #[arg(long)]
        notes: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a weight record
    Delete {
        /// Date of the record to delete
        date: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List weight records
    List {
        /// Start of the date range, or a single date to look up
        #[arg(long, value_name = "DATE")]
        begin_date: Option<String>,
        /// End of the date range (inclusive; requires --begin-date)
        #[arg(long, value_name = "DATE")]
        end_date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Graph weight records by year
    Graph {
        /// Output image file (default: cat_weight_YYYYMMDD_HHMM.png)
        #[arg(long, value_name = "PATH")]
        graph_file: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Bad date input gets a friendly message and a normal exit; storage
        // and configuration failures are fatal.
        if e.downcast_ref::<InvalidDate>().is_some() {
            eprintln!("Error: {e:#}");
            return;
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let db_path = config::resolve_db_path(cli.db_file)?;
    let db = Database::open(&db_path)?;

    let result = match cli.command {
        Commands::Init { csv } => cmd_init(&db, csv.as_deref()),
        Commands::Add {
            date,
            weight,
            notes,
            json,
        } => cmd_add(&db, &date, weight, notes, json),
        Commands::Update {
            date,
            weight,
            notes,
            json,
        } => cmd_update(&db, &date, weight, notes, json),
        Commands::Delete { date, json } => cmd_delete(&db, &date, json),
        Commands::List {
            begin_date,
            end_date,
            json,
        } => cmd_list(&db, begin_date.as_deref(), end_date.as_deref(), json),
        Commands::Graph { graph_file } => cmd_graph(&db, graph_file),
    };

    let closed = db.close();
    result?;
    closed
}
