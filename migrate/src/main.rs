//! One-time migration to database-first multiple-lists staffing.
//!
//! Finds the scheduling database, backfills quota and membership rows for
//! every multiple-lists game that still relies on client-side cached
//! preferences, and prints a summary. Safe to re-run: already-migrated games
//! are skipped.

#![warn(clippy::all, clippy::pedantic)]

use clap::Parser;
use efficials_common::backfill;
use efficials_common::db_util;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show additional output
    #[arg(short, long, env = "EFFICIALS_VERBOSE")]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Failures are reported as diagnostics; the process still exits normally
    // so an operator can inspect the output and simply re-run.
    if let Err(e) = run() {
        println!("Migration aborted: {e:#}");
        println!("No changes were committed. Re-run after resolving the error above.");
    }
}

fn run() -> anyhow::Result<()> {
    println!("Starting migration to database-first multiple lists...");

    let Some(db_path) = db_util::resolve_database_path(db_util::DB_FILENAME_CANDIDATES) else {
        println!(
            "Database file not found! Looked for: {}",
            db_util::DB_FILENAME_CANDIDATES.join(", ")
        );
        return Ok(());
    };
    println!("Using database: {}", db_path.display());

    let mut conn = db_util::get_database_connection(&db_path)?;
    let summary = backfill::run_backfill(&mut conn)?;

    println!("Migration completed!");
    println!("Migrated games: {}", summary.migrated);
    println!("Total games processed: {}", summary.candidates);
    if summary.migrated > 0 {
        println!("The multiple-lists claiming flow now reads from the database only.");
    }
    Ok(())
}
