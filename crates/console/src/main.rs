// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fixture_desk::{FixtureDetail, FixtureRow, Intent, Snapshot};
use fixture_desk_api::{Store, StoreConfig, StoreError};
use fixture_desk_domain::{CollaborationTeam, NoteDraft, SystemClock, generate_id};
use fixture_desk_persistence::{DEFAULT_STORAGE_KEY, Persistence};
use tracing::{info, warn};

mod render;

#[cfg(test)]
mod tests;

/// Fixture Desk - operator console for sports fixture coordination
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Key the snapshot document is stored under
    #[arg(short = 'k', long, default_value = DEFAULT_STORAGE_KEY)]
    storage_key: String,

    /// Reject mutations whose references do not resolve
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Action {
    /// Print the operational summary
    Summary,
    /// Print the fixtures table
    Fixtures,
    /// Print everything known about one fixture
    Fixture {
        /// Fixture identifier
        id: String,
    },
    /// Print the current snapshot as JSON
    Export,
    /// Post a collaboration note on a fixture
    Note {
        /// Fixture identifier
        fixture_id: String,
        /// Note text
        message: String,
        /// Who is posting the note
        #[arg(short, long, default_value = "Operator")]
        author: String,
        /// Desk the author belongs to
        #[arg(short, long, default_value = "operations")]
        team: CollaborationTeam,
    },
    /// Apply a JSON array of intents in order
    Apply {
        /// File containing the intents
        file: PathBuf,
    },
    /// Remove the stored snapshot so the next load uses the defaults
    Reset,
}

fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

/// Parses a JSON array of intents.
fn parse_intents(body: &str) -> Result<Vec<Intent>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Dispatches intents in order, stopping at the first rejection.
///
/// Returns how many intents were applied.
fn apply_intents(
    store: &Store,
    intents: Vec<Intent>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let total: usize = intents.len();
    for (applied, intent) in intents.into_iter().enumerate() {
        if let Err(e) = store.dispatch(intent) {
            warn!(applied, total, "Stopping after rejected intent");
            return Err(e.into());
        }
    }
    Ok(total)
}

fn execute(store: &Store, action: Action) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        Action::Summary => println!("{}", store.summary()),
        Action::Fixtures => {
            let snapshot = store.snapshot();
            print!("{}", render::fixtures_table(&FixtureRow::rows(&snapshot)));
        }
        Action::Fixture { id } => {
            let snapshot = store.snapshot();
            let detail: FixtureDetail<'_> = FixtureDetail::for_fixture(&snapshot, &id)
                .ok_or_else(|| format!("Fixture '{id}' not found"))?;
            print!("{}", render::fixture_detail(&detail));
        }
        Action::Export => {
            let snapshot = store.snapshot();
            let exported: &Snapshot = &snapshot;
            println!("{}", serde_json::to_string_pretty(exported)?);
        }
        Action::Note {
            fixture_id,
            message,
            author,
            team,
        } => {
            let id: String = generate_id("note");
            store.upsert_note(NoteDraft {
                id: id.clone(),
                fixture_id,
                author,
                team,
                created_at: None,
                message,
            })?;
            println!("Posted note {id}.");
        }
        Action::Apply { file } => {
            let body: String = std::fs::read_to_string(&file)?;
            let intents: Vec<Intent> = parse_intents(&body)?;
            info!("Applying {} intents from {}", intents.len(), file.display());
            let applied: usize = apply_intents(store, intents)?;
            println!("Applied {applied} intents.");
            println!("{}", store.summary());
        }
        // Handled in `run` before the store is opened.
        Action::Reset => {}
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let persistence: Persistence = open_persistence(&args)?;

    if args.action == Action::Reset {
        let mut persistence: Persistence = persistence.with_storage_key(args.storage_key);
        let removed: bool = persistence.clear_document()?;
        println!(
            "{}",
            if removed {
                "Stored snapshot removed; defaults will be used on next load."
            } else {
                "No stored snapshot to remove."
            }
        );
        return Ok(());
    }

    let config: StoreConfig = StoreConfig {
        storage_key: args.storage_key,
        strict_references: args.strict,
    };
    let store: Store = Store::open(persistence, config, Box::new(SystemClock))?;

    // Flush queued snapshots before reporting any failure.
    let outcome = execute(&store, args.action);
    finish(outcome, store.close())
}

/// Combines the command outcome with the result of closing the store.
///
/// A command failure takes precedence; a close failure alongside it is
/// logged rather than lost.
fn finish(
    outcome: Result<(), Box<dyn std::error::Error>>,
    closed: Result<Persistence, StoreError>,
) -> Result<(), Box<dyn std::error::Error>> {
    match (outcome, closed) {
        (Ok(()), closed) => {
            closed?;
            Ok(())
        }
        (Err(e), Ok(_)) => Err(e),
        (Err(e), Err(close_error)) => {
            warn!(error = %close_error, "Store did not close cleanly");
            Err(e)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Fixture Desk console");
    run(args)
}
