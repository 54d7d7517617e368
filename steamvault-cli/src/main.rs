//! steamvault CLI
//!
//! Command-line interface for projecting serialized entity collections into
//! the SQLite store.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use steamvault_ingest::{ingest_table, Table};
use steamvault_model::identity::UsernameCredential;

mod error;
use error::CliError;

#[derive(Parser)]
#[command(name = "steamvault")]
#[command(about = "Normalize scraped store data into a SQLite database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a JSON collection file into one table
    Ingest {
        /// Store database pathname (created if missing)
        #[arg(short, long)]
        db: PathBuf,

        /// Target table: games, game_genres, companies, develop_publish,
        /// users, likes or reviews
        #[arg(short, long)]
        table: String,

        /// Input JSON file pathname, e.g. output/gamesData.json
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show per-table row counts for a store
    Stats {
        /// Store database pathname
        #[arg(short, long)]
        db: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ingest { db, table, input } => run_ingest(&db, &table, &input),
        Commands::Stats { db } => run_stats(&db),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run_ingest(db_path: &Path, table: &str, input: &Path) -> Result<(), CliError> {
    let table: Table = table.parse().map_err(|e| CliError::ingest(format!("{e}")))?;

    let conn = steamvault_db::open_database(db_path).map_err(|e| {
        CliError::database(format!("failed to open store at {}: {}", db_path.display(), e))
    })?;

    let stats = ingest_table(&conn, table, input, &UsernameCredential)
        .map_err(|e| CliError::ingest(format!("{e}")))?;

    log::info!(
        "  {} {} — {} rows: {} inserted, {} conflicts skipped, {} invalid skipped",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        table.as_str().if_supports_color(Stdout, |t| t.bold()),
        stats.total,
        stats.inserted,
        stats.skipped_conflict,
        stats.skipped_invalid,
    );
    if stats.merged_roles > 0 {
        log::info!("  Roles merged to 'both': {}", stats.merged_roles);
    }
    log::info!("  Database: {}", db_path.display());

    Ok(())
}

fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let conn = steamvault_db::open_database(db_path).map_err(|e| {
        CliError::database(format!("failed to open store at {}: {}", db_path.display(), e))
    })?;
    let stats = steamvault_db::store_stats(&conn)
        .map_err(|e| CliError::database(format!("{e}")))?;

    log::info!(
        "{}",
        format!("Store contents of {}", db_path.display())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Games:     {}", stats.games);
    log::info!("  Genres:    {}", stats.genres);
    log::info!("  Companies: {}", stats.companies);
    log::info!("  Relations: {}", stats.relations);
    log::info!("  Users:     {}", stats.users);
    log::info!("  Likes:     {}", stats.likes);
    log::info!("  Reviews:   {}", stats.reviews);

    Ok(())
}
