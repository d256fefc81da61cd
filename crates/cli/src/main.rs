use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use songvote_core::constants::DEFAULT_LEADERBOARD_LIMIT;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "songvote")]
#[command(
    about = "Pairwise song tournament: vote between two tracks, rank by approval",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the catalog and serve the HTTP API
    Serve {
        #[arg(short, long, default_value = "5000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// JSON file with `[{"name": ..., "limit": ...}]` entries
        #[arg(short, long)]
        artists: Option<PathBuf>,
        /// Comma-separated artist names excluded from matchups
        #[arg(short, long)]
        blocklist: Option<String>,
    },
    /// Print the stored record and approval for a track id
    Rating { id: i64 },
    /// Print the highest-approval tracks
    Leaderboard {
        #[arg(short, long, default_value_t = DEFAULT_LEADERBOARD_LIMIT)]
        limit: usize,
    },
}

const DATABASE_URL_ENV: &str = "DATABASE_URL";
const SQLITE_URL_PREFIX: &str = "sqlite:///";

/// Resolve the database file from a `DATABASE_URL` value.
///
/// `sqlite:///game_data.db` is relative to the working directory,
/// `sqlite:////var/lib/songvote.db` is absolute, and a value without a scheme
/// is taken as a path.
fn db_path_from_url(url: &str) -> Result<PathBuf> {
    if let Some(path) = url.strip_prefix(SQLITE_URL_PREFIX) {
        if path.is_empty() {
            bail!("{DATABASE_URL_ENV} has no database path: {url}");
        }
        return Ok(PathBuf::from(path));
    }
    if url.contains("://") {
        bail!("unsupported {DATABASE_URL_ENV} scheme (only sqlite is supported): {url}");
    }
    Ok(PathBuf::from(url))
}

pub(crate) fn get_db_path() -> Result<PathBuf> {
    match songvote_core::env_config::env_string(DATABASE_URL_ENV) {
        Some(url) => db_path_from_url(&url),
        None => Ok(dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("songvote")
            .join("game_data.db")),
    }
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, artists, blocklist } => {
            commands::serve::run(host, port, artists, blocklist).await?;
        },
        Commands::Rating { id } => commands::ratings::run_rating(id).await?,
        Commands::Leaderboard { limit } => commands::ratings::run_leaderboard(limit).await?,
    }

    Ok(())
}
