use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use parlor::model::RemoteConfig;
use parlor::store::LocalStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Side-panel tools for a character chat backend", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides the configured remote)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            let cwd = std::env::current_dir().context("get current dir")?;
            let store = LocalStore::discover(&cwd)?;
            init_file_logging(store.root())?;
            info!(workspace = %store.root().display(), "launching terminal ui");
            parlor::tui::run_with_options(parlor::tui::TuiRunOptions {
                store,
                url: cli.url,
            })?;
        }
        Some(command) => {
            init_stderr_logging();
            crate::cli_exec::handle_command(command, cli.url)?
        }
    }

    Ok(())
}

pub(crate) fn require_remote(store: &LocalStore, url: Option<&str>) -> Result<RemoteConfig> {
    if let Some(url) = url {
        return Ok(RemoteConfig {
            base_url: url.to_string(),
        });
    }
    let cfg = store.read_config()?;
    cfg.remote
        .context("no remote configured (run `parlor remote set --url ...` or pass --url)")
}

/// Name of the log file the TUI writes inside `.parlor`.
const TUI_LOG_FILE: &str = "tui.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so its logs are appended to `.parlor/tui.log`.
fn init_file_logging(parlor_dir: &Path) -> Result<()> {
    let path = parlor_dir.join(TUI_LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
