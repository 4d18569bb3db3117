//! Habitally CLI - habits, goals, routines and mindfulness from the terminal.

mod commands;
mod config;
mod theme;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use habitally_storage::{load_repository, AutoSaver, JsonStorage, SharedRepository};
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::Command;
use config::{AppConfig, GlobalArgs};

#[derive(Parser)]
#[command(name = "habitally")]
#[command(about = "Personal habit, goal and routine tracker", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

fn init_logging() {
    // Logs go to stderr so command output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::from(&cli.global);
    let calendar = config.calendar();
    info!("Using data directory {}", config.data_dir.display());

    let storage = Arc::new(JsonStorage::new(&config.data_dir).await?);
    let repo = load_repository(storage.as_ref(), chrono::Utc::now(), &calendar).await?;
    let repo: SharedRepository = Arc::new(Mutex::new(repo));
    let saver = AutoSaver::attach(repo.clone(), storage, config.autosave.clone()).await;

    let outcome = {
        let mut repo = repo.lock().await;
        commands::execute(cli.command, &mut repo, &calendar, &config.stats, chrono::Utc::now())
    };

    saver.shutdown().await;
    outcome
}
