use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use scrabbleator_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrabbleator")]
#[command(author, version, about = "Find Scrabble words from your letters")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.toml (default: ~/.config/scrabbleator/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the word service
    #[arg(long, global = true)]
    service_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Look up words once and print them
    Find {
        /// Letters to search with (2-9, A-Z)
        letters: String,
        /// Print all results at once instead of typing them out
        #[arg(long)]
        instant: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if let Some(url) = cli.service_url {
        config.service.base_url = url;
    }
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => {
            // The terminal belongs to the UI, so logs go to a file
            init_logging(&config, true)?;
            commands::run::run(config).await
        }
        Some(Commands::Find { letters, instant }) => {
            init_logging(&config, false)?;
            commands::find::run(config, &letters, instant).await
        }
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}
