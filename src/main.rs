use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trivia_board::{Config, TriviaGame, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Setup file to import before the first screen
    #[arg(short, long)]
    setup: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default path offered by the export and import prompts
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Countdown seconds per question (0 disables the timer)
    #[arg(short, long)]
    timer: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(export) = args.export {
        config.export_path = export;
    }
    if let Some(timer) = args.timer {
        config.timer_seconds = timer;
    }
    config.validate().context("Invalid command-line options")?;

    match config.log_file_path() {
        Ok(path) => {
            if let Err(e) = logging::init_file_logger(&path, args.verbose) {
                eprintln!("Logging disabled ({}): {}", path.display(), e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let game = match args.setup {
        Some(path) => TriviaGame::from_json(config, &path)
            .with_context(|| format!("Failed to import {}", path.display()))?,
        None => TriviaGame::new(config),
    };

    game.run().await.context("Error running game")?;
    Ok(())
}
