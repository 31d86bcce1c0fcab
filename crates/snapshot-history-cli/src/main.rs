use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snapshot_history::HistoryConfig;

mod session;
mod subjects;

use session::{parse_steps, run_editor, run_game, EditorStep, GameStep};

/// Replays scripted undo/redo sessions against a snapshot history.
#[derive(Parser, Debug)]
#[command(name = "snapshot-history", version, about)]
struct Cli {
    /// History config file. Defaults to `snapshot-history.json` next to the
    /// executable, or `SNAPSHOT_HISTORY_CONFIG` if set.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Max snapshots kept, overriding the config file.
    #[arg(long)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit an immutable editor state.
    ///
    /// Steps: type:<text>, move:<pos>, save, undo, redo
    Editor {
        #[arg(required = true)]
        steps: Vec<String>,
    },
    /// Play a game and restore saved mementos.
    ///
    /// Steps: play:<level>,<health>,<x>,<y>, undo, redo
    Game {
        #[arg(required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(HistoryConfig::config_path);
    let mut config = HistoryConfig::load_or_create(&config_path);
    if let Some(max_depth) = cli.max_depth {
        config.max_depth = Some(max_depth);
        config.sanitize();
    }
    tracing::info!(
        "Using history config from {} (max_depth: {:?})",
        config_path.display(),
        config.max_depth
    );

    let lines = match cli.command {
        Command::Editor { steps } => run_editor(&parse_steps::<EditorStep>(&steps)?, config),
        Command::Game { steps } => run_game(&parse_steps::<GameStep>(&steps)?, config),
    };

    for line in lines {
        println!("{line}");
    }

    Ok(())
}
