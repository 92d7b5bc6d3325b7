//! Wordle Daily - CLI
//!
//! Play today's puzzle in the terminal, or inspect statistics and the share
//! text without opening the TUI.

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use wordle_daily::{
    config::{Config, DEFAULT_WORD},
    daily::{DailyKey, seconds_until_tomorrow},
    game::{DailyGame, load_statistics},
    logging,
    output::{print_share, print_statistics, print_today},
    storage::SaveQueue,
};

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "A daily word-guessing puzzle for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The secret word
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORD)]
    word: String,

    /// Directory for the saved history (default: platform data directory)
    #[arg(short = 'd', long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Show statistics from the saved history
    Stats,

    /// Print the share text for today's board
    Share,

    /// Show today's puzzle key and the time until the next one
    Today,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(&cli.word, cli.data_dir)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if !matches!(command, Commands::Play) {
        logging::init_stderr("warn")?;
    }

    match command {
        Commands::Play => run_play_command(config),
        Commands::Stats => run_stats_command(&config),
        Commands::Share => run_share_command(&config),
        Commands::Today => {
            run_today_command();
            Ok(())
        }
    }
}

fn run_play_command(config: Config) -> Result<()> {
    use wordle_daily::interactive::{App, run_tui};

    // No stderr fallback: it would draw over the TUI.
    logging::init_tui(config.log_path().as_deref(), "info");

    let runtime = Runtime::new()?;
    let store = config.store();
    let (saves, worker) = {
        let _guard = runtime.enter();
        SaveQueue::spawn(Arc::clone(&store))
    };
    let game = runtime.block_on(DailyGame::open(
        config.secret.clone(),
        &*store,
        Some(saves.clone()),
    ));

    let app = App::new(game, config, store, saves, runtime.handle().clone());
    let result = run_tui(app);

    // The app dropped its queue handle; the worker drains and exits.
    if let Err(err) = runtime.block_on(worker) {
        tracing::warn!(error = %err, "save worker ended abnormally");
    }
    result
}

fn run_stats_command(config: &Config) -> Result<()> {
    let runtime = Runtime::new()?;
    let store = config.store();
    let stats = runtime.block_on(load_statistics(&*store));
    print_statistics(&stats);
    Ok(())
}

fn run_share_command(config: &Config) -> Result<()> {
    let runtime = Runtime::new()?;
    let store = config.store();
    let game = runtime.block_on(DailyGame::open(config.secret.clone(), &*store, None));
    print_share(&game.share_text(), game.session().is_finished());
    Ok(())
}

fn run_today_command() {
    print_today(
        DailyKey::today(),
        seconds_until_tomorrow(Local::now().naive_local()),
    );
}
