use std::path::PathBuf;

use app::App;
use clap::{Parser, Subcommand, ValueEnum};
use musketeer_types::Side;
use musketeers::{Console, GameMode};

pub mod app;

#[derive(Debug, Parser)]
#[command(name = "musketeers", about = "Play Three Musketeers on the console")]
pub struct Cli {
    /// Game mode, asked for on start when missing
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Side the human plays against the computer
    #[arg(long, value_enum)]
    side: Option<SideArg>,
    /// Seed for the computer player
    #[arg(long)]
    seed: Option<u64>,
    /// Write the moves of every finished game to this file
    #[arg(long)]
    save_history: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Step through a saved game
    Replay { path: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Human,
    Random,
    Greedy,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Human => GameMode::Human,
            ModeArg::Random => GameMode::HumanRandom,
            ModeArg::Greedy => GameMode::HumanGreedy,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Musketeer,
    Guard,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Musketeer => Side::Musketeer,
            SideArg::Guard => Side::Guard,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut console = Console::stdio();
    match cli.command {
        Some(Command::Replay { ref path }) => app::replay_saved(path, &mut console)?,
        None => App::new(&cli).run(&mut console)?,
    }
    Ok(())
}
