mod config;
mod input;
mod render;
mod session;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tictactoe_common::tictactoe::{Difficulty, Player};
use tictactoe_common::{SessionRng, log, logger};

use config::{ClientConfig, PlayMode, get_config_manager};
use session::{GameSettings, Session};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    VsBot,
    VsHuman,
}

impl From<ModeArg> for PlayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::VsBot => PlayMode::VsBot,
            ModeArg::VsHuman => PlayMode::VsHuman,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    X,
    O,
}

impl From<SideArg> for Player {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::X => Player::First,
            SideArg::O => Player::Second,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Console tic-tac-toe with an unbeatable bot")]
struct Args {
    /// Config file; defaults to tictactoe_client_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Symbol the human plays against the bot. X moves first.
    #[arg(long, value_enum)]
    side: Option<SideArg>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Seed for the easy bot's random moves.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Skip the setup menu and play with the resolved settings.
    #[arg(long)]
    no_prompt: bool,

    /// Write the resolved settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ClientConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(side) = self.side {
            config.human_side = side.into();
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty.into();
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.verbose |= self.verbose;
        config.use_log_prefix |= self.use_log_prefix;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config.clone());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);

    let prefix = config.use_log_prefix.then(|| "TicTacToe".to_string());
    logger::init_logger(prefix, config.verbose);

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("config saved");
    }

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("session seed {}", rng.seed());

    let defaults = GameSettings {
        mode: config.mode,
        human: config.human_side,
        difficulty: config.difficulty,
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), defaults, !args.no_prompt, rng);
    session.run()?;

    Ok(())
}
