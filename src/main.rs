//! Renju: engine, GUI and headless self-play.
//!
//! ## Usage
//!
//! - `renju` - Open the GUI, human (Black) against the computer
//! - `renju gui --mode pvp` - Hotseat game in the GUI
//! - `renju selfplay --size 15` - Computer against itself, printed to stdout
//!
//! Board size, restricted color and computer delay can also be set with
//! `RENJU_BOARD_SIZE`, `RENJU_RESTRICTED` and `RENJU_AI_DELAY_MS`.

use std::time::Duration;

use anyhow::{anyhow, Context as _};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use renju::config::parse_color;
use renju::ui::RenjuApp;
use renju::{Color, Game, GameConfig, GameMode, GameStatus};

/// Renju with forbidden moves for one color
#[derive(Parser)]
#[command(name = "renju")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct BoardArgs {
    /// Lines per side, 5 to 19
    #[arg(long, global = true)]
    size: Option<usize>,

    /// Color bound by the forbidden-move rules
    #[arg(long, global = true, value_parser = parse_color)]
    restricted: Option<Color>,

    /// Pause before each computer move, in milliseconds
    #[arg(long, global = true)]
    delay_ms: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in a window (default)
    Gui {
        #[arg(long, value_enum, default_value_t = ModeArg::Pve)]
        mode: ModeArg,

        /// Human's color in PvE
        #[arg(long, value_parser = parse_color, default_value = "black")]
        human: Color,
    },
    /// Let the computer play both colors and print the result
    Selfplay,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pve,
    Pvp,
    Ai,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pve => GameMode::PvE,
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Ai => GameMode::AiVsAi,
        }
    }
}

impl BoardArgs {
    /// Environment config with flags applied on top
    fn config(&self, default_delay: Option<Duration>) -> anyhow::Result<GameConfig> {
        let mut config = GameConfig::from_env();
        if let Some(delay) = default_delay {
            config.ai_delay = delay;
        }
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if let Some(restricted) = self.restricted {
            config.restricted = restricted;
        }
        if let Some(ms) = self.delay_ms {
            config.ai_delay = Duration::from_millis(ms);
        }
        config.validate().context("invalid configuration")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Selfplay) => {
            let config = GameConfig {
                mode: GameMode::AiVsAi,
                ..cli.board.config(Some(Duration::ZERO))?
            };
            run_selfplay(&config);
            Ok(())
        }
        Some(Commands::Gui { mode, human }) => {
            let config = GameConfig {
                mode: mode.into(),
                human_color: human,
                ..cli.board.config(None)?
            };
            run_gui(config)
        }
        None => run_gui(cli.board.config(None)?),
    }
}

fn run_gui(config: GameConfig) -> anyhow::Result<()> {
    info!(size = config.board_size, mode = ?config.mode, "opening window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(|cc| Ok(Box::new(RenjuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI failed: {e}"))
}

fn run_selfplay(config: &GameConfig) {
    let mut game = Game::from_config(config);
    let status = game.play_out();
    let session = game.session();

    print!("{}", session.board());
    let moves = session.board().stone_count();
    match status {
        GameStatus::Over { winner: Some(color) } => println!("{color} wins after {moves} moves"),
        GameStatus::Over { winner: None } => println!("Draw after {moves} moves"),
        GameStatus::InProgress => {
            let color = game.current_color();
            println!("{color} has no legal move after {moves} moves");
        }
    }
}
