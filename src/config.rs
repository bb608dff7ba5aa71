//! Game configuration.
//!
//! The command line is parsed into [`Cli`] and turned into a [`GameConfig`],
//! which holds everything needed to start a game against the computer.

use clap::Parser;

use crate::agent::ai::{SearchSettings, DEFAULT_DEPTH};
use crate::game_repr::{ChessGame, GameError, Side};

/// Play chess against a minimax opponent in the terminal.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "minimax_chess", version)]
pub struct Cli {
    /// Search depth of the computer player in plies (1-5)
    #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: u8,

    /// Use plain minimax instead of alpha-beta pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Run both algorithms on every move and report the node reduction
    #[arg(long)]
    pub compare: bool,

    /// Play the black pieces (the computer moves first)
    #[arg(long)]
    pub play_black: bool,

    /// Start from this FEN instead of the standard position
    #[arg(long)]
    pub fen: Option<String>,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Side played by the human
    pub human_side: Side,
    /// Search settings of the computer player
    pub settings: SearchSettings,
    /// Starting position, `None` for the standard one
    pub start_fen: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_side: Side::First,
            settings: SearchSettings::default(),
            start_fen: None,
        }
    }
}

impl GameConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, GameError> {
        let mut settings = SearchSettings::new(cli.depth, !cli.no_pruning)?;
        settings.compare_algorithms = cli.compare;

        if let Some(fen) = &cli.fen {
            // Reject a bad FEN up front rather than at game start
            ChessGame::from_fen(fen)?;
        }

        Ok(Self {
            human_side: if cli.play_black {
                Side::Second
            } else {
                Side::First
            },
            settings,
            start_fen: cli.fen.clone(),
        })
    }

    /// Side played by the computer.
    pub fn ai_side(&self) -> Side {
        self.human_side.opposite()
    }

    /// Fresh game at the configured starting position.
    pub fn new_game(&self) -> Result<ChessGame, GameError> {
        match &self.start_fen {
            Some(fen) => ChessGame::from_fen(fen),
            None => Ok(ChessGame::new()),
        }
    }
}
