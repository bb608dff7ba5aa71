//! MinimaxPlayer - computer opponent driven by depth-limited minimax
//!
//! The player owns its [`SearchSettings`] (depth and whether alpha-beta
//! pruning is on) and delegates move selection to [`choose_move`]. After each
//! decision it logs the chosen move, the node count of the algorithm used,
//! the calculation time and, when both algorithms ran, how many nodes
//! pruning saved.
//!
//! # Examples
//!
//! ```
//! use minimax_chess::agent::ai::{MinimaxPlayer, SearchSettings};
//! use minimax_chess::agent::Player;
//! use minimax_chess::game_repr::ChessGame;
//!
//! let mut game = ChessGame::new();
//! let mut ai = MinimaxPlayer::new(SearchSettings::new(2, true).unwrap());
//! let mv = ai.get_move(&mut game);
//! assert!(mv.is_some());
//! ```

use std::time::{Duration, Instant};

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{ChessGame, ChessMove, GameError};
use super::minimax::SearchStatistics;
use super::search::choose_move;

/// Shallowest search the player accepts
pub const MIN_DEPTH: u8 = 1;
/// Deepest search the player accepts
pub const MAX_DEPTH: u8 = 5;
pub const DEFAULT_DEPTH: u8 = 3;

/// Search parameters of the computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    depth: u8,
    /// Alpha-beta pruning when true, plain minimax otherwise
    pub use_pruning: bool,
    /// Also run the other algorithm on each decision so the node counts of
    /// both can be compared. Roughly doubles the thinking time.
    pub compare_algorithms: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            use_pruning: true,
            compare_algorithms: false,
        }
    }
}

impl SearchSettings {
    pub fn new(depth: u8, use_pruning: bool) -> Result<Self, GameError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&depth) {
            return Err(GameError::DepthOutOfRange {
                depth,
                min: MIN_DEPTH,
                max: MAX_DEPTH,
            });
        }
        Ok(Self {
            depth,
            use_pruning,
            compare_algorithms: false,
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Returns false when already at [`MAX_DEPTH`].
    pub fn increase_depth(&mut self) -> bool {
        if self.depth < MAX_DEPTH {
            self.depth += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already at [`MIN_DEPTH`].
    pub fn decrease_depth(&mut self) -> bool {
        if self.depth > MIN_DEPTH {
            self.depth -= 1;
            true
        } else {
            false
        }
    }

    pub fn toggle_pruning(&mut self) {
        self.use_pruning = !self.use_pruning;
    }

    pub fn algorithm_name(&self) -> &'static str {
        if self.use_pruning {
            "Alpha-Beta Pruning"
        } else {
            "Standard Minimax"
        }
    }
}

/// What the last decision found and what it cost.
#[derive(Debug, Clone)]
pub struct MoveReport {
    pub best_move: Option<ChessMove>,
    /// "Knight from g1 to f3" style description of `best_move`
    pub description: Option<String>,
    pub stats: SearchStatistics,
    pub elapsed: Duration,
    pub used_pruning: bool,
}

/// AI Player that uses minimax, optionally with alpha-beta pruning
pub struct MinimaxPlayer {
    settings: SearchSettings,
    name: String,
    last_report: Option<MoveReport>,
}

impl MinimaxPlayer {
    pub fn new(settings: SearchSettings) -> Self {
        Self {
            settings,
            name: "AI (Minimax)".to_string(),
            last_report: None,
        }
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SearchSettings {
        &mut self.settings
    }

    pub fn last_report(&self) -> Option<&MoveReport> {
        self.last_report.as_ref()
    }

    fn decide(&self, game: &mut ChessGame) -> (Option<ChessMove>, SearchStatistics) {
        let depth = self.settings.depth;
        let use_pruning = self.settings.use_pruning;
        let result = choose_move(game, depth, use_pruning);

        if !self.settings.compare_algorithms {
            return (result.best_move, result.stats);
        }

        // Counters reset per decision, so take each one from its own run
        let other = choose_move(game, depth, !use_pruning);
        let (plain, pruned) = if use_pruning {
            (&other, &result)
        } else {
            (&result, &other)
        };
        let stats = SearchStatistics {
            minimax_nodes: plain.stats.minimax_nodes,
            alpha_beta_nodes: pruned.stats.alpha_beta_nodes,
        };
        (result.best_move, stats)
    }

    fn log_report(&self, report: &MoveReport) {
        match &report.description {
            Some(description) => log::info!("AI Move: {}", description),
            None => log::info!("AI found no move"),
        }
        if report.used_pruning {
            log::info!("Calculation: {} (Alpha-Beta)", report.stats.alpha_beta_nodes);
        } else {
            log::info!("Calculation: {} (Standard Minimax)", report.stats.minimax_nodes);
        }
        log::info!("Calculation time: {:.3} seconds", report.elapsed.as_secs_f64());
        if let Some(reduction) = report.stats.pruning_reduction() {
            log::info!("Comparison: Alpha-Beta reduces calculations by {:.2}%", reduction);
        }
    }
}

impl Player for MinimaxPlayer {
    /// Searches the current position and returns the best move found.
    ///
    /// Blocks for the whole search; depth 5 without pruning can take a
    /// long time in busy middlegames.
    fn get_move(&mut self, game: &mut ChessGame) -> Option<ChessMove> {
        let start = Instant::now();
        let (best_move, stats) = self.decide(game);
        let elapsed = start.elapsed();

        let report = MoveReport {
            best_move,
            description: best_move.map(|mv| game.move_description(mv)),
            stats,
            elapsed,
            used_pruning: self.settings.use_pruning,
        };
        self.log_report(&report);
        self.last_report = Some(report);

        best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::info!("[{}] game over: {} ({})", self.name, result.headline(), result.score());
    }

    fn name(&self) -> &str {
        &self.name
    }
}
