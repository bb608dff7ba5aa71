//! Player trait and game results.
//!
//! A player is anything that can be asked for a move in the current game.
//! The console front-end reads the human's moves itself and asks the
//! computer opponent through this trait.

use crate::game_repr::{ChessGame, ChessMove, Rules, Side};

/// Result of a completed chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated)
    WhiteWins,
    /// Black player won the game (White was checkmated)
    BlackWins,
    /// Stalemate, insufficient material, seventy-five moves or fivefold repetition
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::First => GameResult::WhiteWins,
            Side::Second => GameResult::BlackWins,
        }
    }

    /// Classify a finished game. Returns `None` while the game is still on.
    pub fn from_game(game: &ChessGame) -> Option<Self> {
        if game.is_checkmate() {
            return Some(Self::from_winner(game.side_to_move().opposite()));
        }
        game.is_game_over().then_some(GameResult::Draw)
    }

    /// Score in PGN notation
    pub fn score(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "White Wins!",
            GameResult::BlackWins => "Black Wins!",
            GameResult::Draw => "Draw",
        }
    }
}

/// Trait for entities that can provide chess moves.
pub trait Player {
    /// Request the next move for the side to move in `game`.
    ///
    /// `game` may be used as scratch space but must be handed back in the
    /// state it was received. Returns `None` when the player has no move.
    fn get_move(&mut self, game: &mut ChessGame) -> Option<ChessMove>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    fn name(&self) -> &str {
        "Player"
    }
}
