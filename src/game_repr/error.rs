//! Error types for the game layer
//!
//! The search itself has no recoverable failures. Errors only arise where
//! text comes in from outside: FEN strings, typed moves and settings.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// FEN string could not be parsed into a position
    #[error("Invalid FEN: {fen}")]
    InvalidFen { fen: String },

    /// Move text is not in UCI form (e.g. `e2e4`, `e7e8q`)
    #[error("Invalid move text: {text:?} (expected UCI such as e2e4 or e7e8q)")]
    InvalidMoveText { text: String },

    /// Well-formed move that is not legal in the current position
    #[error("Illegal move: {text}")]
    IllegalMove { text: String },

    /// Search depth outside the supported range
    #[error("Search depth {depth} out of range (must be {min}-{max})")]
    DepthOutOfRange { depth: u8, min: u8, max: u8 },
}
