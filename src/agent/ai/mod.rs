// AI Agent - Minimax with optional Alpha-Beta Pruning
//
// This module implements the computer opponent: a fixed-depth minimax search
// over the legal moves supplied by a `Rules` implementation, scoring leaves
// with material plus piece-square tables.
//
// Key features:
// - Deterministic (same position and settings always give the same move)
// - Plain minimax and alpha-beta variants that return identical scores
// - Node counters for comparing the two variants
// - Immediate-mate short-circuit at the root

mod evaluation;
mod minimax;
mod minimax_player;
mod piece_square_tables;
mod search;


pub use evaluation::{evaluate, piece_value};
pub use minimax::{SearchStatistics, Searcher};
pub use minimax_player::{
    MinimaxPlayer, MoveReport, SearchSettings, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH,
};
pub use piece_square_tables::{get_pst_value, PositionalTables, Table, POSITIONAL_TABLES};
pub use search::{choose_move, SearchResult};
