//! Chess against a depth-limited minimax opponent.
//!
//! - [`game_repr`]: the [`game_repr::Rules`] boundary and its `chess` crate adapter
//! - [`agent`]: evaluation, minimax / alpha-beta search and the computer player
//! - [`config`]: command line and game configuration

pub mod agent;
pub mod config;
pub mod game_repr;
