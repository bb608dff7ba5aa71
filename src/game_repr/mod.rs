mod chess_game;
mod error;
mod piece;
mod rules;


pub use chess_game::*;
pub use error::*;
pub use piece::*;
pub use rules::*;

pub use chess::ChessMove;
