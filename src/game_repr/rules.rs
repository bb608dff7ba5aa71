//! The boundary between the search and whatever implements chess rules.
//!
//! The search only ever needs a handful of things from a position: the legal
//! moves in a stable order, a way to play and take back a move, the terminal
//! checks, and piece lookup for evaluation. [`Rules`] captures exactly that so
//! the search can run against the `chess` crate adapter in production and
//! against scripted game trees in tests.

use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

use super::piece::{Piece, Side, Square};

/// Move list returned by [`Rules::legal_moves`].
pub type MoveList<M> = SmallVec<[M; 64]>;

pub trait Rules {
    type Move: Copy + Eq + Debug;

    /// Legal moves from the current position. The order must be stable for a
    /// given position; move selection breaks ties by it.
    fn legal_moves(&self) -> MoveList<Self::Move>;

    /// Plays `mv` on the shared position.
    fn push(&mut self, mv: Self::Move);

    /// Takes back the most recent [`Rules::push`]. Calling this without a
    /// matching push is a contract violation and may panic.
    fn pop(&mut self);

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_stalemate() || self.is_insufficient_material()
    }

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn side_to_move(&self) -> Side;

    /// Plays `mv` and returns a guard that takes it back when dropped, so the
    /// position is restored on every exit path of the caller.
    fn apply(&mut self, mv: Self::Move) -> Applied<'_, Self>
    where
        Self: Sized,
    {
        self.push(mv);
        Applied { rules: self }
    }
}

/// A move played through [`Rules::apply`]. Derefs to the position with the
/// move on the board; dropping it pops the move.
pub struct Applied<'a, R: Rules> {
    rules: &'a mut R,
}

impl<R: Rules> Deref for Applied<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.rules
    }
}

impl<R: Rules> DerefMut for Applied<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.rules
    }
}

impl<R: Rules> Drop for Applied<'_, R> {
    fn drop(&mut self) {
        self.rules.pop();
    }
}
