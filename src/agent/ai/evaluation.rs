// Position evaluation function
// Returns a score from the perspective of a fixed side (positive = good for it)

use crate::game_repr::{PieceKind, Rules, Side, Square};
use super::piece_square_tables::get_pst_value;

// Material values (10 = one pawn)
const PAWN_VALUE: f64 = 10.0;
const KNIGHT_VALUE: f64 = 30.0;
const BISHOP_VALUE: f64 = 30.0;
const ROOK_VALUE: f64 = 50.0;
const QUEEN_VALUE: f64 = 90.0;
// Kings are never captured; this only keeps a missing king from looking good
const KING_VALUE: f64 = 900.0;

/// Get material value for a piece kind
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Material plus piece-square score, summed over every piece on the board.
/// Own pieces count positively, the opponent's negatively. Each piece's
/// positional bonus comes from its own side's table.
fn evaluate_material_and_position<R: Rules>(pos: &R, perspective: Side) -> f64 {
    let mut score = 0.0;

    for square in Square::all() {
        let Some(piece) = pos.piece_at(square) else {
            continue;
        };

        let value = piece_value(piece.kind) + get_pst_value(piece.kind, square, piece.side);

        if piece.side == perspective {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}

/// Main evaluation function
///
/// Checkmate scores `-inf` when `perspective` is the side that has been
/// mated (it is to move) and `+inf` otherwise. Stalemate and insufficient
/// material score exactly `0.0`. Everything else is material plus position.
pub fn evaluate<R: Rules>(pos: &R, perspective: Side) -> f64 {
    if pos.is_checkmate() {
        return if pos.side_to_move() == perspective {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    if pos.is_stalemate() || pos.is_insufficient_material() {
        return 0.0;
    }

    evaluate_material_and_position(pos, perspective)
}
