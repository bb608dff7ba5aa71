// Piece-square tables for positional evaluation
// Values are in the same units as material (10 = one pawn)
// Literals are written from White's side: the first row is the eighth rank,
// the last row is the first rank. Black's tables are the same rows reversed.

use once_cell::sync::Lazy;

use crate::game_repr::{PieceKind, Side, Square};

pub type Table = [[f64; 8]; 8];

const PAWN_TABLE: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0],
    [1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 1.0, 1.0],
    [0.5, 0.5, 1.0, 2.5, 2.5, 1.0, 0.5, 0.5],
    [0.0, 0.0, 0.0, 2.0, 2.0, 0.0, 0.0, 0.0],
    [0.5, -0.5, -1.0, 0.0, 0.0, -1.0, -0.5, 0.5],
    [0.5, 1.0, 1.0, -2.0, -2.0, 1.0, 1.0, 0.5],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

const KNIGHT_TABLE: Table = [
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
    [-4.0, -2.0, 0.0, 0.5, 0.5, 0.0, -2.0, -4.0],
    [-3.0, 0.5, 1.0, 1.5, 1.5, 1.0, 0.5, -3.0],
    [-3.0, 0.0, 1.5, 2.0, 2.0, 1.5, 0.0, -3.0],
    [-3.0, 0.5, 1.5, 2.0, 2.0, 1.5, 0.5, -3.0],
    [-3.0, 0.0, 1.0, 1.5, 1.5, 1.0, 0.0, -3.0],
    [-4.0, -2.0, 0.0, 0.0, 0.0, 0.0, -2.0, -4.0],
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
];

const BISHOP_TABLE: Table = [
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
    [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
    [-1.0, 0.0, 0.5, 1.0, 1.0, 0.5, 0.0, -1.0],
    [-1.0, 0.5, 0.5, 1.0, 1.0, 0.5, 0.5, -1.0],
    [-1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, -1.0],
    [-1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -1.0],
    [-1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.5, -1.0],
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
];

const ROOK_TABLE: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [-0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5],
    [0.0, 0.0, 0.0, 0.5, 0.5, 0.0, 0.0, 0.0],
];

const QUEEN_TABLE: Table = [
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
    [-1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0],
    [-1.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -1.0],
    [-0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -0.5],
    [0.0, 0.0, 0.5, 0.5, 0.5, 0.5, 0.0, -0.5],
    [-1.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, -1.0],
    [-1.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0, -1.0],
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
];

const KING_TABLE: Table = [
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-2.0, -3.0, -3.0, -4.0, -4.0, -3.0, -3.0, -2.0],
    [-1.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0],
    [2.0, 2.0, 0.0, 0.0, 0.0, 0.0, 2.0, 2.0],
    [2.0, 3.0, 1.0, 0.0, 0.0, 1.0, 3.0, 2.0],
];

/// Both orientations of every table, indexed by `[side][kind]`.
pub struct PositionalTables {
    tables: [[Table; 6]; 2],
}

impl PositionalTables {
    fn build() -> Self {
        let first = [
            PAWN_TABLE,
            KNIGHT_TABLE,
            BISHOP_TABLE,
            ROOK_TABLE,
            QUEEN_TABLE,
            KING_TABLE,
        ];
        let second = first.map(mirror);
        Self {
            tables: [first, second],
        }
    }

    pub fn table(&self, kind: PieceKind, side: Side) -> &Table {
        &self.tables[side.index()][kind.index()]
    }

    /// Bonus for a `side` piece of `kind` standing on `square`.
    pub fn bonus(&self, kind: PieceKind, square: Square, side: Side) -> f64 {
        let row = 7 - square.rank() as usize;
        self.table(kind, side)[row][square.file() as usize]
    }
}

fn mirror(table: Table) -> Table {
    let mut mirrored = table;
    mirrored.reverse();
    mirrored
}

/// Built once on first use and shared read-only afterwards.
pub static POSITIONAL_TABLES: Lazy<PositionalTables> = Lazy::new(PositionalTables::build);

pub fn get_pst_value(kind: PieceKind, square: Square, side: Side) -> f64 {
    POSITIONAL_TABLES.bonus(kind, square, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).unwrap()
    }

    #[test]
    fn test_second_side_is_mirrored() {
        for kind in PieceKind::ALL {
            for square in Square::all() {
                let mirrored = sq(7 - square.rank(), square.file());
                assert_eq!(
                    get_pst_value(kind, square, Side::Second),
                    get_pst_value(kind, mirrored, Side::First),
                    "{:?} on {}",
                    kind,
                    square
                );
            }
        }
    }

    #[test]
    fn test_second_table_is_reversed_rows() {
        let tables = &*POSITIONAL_TABLES;
        for kind in PieceKind::ALL {
            let first = tables.table(kind, Side::First);
            let second = tables.table(kind, Side::Second);
            for row in 0..8 {
                assert_eq!(first[row], second[7 - row]);
            }
        }
    }

    #[test]
    fn test_pawn_prefers_advancement() {
        let white_pawn_rank2 = get_pst_value(PieceKind::Pawn, sq(1, 3), Side::First); // d2
        let white_pawn_rank7 = get_pst_value(PieceKind::Pawn, sq(6, 3), Side::First); // d7
        assert!(white_pawn_rank7 > white_pawn_rank2);
        assert_eq!(white_pawn_rank7, 5.0);
        assert_eq!(white_pawn_rank2, -2.0);
    }

    #[test]
    fn test_knight_prefers_center() {
        let knight_center = get_pst_value(PieceKind::Knight, sq(3, 3), Side::First); // d4
        let knight_edge = get_pst_value(PieceKind::Knight, sq(0, 0), Side::First); // a1
        assert!(knight_center > knight_edge);
    }

    #[test]
    fn test_king_prefers_castled_corner() {
        let king_g1 = get_pst_value(PieceKind::King, sq(0, 6), Side::First);
        let king_e4 = get_pst_value(PieceKind::King, sq(3, 4), Side::First);
        assert!(king_g1 > king_e4);

        let king_g8 = get_pst_value(PieceKind::King, sq(7, 6), Side::Second);
        assert_eq!(king_g1, king_g8);
    }
}
