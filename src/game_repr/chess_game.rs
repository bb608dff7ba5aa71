//! Game state backed by the `chess` crate.
//!
//! `chess::Board` is an immutable copy-make board, so push/pop is an undo
//! stack of previous boards. On top of the board this tracks what the crate
//! leaves out: the halfmove clock and the position history needed for the
//! seventy-five-move and fivefold-repetition draws. The board status is
//! computed once per position, since each call runs move generation.

use std::fmt;
use std::str::FromStr;

use chess::{
    BitBoard, Board, BoardStatus, ChessMove, Color, MoveGen, Piece as ChessPiece,
    Square as ChessSquare, ALL_SQUARES, EMPTY,
};

use super::error::GameError;
use super::piece::{Piece, PieceKind, Side, Square};
use super::rules::{MoveList, Rules};

const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// Halfmoves without a capture or pawn move that end the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

const FIVEFOLD_REPETITION: usize = 5;

#[derive(Clone)]
struct UndoInfo {
    board: Board,
    status: BoardStatus,
    halfmove_clock: u32,
}

#[derive(Clone)]
pub struct ChessGame {
    board: Board,
    status: BoardStatus,
    halfmove_clock: u32,
    /// Position the game started from, restored by `reset`
    start: (Board, u32),
    history: Vec<UndoInfo>,
    /// Hash of every position reached so far, current position last.
    hashes: Vec<u64>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard starting position.
    pub fn new() -> Self {
        Self::from_board(Board::default(), 0)
    }

    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let board = Board::from_str(fen).map_err(|_| GameError::InvalidFen {
            fen: fen.to_string(),
        })?;
        // The crate ignores the move counters, so read the halfmove clock here.
        let halfmove_clock: u32 = match fen.split_whitespace().nth(4) {
            None => 0,
            Some(field) => field.parse().map_err(|_| GameError::InvalidFen {
                fen: fen.to_string(),
            })?,
        };
        Ok(Self::from_board(board, halfmove_clock))
    }

    fn from_board(board: Board, halfmove_clock: u32) -> Self {
        Self {
            board,
            status: board.status(),
            halfmove_clock,
            start: (board, halfmove_clock),
            history: Vec::new(),
            hashes: vec![board.get_hash()],
        }
    }

    /// Takes back every move, returning to the starting position.
    pub fn reset(&mut self) {
        let (board, halfmove_clock) = self.start;
        *self = Self::from_board(board, halfmove_clock);
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    /// Number of moves currently pushed.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Parses UCI move text (`e2e4`, `e7e8q`) and checks it is legal here.
    /// A promotion typed without a piece letter promotes to a queen.
    pub fn parse_move(&self, text: &str) -> Result<ChessMove, GameError> {
        let text = text.trim();
        let invalid = || GameError::InvalidMoveText {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(invalid());
        }

        let source = ChessSquare::from_str(&text[0..2]).map_err(|_| invalid())?;
        let dest = ChessSquare::from_str(&text[2..4]).map_err(|_| invalid())?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some('q') => Some(ChessPiece::Queen),
            Some('r') => Some(ChessPiece::Rook),
            Some('b') => Some(ChessPiece::Bishop),
            Some('n') => Some(ChessPiece::Knight),
            Some(_) => return Err(invalid()),
        };

        let mv = ChessMove::new(source, dest, promotion);
        if self.board.legal(mv) {
            return Ok(mv);
        }
        if promotion.is_none() {
            let queening = ChessMove::new(source, dest, Some(ChessPiece::Queen));
            if self.board.legal(queening) {
                return Ok(queening);
            }
        }
        Err(GameError::IllegalMove {
            text: text.to_string(),
        })
    }

    /// Human-readable description such as "Knight from g1 to f3" or
    /// "Queen from d1 to d7 captures Pawn", read from the current position.
    pub fn move_description(&self, mv: ChessMove) -> String {
        let source = mv.get_source();
        let dest = mv.get_dest();
        let mover = self
            .board
            .piece_on(source)
            .map_or("None", |piece| kind_of(piece).name());
        let mut text = format!("{} from {} to {}", mover, source, dest);
        if let Some(captured) = self.board.piece_on(dest) {
            text.push_str(&format!(" captures {}", kind_of(captured).name()));
        }
        text
    }

    pub fn is_seventyfive_moves(&self) -> bool {
        self.halfmove_clock >= SEVENTY_FIVE_MOVE_PLIES && !self.is_checkmate()
    }

    pub fn is_fivefold_repetition(&self) -> bool {
        let current = self.board.get_hash();
        self.hashes.iter().filter(|&&hash| hash == current).count() >= FIVEFOLD_REPETITION
    }

    fn has_insufficient_material(&self, color: Color) -> bool {
        let board = &self.board;
        let own = *board.color_combined(color);
        let pawns = *board.pieces(ChessPiece::Pawn);
        let knights = *board.pieces(ChessPiece::Knight);
        let bishops = *board.pieces(ChessPiece::Bishop);
        let heavy = pawns | *board.pieces(ChessPiece::Rook) | *board.pieces(ChessPiece::Queen);

        if own & heavy != EMPTY {
            return false;
        }
        if own & knights != EMPTY {
            // A lone knight mates only with help from the opponent's own
            // blockers; kings and queens cannot serve as those.
            let theirs = *board.color_combined(!color);
            let blockers =
                theirs & !*board.pieces(ChessPiece::King) & !*board.pieces(ChessPiece::Queen);
            return own.popcnt() <= 2 && blockers == EMPTY;
        }
        if own & bishops != EMPTY {
            let same_colour = bishops & DARK_SQUARES == EMPTY || bishops & !DARK_SQUARES == EMPTY;
            return same_colour && pawns == EMPTY && knights == EMPTY;
        }
        true
    }
}

impl Rules for ChessGame {
    type Move = ChessMove;

    fn legal_moves(&self) -> MoveList<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn push(&mut self, mv: ChessMove) {
        let pawn_move = self.board.piece_on(mv.get_source()) == Some(ChessPiece::Pawn);
        let capture = self.board.piece_on(mv.get_dest()).is_some();

        self.history.push(UndoInfo {
            board: self.board,
            status: self.status,
            halfmove_clock: self.halfmove_clock,
        });
        self.board = self.board.make_move_new(mv);
        self.status = self.board.status();
        self.halfmove_clock = if pawn_move || capture {
            0
        } else {
            self.halfmove_clock + 1
        };
        self.hashes.push(self.board.get_hash());
    }

    fn pop(&mut self) {
        let Some(undo) = self.history.pop() else {
            panic!("pop called without a matching push; position is corrupted");
        };
        self.hashes.pop();
        self.board = undo.board;
        self.status = undo.status;
        self.halfmove_clock = undo.halfmove_clock;
    }

    fn is_checkmate(&self) -> bool {
        self.status == BoardStatus::Checkmate
    }

    fn is_stalemate(&self) -> bool {
        self.status == BoardStatus::Stalemate
    }

    fn is_insufficient_material(&self) -> bool {
        self.has_insufficient_material(Color::White) && self.has_insufficient_material(Color::Black)
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        let square = ALL_SQUARES[square.index()];
        let kind = kind_of(self.board.piece_on(square)?);
        let side = side_of(self.board.color_on(square)?);
        Some(Piece::new(side, kind))
    }

    fn side_to_move(&self) -> Side {
        side_of(self.board.side_to_move())
    }
}

impl fmt::Display for ChessGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = Square::new(rank, file)
                    .and_then(|square| self.piece_at(square))
                    .map_or('.', |piece| piece.to_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

fn kind_of(piece: ChessPiece) -> PieceKind {
    match piece {
        ChessPiece::Pawn => PieceKind::Pawn,
        ChessPiece::Knight => PieceKind::Knight,
        ChessPiece::Bishop => PieceKind::Bishop,
        ChessPiece::Rook => PieceKind::Rook,
        ChessPiece::Queen => PieceKind::Queen,
        ChessPiece::King => PieceKind::King,
    }
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::First,
        Color::Black => Side::Second,
    }
}
