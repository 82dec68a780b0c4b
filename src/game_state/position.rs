//! Core board state representation.
//!
//! `Position` is the central model for the rules engine: an 8x8 grid of
//! optional pieces stored as a flat array of 64 cells, plus side to move,
//! castling rights, en-passant target, and the two clocks. It is a plain
//! value; speculative work clones it and throws the clone away.

use std::fmt;

use crate::chess_errors::FenError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::{generate_fen, generate_fen_without_clocks};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) grid: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

/// Everything that identifies a position for repetition purposes: the
/// grid, castling rights, side to move, and en-passant target. Clocks are
/// excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    grid: [Option<Piece>; 64],
    castling_rights: CastlingRights,
    side_to_move: Color,
    en_passant_square: Option<Square>,
}

impl Position {
    pub(crate) fn new_empty() -> Self {
        Self {
            grid: [None; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn starting_position() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// FEN without the half-move clock and full-move number.
    #[inline]
    pub fn to_fen_without_clocks(&self) -> String {
        generate_fen_without_clocks(self)
    }

    pub fn signature(&self) -> PositionSignature {
        PositionSignature {
            grid: self.grid,
            castling_rights: self.castling_rights,
            side_to_move: self.side_to_move,
            en_passant_square: self.en_passant_square,
        }
    }

    #[inline]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.grid[square.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_right(&self, color: Color, side: CastleSide) -> bool {
        (self.castling_rights & castling_flag(color, side)) != 0
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_square
    }

    /// Occupied squares with their pieces, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.at(sq).map(|piece| (sq, piece)))
    }

    /// Same position with the other side to move. Used to ask whether the
    /// side to move is currently attacked.
    pub(crate) fn with_side_to_move(&self, color: Color) -> Self {
        let mut mirrored = self.clone();
        mirrored.side_to_move = color;
        mirrored
    }

    /// Applies `mv` without any legality check.
    ///
    /// The caller must already know the move is coherent; the legality
    /// engine is the only caller that passes unvalidated moves, and only to
    /// throwaway copies.
    ///
    /// # Panics
    ///
    /// Panics when no piece stands on `mv.from`.
    pub fn apply_unconditionally(&mut self, mv: Move) {
        let Some(piece) = self.at(mv.from) else {
            panic!("apply_unconditionally: no piece on source square {}", mv.from);
        };
        let captured = self.at(mv.to);

        self.side_to_move = self.side_to_move.opposite();

        if captured.is_some() || piece.kind == PieceKind::Pawn {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if piece.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.update_castling_rights(piece, mv, captured);

        if piece.kind == PieceKind::Pawn
            && self.en_passant_square == Some(mv.to)
            && mv.from.file() != mv.to.file()
        {
            // The captured pawn sits beside the mover, behind the target.
            if let Some(victim) = Square::new(mv.to.file(), mv.from.rank()) {
                self.grid[victim.index()] = None;
            }
        }

        self.en_passant_square =
            if piece.kind == PieceKind::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
                Square::new(mv.from.file(), (mv.from.rank() + mv.to.rank()) / 2)
            } else {
                None
            };

        self.grid[mv.from.index()] = None;
        self.grid[mv.to.index()] = Some(piece);

        if piece.kind == PieceKind::King && mv.from.file().abs_diff(mv.to.file()) >= 2 {
            let side = if mv.to.file() > mv.from.file() {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            let rook_from = side.rook_home(piece.color);
            let rook_to = side.rook_target(piece.color);
            self.grid[rook_to.index()] = self.grid[rook_from.index()].take();
        }

        if let Some(kind) = mv.promotion {
            self.grid[mv.to.index()] = Some(Piece::new(kind, piece.color));
        }
    }

    fn update_castling_rights(&mut self, piece: Piece, mv: Move, captured: Option<Piece>) {
        if piece.kind == PieceKind::King {
            for side in CastleSide::BOTH {
                self.castling_rights &= !castling_flag(piece.color, side);
            }
        }

        if piece.kind == PieceKind::Rook {
            for side in CastleSide::BOTH {
                if mv.from == side.rook_home(piece.color) {
                    self.castling_rights &= !castling_flag(piece.color, side);
                }
            }
        }

        if let Some(victim) = captured.filter(|p| p.kind == PieceKind::Rook) {
            for side in CastleSide::BOTH {
                if mv.to == side.rook_home(victim.color) {
                    self.castling_rights &= !castling_flag(victim.color, side);
                }
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}
