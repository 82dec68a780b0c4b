//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position FEN, draw thresholds, and PGN layout defaults.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A position whose half-move clock reaches this value is drawn.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u32 = 50;

/// Occurrences of one position signature that force a draw.
pub const REPETITION_DRAW_COUNT: u32 = 3;

/// Plies written on one PGN movetext line before wrapping.
pub const DEFAULT_PLIES_PER_LINE: usize = 20;

/// Piece kinds a pawn may promote to, in generation order.
pub const PROMOTION_PIECE_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];
