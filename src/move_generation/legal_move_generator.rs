//! Full legal move generation pipeline.
//!
//! Dispatches per-piece pseudo-legal generation, then filters out every
//! candidate that leaves the mover's king capturable by applying it to a
//! throwaway copy of the position. Pawn arrivals on the last rank are
//! expanded into one move per promotion kind.

use tracing::trace;

use crate::game_state::chess_rules::PROMOTION_PIECE_KINDS;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_capturable;
use crate::move_generation::legal_moves_bishop::bishop_destinations;
use crate::move_generation::legal_moves_king::king_destinations;
use crate::move_generation::legal_moves_knight::knight_destinations;
use crate::move_generation::legal_moves_pawn::pawn_destinations;
use crate::move_generation::legal_moves_queen::queen_destinations;
use crate::move_generation::legal_moves_rook::rook_destinations;

/// Appends the pseudo-legal destinations of whatever piece stands on `from`.
/// An empty square contributes nothing.
pub fn push_pseudo_legal_destinations(position: &Position, from: Square, out: &mut Vec<Square>) {
    let Some(piece) = position.at(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_destinations(position, from, piece.color, out),
        PieceKind::Knight => knight_destinations(position, from, piece.color, out),
        PieceKind::Bishop => bishop_destinations(position, from, piece.color, out),
        PieceKind::Rook => rook_destinations(position, from, piece.color, out),
        PieceKind::Queen => queen_destinations(position, from, piece.color, out),
        PieceKind::King => king_destinations(position, from, piece.color, out),
    }
}

/// Squares the piece on `from` could reach, ignoring self-check.
pub fn pseudo_legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);
    push_pseudo_legal_destinations(position, from, &mut out);
    out
}

/// Pseudo-legal destinations that do not leave the mover's king capturable.
///
/// Only pieces of the side to move have legal destinations.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    let mover = position.side_to_move();
    match position.at(from) {
        Some(piece) if piece.color == mover => {}
        _ => return Vec::new(),
    }

    let mut candidates = pseudo_legal_destinations(position, from);
    candidates.retain(|&to| {
        let mut scratch = position.clone();
        scratch.apply_unconditionally(Move::new(from, to));
        let keeps_king_safe = !is_king_capturable(&scratch);
        if !keeps_king_safe {
            trace!(%from, %to, "destination dropped: king left capturable");
        }
        keeps_king_safe
    });
    candidates
}

/// Every legal move for the side to move, in square index order.
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    let mover = position.side_to_move();
    let mut moves = Vec::with_capacity(64);

    for (from, piece) in position.pieces() {
        if piece.color != mover {
            continue;
        }
        for to in legal_destinations(position, from) {
            if piece.kind == PieceKind::Pawn && to.rank() == mover.promotion_rank() {
                moves.extend(
                    PROMOTION_PIECE_KINDS
                        .iter()
                        .map(|&kind| Move::with_promotion(from, to, kind)),
                );
            } else {
                moves.push(Move::new(from, to));
            }
        }
    }

    moves
}

/// Whether the side to move has at least one legal move. Stops at the
/// first one found.
pub fn has_legal_move(position: &Position) -> bool {
    let mover = position.side_to_move();
    position
        .pieces()
        .filter(|(_, piece)| piece.color == mover)
        .any(|(from, _)| !legal_destinations(position, from).is_empty())
}
