//! Validated move application.
//!
//! `attempt_move` is the only mutating entry point that accepts untrusted
//! moves. It checks the move against the movement rules of the piece on the
//! source square, applies it to a copy, and commits the copy only when the
//! mover's king is not left capturable.

use tracing::trace;

use crate::chess_errors::MoveError;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_capturable;
use crate::move_generation::legal_move_generator::pseudo_legal_destinations;

/// Movement-rule check for `mv` against the piece actually on `mv.from`.
///
/// Requires a piece of the side to move on the source, a distinct
/// destination that is not friendly-occupied and matches the piece's
/// movement shape, and a promotion kind exactly when a pawn lands on its
/// last rank.
pub fn is_move_pseudo_legal(position: &Position, mv: Move) -> bool {
    let mover = position.side_to_move();
    let Some(piece) = position.at(mv.from) else {
        return false;
    };
    if piece.color != mover || mv.from == mv.to {
        return false;
    }
    if position.at(mv.to).is_some_and(|target| target.color == mover) {
        return false;
    }

    let lands_on_last_rank =
        piece.kind == PieceKind::Pawn && mv.to.rank() == mover.promotion_rank();
    match mv.promotion {
        Some(kind) if !lands_on_last_rank || !kind.is_promotion_target() => return false,
        None if lands_on_last_rank => return false,
        _ => {}
    }

    pseudo_legal_destinations(position, mv.from).contains(&mv.to)
}

/// Pseudo-legal and leaves the mover's king safe. Does not touch `position`.
pub fn is_move_legal(position: &Position, mv: Move) -> bool {
    if !is_move_pseudo_legal(position, mv) {
        return false;
    }
    let mut scratch = position.clone();
    scratch.apply_unconditionally(mv);
    !is_king_capturable(&scratch)
}

/// Applies `mv` when it is legal. On `Err` the position is unchanged.
pub fn attempt_move(position: &mut Position, mv: Move) -> Result<(), MoveError> {
    if !is_move_pseudo_legal(position, mv) {
        trace!(from = %mv.from, to = %mv.to, "move rejected: not pseudo-legal");
        return Err(MoveError::NotPseudoLegal);
    }

    let mut next = position.clone();
    next.apply_unconditionally(mv);
    if is_king_capturable(&next) {
        trace!(from = %mv.from, to = %mv.to, "move rejected: king left capturable");
        return Err(MoveError::LeavesKingCapturable);
    }

    *position = next;
    Ok(())
}
