//! Check detection by brute-force king capture.
//!
//! A king is "in check" when the opposing side, were it to move, could land
//! on the king's square. Every question about check in the crate reduces to
//! `is_king_capturable` on the position or on its side-mirrored copy.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::push_pseudo_legal_destinations;

/// True when the side to move could capture the opposing king right now.
pub fn is_king_capturable(position: &Position) -> bool {
    let mover = position.side_to_move();
    let mut destinations = Vec::with_capacity(32);

    for (from, piece) in position.pieces() {
        if piece.color != mover {
            continue;
        }
        destinations.clear();
        push_pseudo_legal_destinations(position, from, &mut destinations);

        let hits_king = destinations.iter().any(|&to| {
            position
                .at(to)
                .is_some_and(|target| target.kind == PieceKind::King && target.color != mover)
        });
        if hits_king {
            return true;
        }
    }

    false
}

/// True when the side to move is currently attacked.
#[inline]
pub fn is_in_check(position: &Position) -> bool {
    let opponent = position.side_to_move().opposite();
    is_king_capturable(&position.with_side_to_move(opponent))
}
