//! Pawn destinations.
//!
//! Single and double pushes onto empty squares, and diagonal steps onto an
//! enemy piece or the en-passant target. Promotion is not decided here;
//! callers expand or validate last-rank arrivals.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_enemy;

pub fn pawn_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    let forward = color.pawn_direction();

    if let Some(one) = from.offset(0, forward) {
        if position.at(one).is_none() {
            out.push(one);

            if from.rank() == color.pawn_rank() {
                if let Some(two) = one.offset(0, forward) {
                    if position.at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        let Some(to) = from.offset(file_delta, forward) else {
            continue;
        };
        if is_enemy(position, to, color) || is_en_passant_target_for(position, to, color) {
            out.push(to);
        }
    }
}

/// The en-passant target is only capturable by the side whose opponent
/// just skipped over it.
fn is_en_passant_target_for(position: &Position, square: Square, color: Color) -> bool {
    if position.en_passant_target() != Some(square) {
        return false;
    }
    let opponent = color.opposite();
    let skipped_rank = opponent.pawn_rank() as i8 + opponent.pawn_direction();
    square.rank() as i8 == skipped_rank
}
