//! Bishop destinations.
//!
//! Diagonal rays from the source square, stopping at the first occupied
//! square and keeping it only when it holds an enemy piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{push_ray_destinations, DIAGONAL_DIRECTIONS};

pub fn bishop_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_ray_destinations(position, from, color, &DIAGONAL_DIRECTIONS, out);
}
