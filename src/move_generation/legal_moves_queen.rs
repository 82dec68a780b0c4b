//! Queen destinations: the union of rook and bishop rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{
    push_ray_destinations, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub fn queen_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_ray_destinations(position, from, color, &ORTHOGONAL_DIRECTIONS, out);
    push_ray_destinations(position, from, color, &DIAGONAL_DIRECTIONS, out);
}
