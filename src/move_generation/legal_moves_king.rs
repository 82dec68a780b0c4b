use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_destinations;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn king_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_step_destinations(position, from, color, &KING_OFFSETS, out);

    if from != CastleSide::king_home(color) {
        return;
    }
    for side in CastleSide::BOTH {
        if castling_allowed(position, color, side) {
            out.push(side.king_target(color));
        }
    }
}

/// Right still held and every square between king and rook empty.
///
/// Attacked squares are not consulted: the king may castle out of, through,
/// or into check as far as this predicate is concerned. Landing in check is
/// still caught by the self-check filter.
pub fn castling_allowed(position: &Position, color: Color, side: CastleSide) -> bool {
    if !position.castling_right(color, side) {
        return false;
    }
    let rank = color.home_rank();
    side.vacant_files().iter().all(|&file| {
        Square::new(file, rank).is_some_and(|square| position.at(square).is_none())
    })
}

#[cfg(test)]
mod tests {
    use super::{castling_allowed, king_destinations};
    use crate::game_state::chess_types::*;

    #[test]
    fn starting_king_is_boxed_in() {
        let position = Position::starting_position();
        let mut out = Vec::new();
        king_destinations(&position, Square::E1, Color::White, &mut out);
        assert!(out.is_empty());
        assert!(!castling_allowed(&position, Color::White, CastleSide::KingSide));
    }

    #[test]
    fn castle_targets_follow_rights_and_vacancy() {
        let position = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQk - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        king_destinations(&position, Square::E1, Color::White, &mut out);

        assert!(out.contains(&Square::G1));
        assert!(!out.contains(&Square::C1));
        assert!(castling_allowed(&position, Color::Black, CastleSide::KingSide));
        assert!(!castling_allowed(&position, Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn castling_ignores_attacked_squares() {
        // Black rook on f8 attacks f1, which the king passes over.
        let position = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("FEN should parse");
        assert!(castling_allowed(&position, Color::White, CastleSide::KingSide));
    }
}
