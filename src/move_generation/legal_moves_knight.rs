use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_step_destinations;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn knight_destinations(position: &Position, from: Square, color: Color, out: &mut Vec<Square>) {
    push_step_destinations(position, from, color, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::knight_destinations;
    use crate::game_state::chess_types::*;

    #[test]
    fn corner_knight_has_two_jumps() {
        let position =
            Position::from_fen("4k3/8/8/8/8/8/8/N3K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        knight_destinations(&position, Square::A1, Color::White, &mut out);
        out.sort();
        assert_eq!(
            out,
            vec![
                "c2".parse::<Square>().expect("square"),
                "b3".parse::<Square>().expect("square")
            ]
        );
    }

    #[test]
    fn starting_knight_skips_friendly_squares() {
        let position = Position::starting_position();
        let mut out = Vec::new();
        knight_destinations(&position, Square::G1, Color::White, &mut out);
        out.sort();
        assert_eq!(
            out,
            vec![
                "f3".parse::<Square>().expect("square"),
                "h3".parse::<Square>().expect("square")
            ]
        );
    }
}
