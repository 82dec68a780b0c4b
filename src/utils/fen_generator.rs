use crate::game_state::chess_types::*;

/// Full six-field FEN of `position`.
pub fn generate_fen(position: &Position) -> String {
    format!(
        "{} {} {}",
        generate_fen_without_clocks(position),
        position.halfmove_clock(),
        position.fullmove_number()
    )
}

/// The first four FEN fields: placement, side, castling, en-passant.
pub fn generate_fen_without_clocks(position: &Position) -> String {
    let side_to_move = match position.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {}",
        generate_board_field(position),
        side_to_move,
        generate_castling_field(position.castling_rights()),
        generate_en_passant_field(position.en_passant_target())
    )
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let occupant = Square::new(file, rank).and_then(|sq| position.at(sq));
            if let Some(piece) = occupant {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if (rights & CASTLE_WHITE_KINGSIDE) != 0 {
        out.push('K');
    }
    if (rights & CASTLE_WHITE_QUEENSIDE) != 0 {
        out.push('Q');
    }
    if (rights & CASTLE_BLACK_KINGSIDE) != 0 {
        out.push('k');
    }
    if (rights & CASTLE_BLACK_QUEENSIDE) != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    match square {
        Some(square) => square.to_string(),
        None => "-".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_fen, generate_fen_without_clocks};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastleSide, Color, Position};

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = Position::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = Position::from_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = Position::from_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(&parsed);
        let reparsed = Position::from_fen(&generated).expect("generated FEN should parse");

        assert_eq!(generated, fen);
        assert_eq!(reparsed, parsed);
        assert_eq!(reparsed.side_to_move(), Color::Black);
        assert!(reparsed.castling_right(Color::Black, CastleSide::KingSide));
        assert!(reparsed.castling_right(Color::Black, CastleSide::QueenSide));
        assert!(!reparsed.castling_right(Color::White, CastleSide::KingSide));
        assert!(!reparsed.castling_right(Color::White, CastleSide::QueenSide));
        assert_eq!(reparsed.halfmove_clock(), 4);
        assert_eq!(reparsed.fullmove_number(), 6);
    }

    #[test]
    fn signature_drops_clock_fields() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 7 31";
        let parsed = Position::from_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen_without_clocks(&parsed), "4k3/8/8/3pP3/8/8/8/4K3 w - d6");
        assert_eq!(generate_fen(&parsed), fen);
    }
}
