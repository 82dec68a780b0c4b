//! FEN-to-Position parser.
//!
//! Builds a fully-populated position from a Forsyth-Edwards Notation string,
//! including the piece grid, rights, en-passant target, and clocks. Any
//! structural violation rejects the whole string.

use tracing::debug;

use crate::chess_errors::FenError;
use crate::game_state::chess_types::*;

pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split(' ').collect();
    let &[board_part, side_part, castling_part, en_passant_part, halfmove_part, fullmove_part] =
        fields.as_slice()
    else {
        debug!(fields = fields.len(), "FEN rejected: wrong field count");
        return Err(FenError::FieldCount(fields.len()));
    };

    let mut position = Position::new_empty();

    position.grid = parse_board(board_part)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.castling_rights = parse_castling_rights(castling_part)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part)?;
    position.halfmove_clock = parse_counter(halfmove_part)
        .ok_or_else(|| FenError::HalfmoveClock(halfmove_part.to_owned()))?;
    position.fullmove_number = parse_counter(fullmove_part)
        .ok_or_else(|| FenError::FullmoveNumber(fullmove_part.to_owned()))?;

    Ok(position)
}

fn parse_board(board_part: &str) -> Result<[Option<Piece>; 64], FenError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        debug!(ranks = ranks.len(), "FEN rejected: wrong rank count");
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut grid = [None; 64];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;
        let overrun = || FenError::RankWidth {
            rank: (*rank_str).to_owned(),
        };

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    debug!(%ch, "FEN rejected: invalid empty-square count");
                    return Err(overrun());
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(overrun());
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                debug!(%ch, "FEN rejected: invalid piece character");
                FenError::PieceChar(ch)
            })?;

            let square = Square::new(file, board_rank).ok_or_else(overrun)?;
            grid[square.index()] = Some(piece);
            file += 1;
        }

        if file != 8 {
            debug!(rank = %rank_str, "FEN rejected: rank does not sum to 8 files");
            return Err(overrun());
        }
    }

    Ok(grid)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, FenError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::SideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, FenError> {
    if castling_part == "-" {
        return Ok(0);
    }
    if castling_part.is_empty() || castling_part.len() > 4 {
        return Err(FenError::CastlingRights(castling_part.to_owned()));
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        let flag = match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(FenError::CastlingRights(castling_part.to_owned())),
        };
        if rights & flag != 0 {
            debug!(%ch, "FEN rejected: repeated castling letter");
            return Err(FenError::CastlingRights(castling_part.to_owned()));
        }
        rights |= flag;
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, FenError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(en_passant_part.parse::<Square>()?))
}

fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::FenError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.en_passant_target(), None);
        for color in [Color::White, Color::Black] {
            for side in CastleSide::BOTH {
                assert!(position.castling_right(color, side));
            }
        }

        for file in 0..8 {
            let white_pawn = Square::new(file, 1).expect("on board");
            let black_pawn = Square::new(file, 6).expect("on board");
            assert_eq!(position.at(white_pawn), Some(Piece::new(PieceKind::Pawn, Color::White)));
            assert_eq!(position.at(black_pawn), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            for rank in 2..6 {
                assert_eq!(position.at(Square::new(file, rank).expect("on board")), None);
            }
        }

        assert_eq!(position.at(Square::A8), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(position.at(Square::E1), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(position.at(Square::D8), Some(Piece::new(PieceKind::Queen, Color::Black)));
    }

    #[test]
    fn parse_middlegame_fen() {
        let fen = "rn1qkbnr/ppp2ppp/3p4/4p3/3PP1b1/5N2/PPP1BPPP/RNBQK2R b KQkq - 3 4";
        let position = parse_fen(fen).expect("FEN should parse");

        let g4: Square = "g4".parse().expect("square");
        let h5: Square = "h5".parse().expect("square");
        assert_eq!(position.at(g4), Some(Piece::new(PieceKind::Bishop, Color::Black)));
        assert_eq!(position.at(h5), None);
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.halfmove_clock(), 3);
        assert_eq!(position.fullmove_number(), 4);
    }

    #[test]
    fn reject_structurally_broken_fens() {
        for fen in ["", "hello", "\n", "\twhat\n"] {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }

        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1"),
            Err(FenError::RankCount(7))
        );
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankWidth { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankWidth { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::RankWidth { .. })
        ));
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1"),
            Err(FenError::PieceChar('X'))
        );
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(FenError::SideToMove(_))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
            Err(FenError::CastlingRights(_))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1"),
            Err(FenError::EnPassant(_))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenError::HalfmoveClock(_))
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 -1"),
            Err(FenError::FullmoveNumber(_))
        ));
        assert_eq!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra"),
            Err(FenError::FieldCount(7))
        );
    }

    #[test]
    fn fields_are_separated_by_single_spaces() {
        let padded = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR  w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR\tw KQkq - 0 1",
            " rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ",
        ];
        for fen in padded {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }

    #[test]
    fn repeated_castling_letters_are_rejected() {
        for field in ["KK", "KQkk", "qq"] {
            let fen = format!("r3k2r/8/8/8/8/8/8/R3K2R w {field} - 0 1");
            assert_eq!(
                parse_fen(&fen),
                Err(FenError::CastlingRights(field.to_owned()))
            );
        }
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        assert!(position.castling_right(Color::White, CastleSide::KingSide));
        assert!(!position.castling_right(Color::White, CastleSide::QueenSide));
        assert!(position.castling_right(Color::Black, CastleSide::QueenSide));
    }
}
