//! Coordinate move text (`e2e4`, `e7e8q`).
//!
//! Purely syntactic: no position is consulted, so a parsed move still has
//! to go through the legality engine before it means anything.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::LongAlgebraicError;
use crate::game_state::chess_types::{Move, PieceKind, Square};

impl FromStr for Move {
    type Err = LongAlgebraicError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
            return Err(LongAlgebraicError::WrongLength(text.to_owned()));
        }

        let from = text[0..2].parse::<Square>()?;
        let to = text[2..4].parse::<Square>()?;
        let promotion = match text[4..].chars().next() {
            Some(ch) => Some(char_to_promotion(ch)?),
            None => None,
        };

        Ok(Move { from, to, promotion })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

fn char_to_promotion(ch: char) -> Result<PieceKind, LongAlgebraicError> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(LongAlgebraicError::Promotion(ch)),
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::{LongAlgebraicError, SquareError};
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_and_print_simple_move() {
        let mv: Move = "e2e4".parse().expect("move should parse");
        assert_eq!(mv.from, "e2".parse().expect("square"));
        assert_eq!(mv.to, "e4".parse().expect("square"));
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parse_and_print_promotion() {
        let mv: Move = "a7a8Q".parse().expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn reject_malformed_moves() {
        assert!(matches!("e2".parse::<Move>(), Err(LongAlgebraicError::WrongLength(_))));
        assert!(matches!("e2e4qq".parse::<Move>(), Err(LongAlgebraicError::WrongLength(_))));
        assert_eq!(
            "e2e4k".parse::<Move>(),
            Err(LongAlgebraicError::Promotion('k'))
        );
        assert_eq!(
            "z2e4".parse::<Move>(),
            Err(LongAlgebraicError::Square(SquareError::InvalidFile('z')))
        );
    }
}
