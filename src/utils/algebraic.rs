//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by the FEN, SAN, PGN, and coordinate-move components.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::SquareError;
use crate::game_state::chess_types::Square;

/// File letter of a 0-based file index (`0 -> 'a'`).
#[inline]
pub fn file_char(file: u8) -> char {
    char::from(b'a' + file)
}

/// Rank digit of a 0-based rank index (`0 -> '1'`).
#[inline]
pub fn rank_char(rank: u8) -> char {
    char::from(b'1' + rank)
}

#[inline]
pub fn file_from_char(ch: char) -> Option<u8> {
    ('a'..='h').contains(&ch).then(|| ch as u8 - b'a')
}

#[inline]
pub fn rank_from_char(ch: char) -> Option<u8> {
    ('1'..='8').contains(&ch).then(|| ch as u8 - b'1')
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::WrongLength(text.to_owned()));
        };

        let file = file_from_char(file).ok_or(SquareError::InvalidFile(file))?;
        let rank = rank_from_char(rank).ok_or(SquareError::InvalidRank(rank))?;
        Square::new(file, rank).ok_or(SquareError::WrongLength(text.to_owned()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", file_char(self.file()), rank_char(self.rank()))
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::SquareError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!("a1".parse::<Square>().expect("a1 should parse"), Square::A1);
        assert_eq!("h8".parse::<Square>().expect("h8 should parse"), Square::H8);
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::H8.to_string(), "h8");
        assert_eq!("e4".parse::<Square>().expect("e4 should parse").index(), 28);
    }

    #[test]
    fn rejects_malformed_squares() {
        assert_eq!("i1".parse::<Square>(), Err(SquareError::InvalidFile('i')));
        assert_eq!("a9".parse::<Square>(), Err(SquareError::InvalidRank('9')));
        assert!(matches!("a".parse::<Square>(), Err(SquareError::WrongLength(_))));
        assert!(matches!("a1b".parse::<Square>(), Err(SquareError::WrongLength(_))));
    }
}
