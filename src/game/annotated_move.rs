//! History entries of a game.
//!
//! An `AnnotatedMove` freezes what was true about a move when it was made:
//! which piece moved, whether it captured, checked or mated, whether it was
//! a castle, and which source coordinates SAN has to spell out.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::is_move_legal;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::move_generation::legal_move_shared::{castle_side_of, is_capture};
use crate::utils::algebraic::{file_char, rank_char};
use crate::utils::san::{SanMove, SanTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnnotatedMove {
    pub mv: Move,
    pub piece: Piece,
    pub is_capture: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_source_file_ambiguous: bool,
    pub is_source_rank_ambiguous: bool,
    pub castle: Option<CastleSide>,
}

impl AnnotatedMove {
    /// Annotates a move played live. `before` is the position the move was
    /// made from and `after` the one it produced.
    ///
    /// Returns `None` when `before` has no piece on the source square.
    pub fn from_positions(before: &Position, mv: Move, after: &Position) -> Option<Self> {
        let piece = before.at(mv.from)?;
        let is_capture = is_capture(before, mv);
        let is_check = is_in_check(after);
        let is_checkmate = is_check && !has_legal_move(after);
        let (file_ambiguous, rank_ambiguous) = source_ambiguity(before, mv, piece, is_capture);

        Some(Self {
            mv,
            piece,
            is_capture,
            is_check,
            is_checkmate,
            is_source_file_ambiguous: file_ambiguous,
            is_source_rank_ambiguous: rank_ambiguous,
            castle: castle_side_of(before, mv),
        })
    }

    /// Annotates a move read from a SAN token; the flags are the ones the
    /// token declared.
    pub(crate) fn from_san(san: &SanMove, mv: Move, color: Color) -> Self {
        let (castle, file_ambiguous, rank_ambiguous) = match san.target {
            SanTarget::Castle(side) => (Some(side), false, false),
            SanTarget::Square {
                source_file,
                source_rank,
                ..
            } => (None, source_file.is_some(), source_rank.is_some()),
        };

        Self {
            mv,
            piece: Piece::new(san.piece, color),
            is_capture: san.is_capture,
            is_check: san.is_check,
            is_checkmate: san.is_checkmate,
            is_source_file_ambiguous: file_ambiguous,
            is_source_rank_ambiguous: rank_ambiguous,
            castle,
        }
    }

    /// The SAN token for this move.
    pub fn san(&self) -> String {
        let mut out = String::with_capacity(8);

        if let Some(side) = self.castle {
            out.push_str(side.san());
        } else {
            if let Some(letter) = self.piece.kind.san_char() {
                out.push(letter);
            }
            if self.is_source_file_ambiguous {
                out.push(file_char(self.mv.from.file()));
            }
            if self.is_source_rank_ambiguous {
                out.push(rank_char(self.mv.from.rank()));
            }
            if self.is_capture {
                out.push('x');
            }
            out.push_str(&self.mv.to.to_string());
            if let Some(letter) = self.mv.promotion.and_then(PieceKind::san_char) {
                out.push('=');
                out.push(letter);
            }
        }

        if self.is_checkmate {
            out.push('#');
        } else if self.is_check {
            out.push('+');
        }
        out
    }
}

impl fmt::Display for AnnotatedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.san())
    }
}

/// Which source coordinates SAN needs to tell `mv` apart from moves of
/// rival pieces of the same kind to the same square. Pawn captures always
/// name their file.
fn source_ambiguity(before: &Position, mv: Move, piece: Piece, is_capture: bool) -> (bool, bool) {
    if piece.kind == PieceKind::Pawn {
        return (is_capture, false);
    }

    let rivals: Vec<Square> = before
        .pieces()
        .filter(|&(square, other)| square != mv.from && other == piece)
        .map(|(square, _)| square)
        .filter(|&square| {
            is_move_legal(
                before,
                Move {
                    from: square,
                    ..mv
                },
            )
        })
        .collect();

    if rivals.is_empty() {
        return (false, false);
    }
    if rivals.iter().all(|square| square.file() != mv.from.file()) {
        return (true, false);
    }
    if rivals.iter().all(|square| square.rank() != mv.from.rank()) {
        return (false, true);
    }
    (true, true)
}

#[cfg(test)]
mod tests {
    use super::AnnotatedMove;
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_apply::attempt_move;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    fn play(fen: &str, mv: Move) -> AnnotatedMove {
        let before = Position::from_fen(fen).expect("FEN should parse");
        let mut after = before.clone();
        attempt_move(&mut after, mv).expect("move should be legal");
        AnnotatedMove::from_positions(&before, mv, &after).expect("source square is occupied")
    }

    #[test]
    fn quiet_pawn_push() {
        let entry = play(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            Move::new(sq("e2"), sq("e4")),
        );
        assert_eq!(entry.piece, Piece::new(PieceKind::Pawn, Color::White));
        assert!(!entry.is_capture && !entry.is_check && entry.castle.is_none());
        assert_eq!(entry.san(), "e4");
    }

    #[test]
    fn pawn_capture_names_its_file() {
        let entry = play(
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2",
            Move::new(sq("e4"), sq("d5")),
        );
        assert!(entry.is_capture && entry.is_source_file_ambiguous);
        assert_eq!(entry.to_string(), "exd5");
    }

    #[test]
    fn rival_knights_are_disambiguated() {
        // Knights on a3 and e3 both reach c4; they share a rank, so the file separates them.
        let by_file = play("4k3/8/8/8/8/N3N3/8/4K3 w - - 0 1", Move::new(sq("a3"), sq("c4")));
        assert_eq!(by_file.san(), "Nac4");

        // Knights on a3 and a5 share a file, so the rank separates them.
        let by_rank = play("4k3/8/8/N7/8/N7/8/4K3 w - - 0 1", Move::new(sq("a3"), sq("c4")));
        assert_eq!(by_rank.san(), "N3c4");

        // Three queens: one shares the file, another the rank.
        let both = play(
            "6k1/8/8/8/Q2Q4/8/8/Q3K3 w - - 0 1",
            Move::new(sq("a4"), sq("d1")),
        );
        assert!(!both.is_capture);
        assert_eq!(both.san(), "Qa4d1");
    }

    #[test]
    fn castle_check_and_mate_suffixes() {
        let castle = play("4k3/8/8/8/8/8/8/4K2R w K - 0 1", Move::new(Square::E1, Square::G1));
        assert_eq!(castle.castle, Some(CastleSide::KingSide));
        assert_eq!(castle.san(), "O-O");

        let check = play("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", Move::new(Square::A1, Square::A8));
        assert!(check.is_check && !check.is_checkmate);
        assert_eq!(check.san(), "Ra8+");

        let mate = play("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", Move::new(Square::A1, Square::A8));
        assert!(mate.is_check && mate.is_checkmate);
        assert_eq!(mate.san(), "Ra8#");
    }

    #[test]
    fn promotion_suffix() {
        let entry = play(
            "8/4P3/8/8/8/8/k7/4K3 w - - 0 1",
            Move::with_promotion(sq("e7"), sq("e8"), PieceKind::Queen),
        );
        assert_eq!(entry.san(), "e8=Q");
    }
}
