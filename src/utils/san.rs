//! Standard Algebraic Notation tokens.
//!
//! Parsing reads a token from its end: check suffix, castle pattern,
//! promotion, destination, capture marker, then the optional source
//! rank, source file and piece letter. Resolution finds the one source
//! square that makes the token a legal move in a given position.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::is_move_legal;
use crate::utils::algebraic::{file_from_char, rank_from_char};

/// Where a SAN token sends the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanTarget {
    Castle(CastleSide),
    Square {
        to: Square,
        source_file: Option<u8>,
        source_rank: Option<u8>,
        promotion: Option<PieceKind>,
    },
}

/// A decoded SAN token, not yet tied to a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanMove {
    pub piece: PieceKind,
    pub target: SanTarget,
    pub is_capture: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
}

/// Decodes one SAN token. `!` and `?` suffixes are ignored; a `#` suffix
/// marks both check and checkmate.
pub fn parse_san(token: &str) -> Option<SanMove> {
    let mut body = token.trim_end_matches(&['!', '?'][..]);

    let mut is_check = false;
    let mut is_checkmate = false;
    if let Some(rest) = body.strip_suffix('#') {
        body = rest;
        is_check = true;
        is_checkmate = true;
    } else if let Some(rest) = body.strip_suffix('+') {
        body = rest;
        is_check = true;
    }

    let castle = match body {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    };
    if let Some(side) = castle {
        return Some(SanMove {
            piece: PieceKind::King,
            target: SanTarget::Castle(side),
            is_capture: false,
            is_check,
            is_checkmate,
        });
    }

    let mut chars: Vec<char> = body.chars().collect();

    let mut promotion = None;
    if chars.len() >= 2 && chars[chars.len() - 2] == '=' {
        let kind = PieceKind::from_san_char(chars[chars.len() - 1])
            .filter(|kind| kind.is_promotion_target())?;
        promotion = Some(kind);
        chars.truncate(chars.len() - 2);
    }

    let to_rank = rank_from_char(chars.pop()?)?;
    let to_file = file_from_char(chars.pop()?)?;
    let to = Square::new(to_file, to_rank)?;

    let is_capture = chars.last() == Some(&'x');
    if is_capture {
        chars.pop();
    }

    let source_rank = chars.last().copied().and_then(rank_from_char);
    if source_rank.is_some() {
        chars.pop();
    }
    let source_file = chars.last().copied().and_then(file_from_char);
    if source_file.is_some() {
        chars.pop();
    }

    let piece = match chars.as_slice() {
        [] => PieceKind::Pawn,
        [letter] => PieceKind::from_san_char(*letter)?,
        _ => return None,
    };

    Some(SanMove {
        piece,
        target: SanTarget::Square {
            to,
            source_file,
            source_rank,
            promotion,
        },
        is_capture,
        is_check,
        is_checkmate,
    })
}

/// The legal move `san` denotes for the side to move, if any.
///
/// Without source hints the board is scanned file by file, each file from
/// rank 1 upwards, and the first piece of the right kind with a legal move
/// to the destination wins.
pub fn resolve_san(position: &Position, san: &SanMove) -> Option<Move> {
    let color = position.side_to_move();

    let resolved = match san.target {
        SanTarget::Castle(side) => {
            let mv = Move::new(CastleSide::king_home(color), side.king_target(color));
            let is_king = position.at(mv.from) == Some(Piece::new(PieceKind::King, color));
            (is_king && is_move_legal(position, mv)).then_some(mv)
        }
        SanTarget::Square {
            to,
            source_file,
            source_rank,
            promotion,
        } => {
            let wanted = Piece::new(san.piece, color);
            let files = source_file.map_or(0..8, |file| file..file + 1);
            files
                .flat_map(|file| {
                    let ranks = source_rank.map_or(0..8, |rank| rank..rank + 1);
                    ranks.filter_map(move |rank| Square::new(file, rank))
                })
                .filter(|&from| position.at(from) == Some(wanted))
                .map(|from| Move {
                    from,
                    to,
                    promotion,
                })
                .find(|&mv| is_move_legal(position, mv))
        }
    };

    if resolved.is_none() {
        debug!(?san, "SAN token does not resolve to a legal move");
    }
    resolved
}
