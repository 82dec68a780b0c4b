//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth and tallies the leaves, with
//! per-kind breakdowns for the moves that reach them. Used to validate move
//! generation against published reference counts.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_legal_move};
use crate::move_generation::legal_move_shared::{castle_side_of, is_capture};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf count of the legal move tree rooted at `position`.
pub fn perft(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| {
            let mut next = position.clone();
            next.apply_unconditionally(mv);
            perft(&next, depth - 1)
        })
        .sum()
}

/// Like `perft`, with capture, castle, promotion, check and mate tallies for
/// the moves that arrive at each leaf.
pub fn perft_counts(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(position) {
        let mut next = position.clone();
        next.apply_unconditionally(mv);

        if depth == 1 {
            total.merge(classify_leaf(position, mv, &next));
        } else {
            total.merge(perft_counts(&next, depth - 1));
        }
    }
    total
}

fn classify_leaf(before: &Position, mv: Move, after: &Position) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };

    if is_capture(before, mv) {
        counts.captures += 1;
        if before.at(mv.to).is_none() {
            counts.en_passant += 1;
        }
    }
    if castle_side_of(before, mv).is_some() {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }
    if is_in_check(after) {
        counts.checks += 1;
        if !has_legal_move(after) {
            counts.checkmates += 1;
        }
    }

    counts
}
