//! A game: roster, annotated move history, current position, result, and
//! repetition bookkeeping.
//!
//! The game owns its position. The only way to change it is `apply_move`,
//! which runs the legality engine, annotates the move, counts the resulting
//! position signature, and settles the result once the game is over.

use std::collections::HashMap;

use tracing::debug;

use crate::chess_errors::{GameError, MoveError, PgnError};
use crate::game::annotated_move::AnnotatedMove;
use crate::game::roster::SevenTagRoster;
use crate::game_state::chess_rules::REPETITION_DRAW_COUNT;
use crate::game_state::chess_types::*;
use crate::game_state::position::PositionSignature;
use crate::move_generation::game_status::terminal_result;
use crate::move_generation::legal_move_apply::attempt_move;
use crate::utils::pgn::{parse_pgn, write_pgn, PgnWriteOptions};

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) roster: SevenTagRoster,
    pub(crate) moves: Vec<AnnotatedMove>,
    pub(crate) result: Option<GameResult>,
    pub(crate) position: Position,
    pub(crate) repetitions: HashMap<PositionSignature, u32>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty roster, no moves, starting position, no result.
    pub fn new() -> Self {
        let position = Position::starting_position();
        let mut repetitions = HashMap::new();
        repetitions.insert(position.signature(), 1);

        Self {
            roster: SevenTagRoster::default(),
            moves: Vec::new(),
            result: None,
            position,
            repetitions,
        }
    }

    pub fn from_pgn(pgn: &str) -> Result<Self, PgnError> {
        parse_pgn(pgn)
    }

    pub fn to_pgn(&self) -> String {
        write_pgn(self, &PgnWriteOptions::default())
    }

    pub fn to_pgn_with(&self, options: &PgnWriteOptions) -> String {
        write_pgn(self, options)
    }

    /// Plays `mv` on the live game.
    ///
    /// Fails with `GameOver` once a result is recorded and with
    /// `IllegalMove` when the legality engine refuses the move; the game is
    /// unchanged on failure. A position signature seen for the third time
    /// draws the game even when the board itself is not terminal.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if let Some(result) = self.result {
            return Err(GameError::GameOver(result));
        }

        let mut next = self.position.clone();
        attempt_move(&mut next, mv)?;
        let entry = AnnotatedMove::from_positions(&self.position, mv, &next)
            .ok_or(MoveError::NotPseudoLegal)?;

        self.position = next;
        self.moves.push(entry);

        let seen = self.record_position();
        let result = if seen >= REPETITION_DRAW_COUNT {
            debug!(seen, "threefold repetition");
            Some(GameResult::Draw)
        } else {
            terminal_result(&self.position)
        };

        if let Some(result) = result {
            debug!(result = result.pgn_token(), plies = self.moves.len(), "game over");
            self.result = Some(result);
            self.roster.result = Some(result);
        }
        Ok(())
    }

    /// Bumps the occurrence count of the current signature and returns it.
    pub(crate) fn record_position(&mut self) -> u32 {
        let seen = self.repetitions.entry(self.position.signature()).or_insert(0);
        *seen += 1;
        *seen
    }

    /// History entry by 1-based ply index: ply 1 is White's first move.
    pub fn move_at_ply(&self, ply: usize) -> Option<&AnnotatedMove> {
        ply.checked_sub(1).and_then(|index| self.moves.get(index))
    }

    /// History entry by 1-based move number and the side that moved.
    pub fn move_at(&self, move_number: usize, color: Color) -> Option<&AnnotatedMove> {
        let first_ply = move_number.checked_sub(1)?.checked_mul(2)?;
        let ply = match color {
            Color::White => first_ply + 1,
            Color::Black => first_ply + 2,
        };
        self.move_at_ply(ply)
    }

    #[inline]
    pub fn roster(&self) -> &SevenTagRoster {
        &self.roster
    }

    #[inline]
    pub fn roster_mut(&mut self) -> &mut SevenTagRoster {
        &mut self.roster
    }

    #[inline]
    pub fn moves(&self) -> &[AnnotatedMove] {
        &self.moves
    }

    #[inline]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// How many times the current position has occurred, the starting
    /// position included.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.position.signature())
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::chess_errors::{GameError, MoveError};
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    fn mv(text: &str) -> Move {
        text.parse().expect("coordinate move should parse")
    }

    #[test]
    fn new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.position().to_fen(), STARTING_POSITION_FEN);
        assert!(game.moves().is_empty());
        assert_eq!(game.result(), None);
        assert_eq!(game.repetition_count(), 1);
        assert!(game.move_at_ply(1).is_none());
        assert!(game.move_at_ply(0).is_none());
    }

    #[test]
    fn apply_move_records_history() {
        let mut game = Game::new();
        for text in ["e2e4", "e7e5", "g1f3"] {
            game.apply_move(mv(text)).expect("opening move should be legal");
        }

        assert_eq!(game.moves().len(), 3);
        assert_eq!(game.move_at(1, Color::White).map(|m| m.mv), Some(mv("e2e4")));
        assert_eq!(game.move_at(1, Color::Black).map(|m| m.mv), Some(mv("e7e5")));
        assert_eq!(game.move_at(2, Color::White).map(|m| m.san()), Some("Nf3".to_owned()));
        assert_eq!(game.move_at_ply(2), game.move_at(1, Color::Black));
        assert!(game.move_at(2, Color::Black).is_none());
        assert!(game.move_at(0, Color::White).is_none());
    }

    #[test]
    fn illegal_move_leaves_game_unchanged() {
        let mut game = Game::new();
        let before = game.position().clone();
        assert_eq!(
            game.apply_move(mv("e2e5")),
            Err(GameError::IllegalMove(MoveError::NotPseudoLegal))
        );
        assert_eq!(game.position(), &before);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn threefold_repetition_ends_the_game() {
        let mut game = Game::new();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        for text in shuffle.iter().chain(shuffle[..3].iter()) {
            game.apply_move(mv(text)).expect("knight shuffle should be legal");
            assert_eq!(game.result(), None);
        }
        game.apply_move(mv("f6g8")).expect("final shuffle should be legal");

        assert_eq!(game.moves().len(), 8);
        assert_eq!(game.repetition_count(), 3);
        assert_eq!(game.result(), Some(GameResult::Draw));
        assert_eq!(game.roster().result, Some(GameResult::Draw));
        assert_eq!(
            game.apply_move(mv("g1f3")),
            Err(GameError::GameOver(GameResult::Draw))
        );
    }

    #[test]
    fn checkmate_ends_the_game() {
        let mut game = Game::new();
        for text in ["f2f3", "e7e5", "g2g4"] {
            game.apply_move(mv(text)).expect("move should be legal");
        }
        game.apply_move(mv("d8h4")).expect("mate should be legal");

        assert_eq!(game.result(), Some(GameResult::BlackWins));
        let last = game.move_at(2, Color::Black).expect("mate is recorded");
        assert!(last.is_check && last.is_checkmate);
        assert_eq!(last.san(), "Qh4#");
        assert!(matches!(
            game.apply_move(mv("e2e4")),
            Err(GameError::GameOver(GameResult::BlackWins))
        ));
    }
}
