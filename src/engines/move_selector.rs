//! Move-selection capability and a driver that plays a game with it.
//!
//! A selector is any `FnMut(&Position) -> Option<Move>`. Returning `None`
//! means the selector has nothing to offer; any returned move must be legal
//! in the given position.

use tracing::debug;

use crate::chess_errors::GameError;
use crate::game::game_record::Game;
use crate::game_state::chess_types::*;

/// Why `play_out` stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutEnd {
    Finished(GameResult),
    SelectorExhausted,
    PlyLimit,
}

/// Feeds `game` with moves from `select` until the game has a result, the
/// selector returns `None`, or `max_plies` further plies have been played.
///
/// A selector that proposes an illegal move is a bug in the selector; the
/// error is returned and the game keeps every move applied before it.
pub fn play_out<F>(game: &mut Game, mut select: F, max_plies: usize) -> Result<PlayOutEnd, GameError>
where
    F: FnMut(&Position) -> Option<Move>,
{
    for _ in 0..max_plies {
        if let Some(result) = game.result() {
            return Ok(PlayOutEnd::Finished(result));
        }
        let Some(mv) = select(game.position()) else {
            debug!(plies = game.moves().len(), "selector returned no move");
            return Ok(PlayOutEnd::SelectorExhausted);
        };
        game.apply_move(mv)?;
    }

    Ok(match game.result() {
        Some(result) => PlayOutEnd::Finished(result),
        None => PlayOutEnd::PlyLimit,
    })
}
