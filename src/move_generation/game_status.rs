//! Terminal classification of a single position.

use tracing::debug;

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// `None` while the side to move has a legal move and the half-move clock is
/// below the fifty-move limit. Otherwise a draw by the fifty-move rule or
/// stalemate, or a win for the opponent of a checkmated side.
pub fn terminal_result(position: &Position) -> Option<GameResult> {
    if position.halfmove_clock() >= FIFTY_MOVE_HALFMOVE_LIMIT {
        debug!(halfmove_clock = position.halfmove_clock(), "fifty-move draw");
        return Some(GameResult::Draw);
    }
    if has_legal_move(position) {
        return None;
    }

    let stuck = position.side_to_move();
    if is_in_check(position) {
        debug!(loser = ?stuck, "checkmate");
        Some(GameResult::win_for(stuck.opposite()))
    } else {
        debug!(side = ?stuck, "stalemate");
        Some(GameResult::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::terminal_result;
    use crate::game_state::chess_types::*;

    fn result_of(fen: &str) -> Option<GameResult> {
        terminal_result(&Position::from_fen(fen).expect("FEN should parse"))
    }

    #[test]
    fn open_positions_have_no_result() {
        assert_eq!(terminal_result(&Position::starting_position()), None);
        assert_eq!(result_of("4k3/8/8/8/8/8/8/4K3 w - - 49 80"), None);
    }

    #[test]
    fn stalemate_is_a_draw() {
        assert_eq!(result_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1"), Some(GameResult::Draw));
    }

    #[test]
    fn checkmate_awards_the_opponent() {
        assert_eq!(
            result_of("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"),
            Some(GameResult::BlackWins)
        );
        assert_eq!(
            result_of("6k1/5ppp/8/8/8/8/8/R5K1 b - - 0 1"),
            None
        );
        assert_eq!(
            result_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1"),
            Some(GameResult::WhiteWins)
        );
    }

    #[test]
    fn fifty_move_clock_draws_regardless_of_mobility() {
        assert_eq!(
            result_of("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 50 40"),
            Some(GameResult::Draw)
        );
        assert_eq!(
            result_of("R5k1/5ppp/8/8/8/8/8/6K1 b - - 50 60"),
            Some(GameResult::Draw)
        );
    }
}
