//! Errors used throughout the rules engine.
//!
//! Parsing failures (FEN, PGN, square and coordinate text) and rejected moves
//! are recoverable and returned as values; no caller ever receives a
//! partially built position or game. The one unrecoverable condition,
//! applying a move from an empty square, is a caller bug and panics inside
//! `Position::apply_unconditionally` instead of appearing here.

use thiserror::Error;

use crate::game_state::chess_types::GameResult;

/// Failure to read an algebraic square such as `e4`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square text must be two characters, got {0:?}")]
    WrongLength(String),
    #[error("invalid file character {0:?}")]
    InvalidFile(char),
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
}

/// Failure to decode a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must have 6 fields, found {0}")]
    FieldCount(usize),
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank:?} does not describe exactly 8 files")]
    RankWidth { rank: String },
    #[error("invalid piece character {0:?} in board layout")]
    PieceChar(char),
    #[error("invalid side-to-move field {0:?}")]
    SideToMove(String),
    #[error("invalid castling rights field {0:?}")]
    CastlingRights(String),
    #[error("invalid en-passant field: {0}")]
    EnPassant(#[from] SquareError),
    #[error("invalid half-move clock {0:?}")]
    HalfmoveClock(String),
    #[error("invalid full-move number {0:?}")]
    FullmoveNumber(String),
}

/// Why a move was refused by the legality engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("move does not follow the movement rules of the piece on its source square")]
    NotPseudoLegal,
    #[error("move would leave the mover's king capturable")]
    LeavesKingCapturable,
}

/// Why a live game refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over ({})", .0.pgn_token())]
    GameOver(GameResult),
    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}

/// Failure to read a PGN game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PgnError {
    #[error("malformed tag pair: {0}")]
    MalformedTag(String),
    #[error("malformed movetext at byte {offset}: {reason}")]
    MalformedMovetext { offset: usize, reason: String },
    #[error("SAN token {0:?} does not resolve to a legal move")]
    UnresolvedMove(String),
}

/// Failure to read a coordinate move such as `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LongAlgebraicError {
    #[error("coordinate move must be 4 or 5 characters, got {0:?}")]
    WrongLength(String),
    #[error(transparent)]
    Square(#[from] SquareError),
    #[error("invalid promotion character {0:?}")]
    Promotion(char),
}
