//! Crate root module declarations for the Plum chess rules library.
//!
//! Exposes the position model with its FEN codec, the legality engine, the
//! game record with SAN and PGN notation, and the move selectors used to
//! drive simulated play.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod game {
    pub mod annotated_move;
    pub mod game_record;
    pub mod roster;
}

pub mod engines {
    pub mod engine_random;
    pub mod move_selector;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod san;
}
