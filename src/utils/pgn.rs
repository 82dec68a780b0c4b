//! PGN read/write for single games.
//!
//! Reading is two phases: the `[Key "Value"]` tag block, then movetext made
//! of numbered SAN pairs. Comments (`{...}`, `;...`), NAGs (`$n`) and
//! variations (`(...)`) are skipped. Every SAN token is resolved against
//! the running position and must be legal, or the whole parse fails.
//!
//! Writing emits the seven roster tags, a blank line, the numbered SAN
//! movetext wrapped every `plies_per_line` plies, and the result token.

use tracing::debug;

use crate::chess_errors::PgnError;
use crate::game::annotated_move::AnnotatedMove;
use crate::game::game_record::Game;
use crate::game::roster::SevenTagRoster;
use crate::game_state::chess_rules::{DEFAULT_PLIES_PER_LINE, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::terminal_result;
use crate::move_generation::legal_move_apply::attempt_move;
use crate::utils::san::{parse_san, resolve_san};

/// Layout knobs for PGN output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PgnWriteOptions {
    /// Plies per movetext line; 0 keeps all movetext on one line.
    pub plies_per_line: usize,
}

impl Default for PgnWriteOptions {
    fn default() -> Self {
        Self {
            plies_per_line: DEFAULT_PLIES_PER_LINE,
        }
    }
}

pub fn write_pgn(game: &Game, options: &PgnWriteOptions) -> String {
    let mut out = String::new();
    let result = game.result().or(game.roster().result);

    let mut roster = game.roster().clone();
    roster.result = result;
    for (key, value) in roster.tags() {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let moves = game.moves();
    for (index, entry) in moves.iter().enumerate() {
        if index % 2 == 0 {
            out.push_str(&format!("{}. ", index / 2 + 1));
        }
        out.push_str(&entry.san());

        if index + 1 < moves.len() {
            let wraps = options.plies_per_line > 0
                && index % options.plies_per_line == options.plies_per_line - 1;
            out.push(if wraps { '\n' } else { ' ' });
        }
    }

    if !moves.is_empty() {
        out.push(' ');
    }
    out.push_str(result.map_or("*", GameResult::pgn_token));
    out.push('\n');
    out
}

pub fn parse_pgn(pgn: &str) -> Result<Game, PgnError> {
    let mut cursor = Cursor::new(pgn);
    let roster = parse_roster(&mut cursor)?;

    let mut game = Game::new();
    game.roster = roster;

    let mut result_token = None;
    'movetext: loop {
        cursor.skip_trivia()?;
        if cursor.is_at_end() {
            break;
        }
        if let Some(token) = cursor.take_result_token() {
            result_token = Some(token);
            break;
        }

        cursor.take_move_number()?;

        for side in [Color::White, Color::Black] {
            cursor.skip_trivia()?;
            if side == Color::Black {
                if cursor.is_at_end() {
                    break 'movetext;
                }
                if let Some(token) = cursor.take_result_token() {
                    result_token = Some(token);
                    break 'movetext;
                }
                if cursor.take_continuation_number() {
                    cursor.skip_trivia()?;
                }
            }

            let offset = cursor.offset;
            let token = cursor.take_san_token();
            if token.is_empty() {
                return Err(cursor.error_at(offset, "expected a SAN move"));
            }
            apply_san(&mut game, token, offset)?;
        }
    }

    let declared = match result_token {
        Some(token) => GameResult::from_pgn_token(token),
        None => game
            .moves
            .last()
            .filter(|entry| entry.is_checkmate)
            .map(|entry| GameResult::win_for(entry.piece.color)),
    };
    let result = declared.or_else(|| adjudicate(&game));
    if let Some(result) = result {
        game.result = Some(result);
        game.roster.result = Some(result);
    }

    debug!(plies = game.moves.len(), ?result, "PGN parsed");
    Ok(game)
}

/// Result the final position forces on its own: threefold repetition, then
/// the board's terminal state.
fn adjudicate(game: &Game) -> Option<GameResult> {
    if game.repetition_count() >= REPETITION_DRAW_COUNT {
        return Some(GameResult::Draw);
    }
    terminal_result(&game.position)
}

fn apply_san(game: &mut Game, token: &str, offset: usize) -> Result<(), PgnError> {
    let Some(san) = parse_san(token) else {
        debug!(token, offset, "unreadable SAN token");
        return Err(PgnError::MalformedMovetext {
            offset,
            reason: format!("unreadable SAN token {token:?}"),
        });
    };
    let mover = game.position.side_to_move();
    let mv = resolve_san(&game.position, &san)
        .ok_or_else(|| PgnError::UnresolvedMove(token.to_owned()))?;
    attempt_move(&mut game.position, mv).map_err(|_| PgnError::UnresolvedMove(token.to_owned()))?;

    game.moves.push(AnnotatedMove::from_san(&san, mv, mover));
    game.record_position();
    Ok(())
}

fn parse_roster(cursor: &mut Cursor<'_>) -> Result<SevenTagRoster, PgnError> {
    let mut roster = SevenTagRoster::default();

    loop {
        cursor.skip_whitespace();
        if cursor.peek() != Some('[') {
            return Ok(roster);
        }
        cursor.bump();

        let key = cursor.take_while(|ch| !ch.is_whitespace() && !matches!(ch, ']' | '"'));
        if key.is_empty() {
            return Err(malformed_tag(cursor, "missing tag key"));
        }
        let key = key.to_owned();

        cursor.skip_inline_spaces();
        if cursor.peek() != Some('"') {
            return Err(malformed_tag(cursor, "expected opening quote"));
        }
        cursor.bump();

        let mut value = String::new();
        loop {
            match cursor.bump() {
                Some('"') => break,
                Some('\\') => match cursor.bump() {
                    Some(escaped @ ('"' | '\\')) => value.push(escaped),
                    Some(other) => {
                        value.push('\\');
                        value.push(other);
                    }
                    None => return Err(malformed_tag(cursor, "unterminated tag value")),
                },
                Some('\n') | None => return Err(malformed_tag(cursor, "unterminated tag value")),
                Some(ch) => value.push(ch),
            }
        }

        if cursor.bump() != Some(']') {
            return Err(malformed_tag(cursor, "expected closing bracket"));
        }

        if !roster.set_tag(&key, value) {
            debug!(key = %key, "ignoring tag outside the seven-tag roster");
        }
    }
}

fn malformed_tag(cursor: &Cursor<'_>, reason: &str) -> PgnError {
    debug!(offset = cursor.offset, reason, "malformed PGN tag");
    PgnError::MalformedTag(format!("{reason} at byte {}", cursor.offset))
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Byte cursor over PGN text.
struct Cursor<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, offset: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.offset..]
    }

    fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    fn take_while(&mut self, mut keep: impl FnMut(char) -> bool) -> &'a str {
        let start = self.offset;
        while self.peek().is_some_and(&mut keep) {
            self.bump();
        }
        &self.text[start..self.offset]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn skip_inline_spaces(&mut self) {
        self.take_while(|ch| ch == ' ' || ch == '\t');
    }

    fn error_at(&self, offset: usize, reason: &str) -> PgnError {
        debug!(offset, reason, "malformed PGN movetext");
        PgnError::MalformedMovetext {
            offset,
            reason: reason.to_owned(),
        }
    }

    /// Skips whitespace, comments, NAGs and variations.
    fn skip_trivia(&mut self) -> Result<(), PgnError> {
        loop {
            self.skip_whitespace();
            let start = self.offset;
            match self.peek() {
                Some('{') => {
                    self.take_while(|ch| ch != '}');
                    if self.bump().is_none() {
                        return Err(self.error_at(start, "unterminated comment"));
                    }
                }
                Some(';') => {
                    self.take_while(|ch| ch != '\n');
                }
                Some('$') => {
                    self.bump();
                    self.take_while(|ch| ch.is_ascii_digit());
                }
                Some('(') => self.skip_variation(start)?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_variation(&mut self, start: usize) -> Result<(), PgnError> {
        let mut depth = 0usize;
        loop {
            match self.bump() {
                Some('(') => depth += 1,
                Some(')') => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some('{') => {
                    self.take_while(|ch| ch != '}');
                    self.bump();
                }
                Some(_) => {}
                None => return Err(self.error_at(start, "unterminated variation")),
            }
        }
    }

    /// A result token followed by whitespace or the end of input.
    fn take_result_token(&mut self) -> Option<&'a str> {
        let rest = self.rest();
        let token = RESULT_TOKENS.into_iter().find(|token| {
            rest.strip_prefix(token)
                .is_some_and(|after| after.chars().next().map_or(true, char::is_whitespace))
        })?;
        self.offset += token.len();
        Some(token)
    }

    /// Digits followed by one or more dots.
    fn take_move_number(&mut self) -> Result<(), PgnError> {
        let start = self.offset;
        if self.take_while(|ch| ch.is_ascii_digit()).is_empty() {
            return Err(self.error_at(start, "expected a move number"));
        }
        if self.take_while(|ch| ch == '.').is_empty() {
            return Err(self.error_at(self.offset, "expected '.' after move number"));
        }
        Ok(())
    }

    /// An `N...` marker in front of Black's move. Leaves the cursor alone
    /// when there is none.
    fn take_continuation_number(&mut self) -> bool {
        let rest = self.rest();
        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 || !rest[digits..].starts_with("...") {
            return false;
        }
        self.offset += digits;
        self.take_while(|ch| ch == '.');
        true
    }

    fn take_san_token(&mut self) -> &'a str {
        self.take_while(|ch| !ch.is_whitespace() && !matches!(ch, '{' | ';' | '(' | ')' | '$'))
    }
}
