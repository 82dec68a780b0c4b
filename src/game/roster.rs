//! The PGN seven-tag roster.

use chrono::NaiveDate;

use crate::game_state::chess_types::GameResult;

const PGN_DATE_FORMAT: &str = "%Y.%m.%d";

/// Event, Site, Date, Round, White, Black and Result. Unset text fields are
/// empty strings; an unset result is written as `*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SevenTagRoster {
    pub event: String,
    pub site: String,
    pub date: String,
    pub round: String,
    pub white: String,
    pub black: String,
    pub result: Option<GameResult>,
}

impl SevenTagRoster {
    /// Writes `date` in PGN `YYYY.MM.DD` form.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date.format(PGN_DATE_FORMAT).to_string();
    }

    /// The date tag as a calendar date. `None` when it is empty or uses
    /// `??` placeholders.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, PGN_DATE_FORMAT).ok()
    }

    /// Stores a tag pair by key. Keys outside the roster are ignored and
    /// reported as `false`.
    pub(crate) fn set_tag(&mut self, key: &str, value: String) -> bool {
        match key {
            "Event" => self.event = value,
            "Site" => self.site = value,
            "Date" => self.date = value,
            "Round" => self.round = value,
            "White" => self.white = value,
            "Black" => self.black = value,
            "Result" => self.result = GameResult::from_pgn_token(&value),
            _ => return false,
        }
        true
    }

    /// Tag pairs in roster order.
    pub(crate) fn tags(&self) -> [(&'static str, &str); 7] {
        [
            ("Event", self.event.as_str()),
            ("Site", self.site.as_str()),
            ("Date", self.date.as_str()),
            ("Round", self.round.as_str()),
            ("White", self.white.as_str()),
            ("Black", self.black.as_str()),
            ("Result", self.result.map_or("*", GameResult::pgn_token)),
        ]
    }
}
