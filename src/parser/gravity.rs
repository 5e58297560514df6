//! `GRAVITY` family: gravity correction toggle and extra flight length.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::parse_float;
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "GRAVITY";

lazy_static! {
    /// Matches `ON` and `OFF`.
    static ref ON_OFF_RE: Regex = Regex::new(r"(?i)^(ON|OFF)$").unwrap();

    /// Matches `LEXTRA=l`.
    static ref EXTRA_LENGTH_RE: Regex = Regex::new(&format!(
        r"(?i)^LEXTRA\s*=\s*({f})$",
        f = FLOAT
    ))
    .unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = ON_OFF_RE.captures(body) {
        let on = caps[1].eq_ignore_ascii_case("ON");
        settings.insert(Key::GravityOn, Value::Bool(on));
        return Ok(settings);
    }

    if let Some(caps) = EXTRA_LENGTH_RE.captures(body) {
        settings.insert(
            Key::GravityExtraLength,
            Value::Float(parse_float(&caps[1])?),
        );
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
