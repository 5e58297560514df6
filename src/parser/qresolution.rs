//! `QRESOLUTION` family: Q resolution toggle, aperture geometry, and the
//! moderator spread file.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::parse_float;
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "QRESOLUTION";

lazy_static! {
    /// Matches `ON` and `OFF`.
    static ref ON_OFF_RE: Regex = Regex::new(r"(?i)^(ON|OFF)$").unwrap();

    /// Matches the numeric aperture settings, `<name>=v`.
    static ref NUMERIC_RE: Regex = Regex::new(&format!(
        r"(?i)^(DELTAR|LCOLLIM|A1|A2|H1|W1|H2|W2)\s*=\s*({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `MODERATOR=file`; the name keeps the user's casing.
    static ref MODERATOR_RE: Regex =
        Regex::new(r"(?i)^MODERATOR\s*=\s*(.+?)$").unwrap();
}

fn numeric_key(name: &str) -> Key {
    match name.to_ascii_uppercase().as_str() {
        "DELTAR" => Key::QResolutionDeltaR,
        "LCOLLIM" => Key::QResolutionCollimationLength,
        "A1" => Key::QResolutionA1,
        "A2" => Key::QResolutionA2,
        "H1" => Key::QResolutionH1,
        "W1" => Key::QResolutionW1,
        "H2" => Key::QResolutionH2,
        _ => Key::QResolutionW2,
    }
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = ON_OFF_RE.captures(body) {
        let on = caps[1].eq_ignore_ascii_case("ON");
        settings.insert(Key::QResolutionOn, Value::Bool(on));
        return Ok(settings);
    }

    if let Some(caps) = NUMERIC_RE.captures(body) {
        settings.insert(numeric_key(&caps[1]), Value::Float(parse_float(&caps[2])?));
        return Ok(settings);
    }

    if let Some(caps) = MODERATOR_RE.captures(body) {
        settings.insert(
            Key::QResolutionModerator,
            Value::Text(caps[1].trim().to_string()),
        );
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
