//! `SET` family: beam centre positions and the instrument scale factors.
//!
//! Unlike most families the keyword separator is whitespace, not `/`.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{parse_float, parse_float_list};
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{DetectorType, Key, PositionEntry, SetScalesEntry, Settings, Value};

pub const COMMAND: &str = "SET";

lazy_static! {
    /// Matches `SCALES <numbers>`; arity (exactly 5) is validated afterwards.
    static ref SCALES_RE: Regex = Regex::new(r"(?i)^SCALES\s+(.+)$").unwrap();

    /// Matches `CENTRE[/MAIN|/HAB] x y`.
    static ref CENTRE_RE: Regex = Regex::new(&format!(
        r"(?i)^CENTRE(?:\s*/\s*(MAIN|HAB))?\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = SCALES_RE.captures(body) {
        let values = parse_float_list(&caps[1], 5)?;
        let entry = SetScalesEntry {
            s: values[0],
            a: values[1],
            b: values[2],
            c: values[3],
            d: values[4],
        };
        settings.insert(Key::SetScales, Value::Scales(entry));
        return Ok(settings);
    }

    if let Some(caps) = CENTRE_RE.captures(body) {
        let hab = caps
            .get(1)
            .map(|m| m.as_str().eq_ignore_ascii_case("HAB"))
            .unwrap_or(false);
        let entry = PositionEntry {
            pos1: parse_float(&caps[2])?,
            pos2: parse_float(&caps[3])?,
            detector: if hab {
                DetectorType::Hab
            } else {
                DetectorType::Lab
            },
        };
        let key = if hab { Key::SetCentreHab } else { Key::SetCentre };
        settings.insert(key, Value::Position(entry));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
