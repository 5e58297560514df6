//! `SAMPLE` family: sample offset and path-length correction toggle.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::parse_float;
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "SAMPLE";

lazy_static! {
    /// Matches `OFFSET v`.
    static ref OFFSET_RE: Regex = Regex::new(&format!(
        r"(?i)^OFFSET\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `PATH/ON` and `PATH/OFF`.
    static ref PATH_RE: Regex = Regex::new(r"(?i)^PATH\s*/\s*(ON|OFF)$").unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = OFFSET_RE.captures(body) {
        settings.insert(Key::SampleOffset, Value::Float(parse_float(&caps[1])?));
        return Ok(settings);
    }

    if let Some(caps) = PATH_RE.captures(body) {
        let on = caps[1].eq_ignore_ascii_case("ON");
        settings.insert(Key::SamplePath, Value::Bool(on));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let settings = parse("OFFSET 120", "SAMPLE/OFFSET 120").unwrap();
        assert_eq!(settings[&Key::SampleOffset], Value::Float(120.0));
    }

    #[test]
    fn test_path_on_off() {
        let settings = parse("PATH/ON", "SAMPLE/PATH/ON").unwrap();
        assert_eq!(settings[&Key::SamplePath], Value::Bool(true));

        let settings = parse("path/off", "sample/path/off").unwrap();
        assert_eq!(settings[&Key::SamplePath], Value::Bool(false));
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(matches!(
            parse("THICKNESS 1", "SAMPLE/THICKNESS 1"),
            Err(ParseError::UnknownSubcommand {
                command: "SAMPLE",
                ..
            })
        ));
    }
}
