//! `TRANS` family: transmission spectrum selection, calculation radius and
//! regions, and the sample/can workspace overrides.
//!
//! Workspace and file names are sliced out of the original line, so their
//! casing survives the otherwise case-insensitive grammar.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{parse_float, parse_int, split_name_list};
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "TRANS";

lazy_static! {
    /// Matches `TRANSPEC=n/SHIFT=z`; tried before the bare spectrum form.
    static ref SPECTRUM_SHIFT_RE: Regex = Regex::new(&format!(
        r"(?i)^TRANSPEC\s*=\s*(\d+)\s*/\s*SHIFT\s*=\s*({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `TRANSPEC=n`.
    static ref SPECTRUM_RE: Regex =
        Regex::new(r"(?i)^TRANSPEC\s*=\s*(\d+)$").unwrap();

    /// Matches `RADIUS=r`.
    static ref RADIUS_RE: Regex = Regex::new(&format!(
        r"(?i)^RADIUS\s*=\s*({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `ROI=<files>` and `MASK=<files>`.
    static ref REGION_RE: Regex = Regex::new(r"(?i)^(ROI|MASK)\s*=\s*(.+)$").unwrap();

    /// Matches `SAMPLEWS=<ws>` and `CANWS=<ws>`.
    static ref WORKSPACE_RE: Regex =
        Regex::new(r"(?i)^(SAMPLEWS|CANWS)\s*=\s*(\S+)$").unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = SPECTRUM_SHIFT_RE.captures(body) {
        settings.insert(Key::TransSpectrum, Value::Int(parse_int(&caps[1])?));
        settings.insert(Key::TransSpectrumShift, Value::Float(parse_float(&caps[2])?));
        return Ok(settings);
    }

    if let Some(caps) = SPECTRUM_RE.captures(body) {
        settings.insert(Key::TransSpectrum, Value::Int(parse_int(&caps[1])?));
        return Ok(settings);
    }

    if let Some(caps) = RADIUS_RE.captures(body) {
        settings.insert(Key::TransRadius, Value::Float(parse_float(&caps[1])?));
        return Ok(settings);
    }

    if let Some(caps) = REGION_RE.captures(body) {
        let files = split_name_list(&caps[2]);
        if files.is_empty() {
            return Err(ParseError::UnknownSubcommand {
                command: COMMAND,
                line: line.to_string(),
            });
        }
        let key = if caps[1].eq_ignore_ascii_case("ROI") {
            Key::TransRoi
        } else {
            Key::TransMask
        };
        settings.insert(key, Value::TextList(files));
        return Ok(settings);
    }

    if let Some(caps) = WORKSPACE_RE.captures(body) {
        let key = if caps[1].eq_ignore_ascii_case("SAMPLEWS") {
            Key::TransSampleWorkspace
        } else {
            Key::TransCanWorkspace
        };
        settings.insert(key, Value::Text(caps[2].to_string()));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
