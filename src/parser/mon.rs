//! `MON` family: monitor spectrum selection and the direct/flood efficiency
//! files.
//!
//! The `TRANS/` infix and the `/INTERPOLATE` suffix are independent
//! qualifiers; either, both, or neither may appear and the extracted record
//! is the same regardless of which are present.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{detector_or_default, parse_float, parse_int};
use super::patterns::{DETECTOR, FLOAT};
use crate::error::ParseError;
use crate::model::{Key, MonitorFile, MonitorLength, MonitorSpectrum, Settings, Value};

pub const COMMAND: &str = "MON";

lazy_static! {
    /// Matches `LENGTH=l s[/INTERPOLATE]`.
    static ref LENGTH_RE: Regex = Regex::new(&format!(
        r"(?i)^LENGTH\s*=\s*({f})\s+(\d+)(\s*/\s*INTERPOLATE)?$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `[TRANS/]SPECTRUM=n[/INTERPOLATE]`.
    static ref SPECTRUM_RE: Regex = Regex::new(
        r"(?i)^(TRANS\s*/\s*)?SPECTRUM\s*=\s*(\d+)(\s*/\s*INTERPOLATE)?$"
    )
    .unwrap();

    /// Matches `DIRECT[/det]=file` and `FLAT[/det]=file`; the file name
    /// keeps the user's casing.
    static ref FILE_RE: Regex = Regex::new(&format!(
        r"(?i)^(DIRECT|FLAT)(?:\s*/\s*({d}))?\s*=\s*(.+?)$",
        d = DETECTOR
    ))
    .unwrap();

    /// Matches `HAB=file`.
    static ref HAB_FILE_RE: Regex = Regex::new(r"(?i)^HAB\s*=\s*(.+?)$").unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = LENGTH_RE.captures(body) {
        let entry = MonitorLength {
            length: parse_float(&caps[1])?,
            spectrum: parse_int(&caps[2])?,
            interpolate: caps.get(3).is_some(),
        };
        settings.insert(Key::MonLength, Value::MonitorLength(entry));
        return Ok(settings);
    }

    if let Some(caps) = SPECTRUM_RE.captures(body) {
        let entry = MonitorSpectrum {
            spectrum: parse_int(&caps[2])?,
            is_trans: caps.get(1).is_some(),
            interpolate: caps.get(3).is_some(),
        };
        settings.insert(Key::MonSpectrum, Value::MonitorSpectrum(entry));
        return Ok(settings);
    }

    if let Some(caps) = FILE_RE.captures(body) {
        let entry = MonitorFile {
            file_path: caps[3].trim().to_string(),
            detector: detector_or_default(caps.get(2).map(|m| m.as_str())),
        };
        let key = if caps[1].eq_ignore_ascii_case("DIRECT") {
            Key::MonDirect
        } else {
            Key::MonFlat
        };
        settings.insert(key, Value::MonitorFile(entry));
        return Ok(settings);
    }

    if let Some(caps) = HAB_FILE_RE.captures(body) {
        settings.insert(Key::MonHab, Value::Text(caps[1].trim().to_string()));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
