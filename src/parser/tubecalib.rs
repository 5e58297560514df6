//! `TUBECALIBFILE` family: tube calibration file reference.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "TUBECALIBFILE";

lazy_static! {
    /// Matches a nexus file name. The suffix check is case-insensitive but
    /// the captured name keeps the user's casing.
    static ref FILE_RE: Regex = Regex::new(r"(?i)^(\S+\.nxs)$").unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    if let Some(caps) = FILE_RE.captures(body) {
        let mut settings = Settings::new();
        settings.insert(Key::TubeCalibFile, Value::Text(caps[1].to_string()));
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
    fn test_file_preserves_case() {
        let settings = parse(
            "TUBE_SANS2D_BOTH_31681_25Sept15.nxs",
            "TUBECALIBFILE=TUBE_SANS2D_BOTH_31681_25Sept15.nxs",
        )
        .unwrap();
        assert_eq!(
            settings[&Key::TubeCalibFile],
            Value::Text("TUBE_SANS2D_BOTH_31681_25Sept15.nxs".to_string())
        );
    }

    #[test]
    fn test_uppercase_suffix_accepted() {
        assert!(parse("calib.NXS", "TUBECALIBFILE=calib.NXS").is_ok());
    }

    #[test]
    fn test_wrong_suffix_rejected() {
        assert!(matches!(
            parse("calib.xml", "TUBECALIBFILE=calib.xml"),
            Err(ParseError::UnknownSubcommand { .. })
        ));
    }
}
