//! Reading a user file into an aggregate of settings.
//!
//! The reader is the thin driver around [`parse_line`]: one call per
//! physical line, in file order. Malformed lines are collected as
//! diagnostics rather than aborting, so a single typo never hides the rest
//! of the configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::UserFileSettings;
use crate::parser::parse_line;

/// Read and parse a user file from disk.
pub fn read_user_file(path: &Path) -> Result<UserFileSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read user file: {}", path.display()))?;
    Ok(parse_content(&content))
}

/// Parse user file content that is already in memory.
pub fn parse_content(content: &str) -> UserFileSettings {
    let mut settings = UserFileSettings::new();
    for (idx, raw) in content.lines().enumerate() {
        let line_number = idx + 1;
        match parse_line(raw) {
            Ok(parsed) => settings.add_line(line_number, parsed),
            Err(error) => settings.add_error(line_number, raw.trim(), error),
        }
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Key, Value};

    #[test]
    fn test_parse_content_collects_settings_in_order() {
        let content = "\
! SANS2D user file
SET SCALES 0.074 1.0 1.0 1.0 1.0
L/Q 0.1 0.5 0.01/LOG
GRAVITY/ON
";
        let settings = parse_content(content);
        assert!(settings.is_clean());
        assert_eq!(settings.records.len(), 3);
        assert_eq!(settings.records[0].key, Key::SetScales);
        assert_eq!(settings.records[0].line_number, 2);
        assert_eq!(settings.records[2].key, Key::GravityOn);
    }

    #[test]
    fn test_malformed_line_does_not_abort() {
        let content = "\
GRAVITY/ON
BOGUS/THING 1 2
SAMPLE/OFFSET 120
";
        let settings = parse_content(content);
        assert_eq!(settings.records.len(), 2);
        assert_eq!(settings.errors.len(), 1);
        assert_eq!(settings.errors[0].line_number, 2);
        assert_eq!(settings.errors[0].raw_line, "BOGUS/THING 1 2");
        assert_eq!(
            settings.records[1].value,
            Value::Float(120.0),
            "lines after the bad one still parse"
        );
    }

    #[test]
    fn test_later_lines_shadow_earlier_ones_in_order() {
        let content = "SAMPLE/OFFSET 120\nSAMPLE/OFFSET 75\n";
        let settings = parse_content(content);
        let offsets = settings.get_all(Key::SampleOffset);
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets.last().unwrap().value, Value::Float(75.0));
    }
}
