//! Aggregate settings produced by reading a whole user file

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::key::{CommandFamily, Key};
use super::value::Value;
use crate::error::ParseError;

/// Settings produced by one successfully parsed line. A line yields one or
/// more pairs (never zero on success); keys within a single line are unique.
pub type Settings = BTreeMap<Key, Value>;

/// One setting as it appeared in the file, with its source line number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingRecord {
    pub line_number: usize,
    pub key: Key,
    pub value: Value,
}

/// A line that failed to parse. The raw line text is kept verbatim so the
/// caller can echo it back to the user.
#[derive(Debug)]
pub struct LineError {
    pub line_number: usize,
    pub raw_line: String,
    pub error: ParseError,
}

/// Everything extracted from one user file: the settings in file order plus
/// the lines that could not be parsed. Malformed lines never abort the read;
/// merge policy (later lines winning) is left to consumers of `records`.
#[derive(Debug, Default)]
pub struct UserFileSettings {
    pub records: Vec<SettingRecord>,
    pub errors: Vec<LineError>,
}

impl UserFileSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_line(&mut self, line_number: usize, settings: Settings) {
        for (key, value) in settings {
            self.records.push(SettingRecord {
                line_number,
                key,
                value,
            });
        }
    }

    pub fn add_error(&mut self, line_number: usize, raw_line: &str, error: ParseError) {
        self.errors.push(LineError {
            line_number,
            raw_line: raw_line.to_string(),
            error,
        });
    }

    /// Records belonging to one command family, in file order.
    pub fn family(&self, family: CommandFamily) -> Vec<&SettingRecord> {
        self.records
            .iter()
            .filter(|r| r.key.family() == family)
            .collect()
    }

    /// All occurrences of one key, in file order. Later occurrences override
    /// earlier ones under the usual merge policy, so the last element is the
    /// effective value.
    pub fn get_all(&self, key: Key) -> Vec<&SettingRecord> {
        self.records.iter().filter(|r| r.key == key).collect()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
