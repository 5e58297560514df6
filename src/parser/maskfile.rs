//! `MASKFILE` family: external mask file lists.
//!
//! File names keep the user's casing; the reduction later resolves them on
//! what may be a case-sensitive filesystem.

use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

use super::common::split_name_list;

pub const COMMAND: &str = "MASKFILE";

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let files = split_name_list(body);
    if files.is_empty() {
        return Err(ParseError::UnknownSubcommand {
            command: COMMAND,
            line: line.to_string(),
        });
    }
    let mut settings = Settings::new();
    settings.insert(Key::MaskFiles, Value::TextList(files));
    Ok(settings)
}
