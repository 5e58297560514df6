//! Show command implementation

use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::model::Key;
use crate::reader::read_user_file;

/// Execute the show command.
pub fn execute(file: &Path, key_name: &str) -> Result<()> {
    let key: Key = match key_name.parse() {
        Ok(key) => key,
        Err(message) => bail!("{}", message),
    };

    let settings = read_user_file(file)?;
    let records = settings.get_all(key);

    if records.is_empty() {
        println!("{}", format!("{} is not set", key).dimmed());
        return Ok(());
    }

    for record in &records {
        println!(
            "{} {} {}",
            format!("L{}", record.line_number).dimmed(),
            key.name().green(),
            record.value
        );
    }

    // Under later-line-wins merging only the last occurrence is effective.
    if records.len() > 1 {
        println!(
            "{}",
            format!(
                "{} occurrences; the last one takes effect",
                records.len()
            )
            .yellow()
        );
    }

    Ok(())
}
