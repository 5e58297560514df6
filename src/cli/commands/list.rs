//! List command implementation

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::FamilyArg;
use crate::model::{CommandFamily, SettingRecord};
use crate::reader::read_user_file;

const KEY_WIDTH: usize = 32;
const FAMILY_WIDTH: usize = 12;
const LINE_WIDTH: usize = 6;

/// Truncate a string to fit within max_width, adding "..." if truncated.
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Execute the list command.
pub fn execute(file: &Path, family: Option<FamilyArg>, json: bool) -> Result<()> {
    let settings = read_user_file(file)?;

    for error in &settings.errors {
        eprintln!(
            "{} Line {}: {} ({})",
            "⚠".yellow(),
            error.line_number,
            error.error,
            error.raw_line.dimmed()
        );
    }

    let records: Vec<&SettingRecord> = match family {
        Some(arg) => settings.family(CommandFamily::from(arg)),
        None => settings.records.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No settings found".dimmed());
        return Ok(());
    }

    println!(
        "{:<key_w$} {:<family_w$} {:<line_w$} {}",
        "KEY".bold().cyan(),
        "FAMILY".bold().cyan(),
        "LINE".bold().cyan(),
        "VALUE".bold().cyan(),
        key_w = KEY_WIDTH,
        family_w = FAMILY_WIDTH,
        line_w = LINE_WIDTH,
    );

    for record in &records {
        println!(
            "{:<key_w$} {:<family_w$} {:<line_w$} {}",
            truncate_value(record.key.name(), KEY_WIDTH).green(),
            record.key.family().name().blue(),
            record.line_number.to_string().dimmed(),
            record.value,
            key_w = KEY_WIDTH,
            family_w = FAMILY_WIDTH,
            line_w = LINE_WIDTH,
        );
    }

    println!();
    println!("{}", format!("Total: {} settings", records.len()).dimmed());

    Ok(())
}
