//! Check command implementation

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::reader::read_user_file;

/// Execute the check command.
///
/// Every malformed line is echoed verbatim next to its error kind.
pub fn execute(file: &Path) -> Result<()> {
    let settings = read_user_file(file)?;

    if settings.is_clean() {
        println!("{} {}", "✓".green(), "No issues found".green().bold());
        println!(
            "{}",
            format!("Parsed {} settings", settings.records.len()).dimmed()
        );
        return Ok(());
    }

    println!("{}", "Issues found:".red().bold());
    for error in &settings.errors {
        println!(
            "  {} [{}] Line {}: {}",
            "✗".red(),
            "ERROR".red(),
            error.line_number,
            error.error
        );
        println!("      {}", error.raw_line.dimmed());
    }

    println!();
    println!(
        "{}",
        format!(
            "Found {} malformed line(s), {} settings parsed",
            settings.errors.len(),
            settings.records.len()
        )
        .red()
    );

    Ok(())
}
