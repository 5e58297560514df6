//! # Parser Module
//!
//! Line-oriented parsing of SANS reduction user files.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs         - This file: CommandKind dispatcher + parse_line
//! ├── patterns.rs    - Shared regex fragments (FLOAT, DETECTOR, ...)
//! ├── common.rs      - Numeric/list extraction helpers
//! ├── back.rs        - BACK    background time windows
//! ├── det.rs         - DET     reduction mode + geometry corrections
//! ├── limit.rs       - L       angle/radius/Q/Qxy/wavelength limits
//! ├── mask.rs        - MASK    time/spectrum/strip/block masks
//! ├── sample.rs      - SAMPLE  offset + path toggle
//! ├── set.rs         - SET     beam centre + scale factors
//! ├── trans.rs       - TRANS   transmission configuration
//! ├── tubecalib.rs   - TUBECALIBFILE calibration file
//! ├── qresolution.rs - QRESOLUTION aperture geometry
//! ├── fit.rs         - FIT     transmission fit selection
//! ├── gravity.rs     - GRAVITY correction toggle
//! ├── maskfile.rs    - MASKFILE external mask lists
//! ├── mon.rs         - MON     monitor spectra + efficiency files
//! └── print.rs       - PRINT   verbatim log text
//! ```
//!
//! `SANS2D` and `LOQ` are recognized for compatibility with old user files
//! and parse to an empty setting map.
//!
//! ## How matching works
//!
//! Every pattern is compiled with `(?i)` and run against the trimmed
//! original-case line, so keyword matching is case-insensitive while capture
//! groups slice file and workspace names out in the user's own casing.
//! Command keywords are prefix-disjoint, so at most one prefix pattern
//! matches; the matched command's module then tries its ordered sub-grammar
//! list against the remainder.
//!
//! ## Adding a new command family
//!
//! 1. Add a module with its pattern table and `parse` function
//! 2. Add a `CommandKind` variant and its prefix pattern below
//! 3. Route the variant in `CommandKind::parse_body`

mod back;
mod common;
mod det;
mod fit;
mod gravity;
mod limit;
mod mask;
mod maskfile;
mod mon;
pub mod patterns;
mod print;
mod qresolution;
mod sample;
mod set;
mod trans;
mod tubecalib;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ParseError;
use crate::model::Settings;

/// The closed set of command families a user file line can open with.
///
/// One variant per keyword; dispatch is a single exhaustive `match`, so a
/// new family cannot be registered without the compiler pointing at every
/// place that must learn about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Back,
    Det,
    Limit,
    MaskFile,
    Mask,
    Sample,
    Set,
    Trans,
    TubeCalibFile,
    QResolution,
    Fit,
    Gravity,
    Mon,
    Print,
    Sans2d,
    Loq,
}

lazy_static! {
    /// Command-prefix patterns, in registration order. The keywords are
    /// prefix-disjoint (`MASKFILE=` cannot match the `MASK` word-boundary
    /// pattern, `LOQ` cannot match `L/`), so order is cosmetic.
    static ref PREFIXES: Vec<(CommandKind, Regex)> = vec![
        (CommandKind::Back, Regex::new(r"(?i)^\s*BACK\s*/\s*").unwrap()),
        (CommandKind::Det, Regex::new(r"(?i)^\s*DET\s*/\s*").unwrap()),
        (CommandKind::Limit, Regex::new(r"(?i)^\s*L\s*/\s*").unwrap()),
        (
            CommandKind::MaskFile,
            Regex::new(r"(?i)^\s*MASKFILE\s*=\s*").unwrap()
        ),
        (CommandKind::Mask, Regex::new(r"(?i)^\s*MASK\b\s*").unwrap()),
        (
            CommandKind::Sample,
            Regex::new(r"(?i)^\s*SAMPLE\s*/\s*").unwrap()
        ),
        (CommandKind::Set, Regex::new(r"(?i)^\s*SET\s+").unwrap()),
        (
            CommandKind::Trans,
            Regex::new(r"(?i)^\s*TRANS\s*/\s*").unwrap()
        ),
        (
            CommandKind::TubeCalibFile,
            Regex::new(r"(?i)^\s*TUBECALIBFILE\s*=\s*").unwrap()
        ),
        (
            CommandKind::QResolution,
            Regex::new(r"(?i)^\s*QRESOL(?:UTION)?\s*/\s*").unwrap()
        ),
        (CommandKind::Fit, Regex::new(r"(?i)^\s*FIT\s*/\s*").unwrap()),
        (
            CommandKind::Gravity,
            Regex::new(r"(?i)^\s*GRAVITY\s*/\s*").unwrap()
        ),
        (CommandKind::Mon, Regex::new(r"(?i)^\s*MON\s*/\s*").unwrap()),
        (
            CommandKind::Print,
            Regex::new(r"(?i)^\s*PRINT(?:\s*/\s*|\s+)").unwrap()
        ),
        (CommandKind::Sans2d, Regex::new(r"(?i)^\s*SANS2D\b").unwrap()),
        (CommandKind::Loq, Regex::new(r"(?i)^\s*LOQ\b").unwrap()),
    ];
}

impl CommandKind {
    fn parse_body(self, body: &str, line: &str) -> Result<Settings, ParseError> {
        match self {
            CommandKind::Back => back::parse(body, line),
            CommandKind::Det => det::parse(body, line),
            CommandKind::Limit => limit::parse(body, line),
            CommandKind::MaskFile => maskfile::parse(body, line),
            CommandKind::Mask => mask::parse(body, line),
            CommandKind::Sample => sample::parse(body, line),
            CommandKind::Set => set::parse(body, line),
            CommandKind::Trans => trans::parse(body, line),
            CommandKind::TubeCalibFile => tubecalib::parse(body, line),
            CommandKind::QResolution => qresolution::parse(body, line),
            CommandKind::Fit => fit::parse(body, line),
            CommandKind::Gravity => gravity::parse(body, line),
            CommandKind::Mon => mon::parse(body, line),
            CommandKind::Print => print::parse(body, line),
            // Legacy instrument markers carry no settings.
            CommandKind::Sans2d | CommandKind::Loq => Ok(Settings::new()),
        }
    }
}

/// Parse one physical line of a user file into its settings.
///
/// Blank lines and `!` comments produce an empty map. A line that matches no
/// command keyword, or matches a keyword but none of its sub-grammars, is an
/// error carrying the offending text; nothing about a failed line affects
/// any other line.
pub fn parse_line(line: &str) -> Result<Settings, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('!') {
        return Ok(Settings::new());
    }

    for (kind, prefix) in PREFIXES.iter() {
        if let Some(found) = prefix.find(trimmed) {
            let body = &trimmed[found.end()..];
            return kind.parse_body(body, trimmed);
        }
    }

    Err(ParseError::UnknownCommand {
        line: trimmed.to_string(),
    })
}
