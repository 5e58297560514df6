//! sansuf - SANS reduction user file parser
//!
//! Parses the legacy line-oriented "user file" format that configures SANS
//! data reduction: one command per line, `!` comments, case-insensitive
//! keywords with case-preserved file names.
//!
//! # Features
//!
//! - Parse single lines into typed settings ([`parse_line`])
//! - Read whole files with per-line diagnostics ([`reader`])
//! - List, check, and query user files from the command line
//!
//! # Example
//!
//! ```
//! use sansuf::model::{Key, Value};
//! use sansuf::parse_line;
//!
//! let settings = parse_line("SAMPLE/OFFSET 120").unwrap();
//! assert_eq!(settings[&Key::SampleOffset], Value::Float(120.0));
//! ```

pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod reader;

pub use error::ParseError;
pub use model::{Key, Settings, UserFileSettings, Value};
pub use parser::{parse_line, CommandKind};
pub use reader::{parse_content, read_user_file};
