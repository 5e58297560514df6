//! Shared regex fragments embedded into each command family's pattern table.
//!
//! These are plain `&str` building blocks, not compiled patterns: every
//! grammar module interpolates them into its own `lazy_static!` regex via
//! `format!`, so a single definition of "what a number looks like" or "which
//! detector qualifiers are legal" is reused across the whole parser. The
//! fragments are written as non-capturing groups so they slot into an outer
//! capture group (`({f})`, `({d})`, ...) without disturbing group indices.

/// A signed decimal number, optionally in scientific notation. Permissive by
/// design: it captures the token so the downstream `parse_float` can validate
/// and map malformed input to the parser's own error type.
pub const FLOAT: &str = r"(?:[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)";

/// An unsigned integer (spectrum numbers and similar counts).
pub const UNSIGNED: &str = r"(?:\d+)";

/// A detector-bank qualifier. The same synonym set `DetectorType::from_qualifier`
/// resolves: `HAB`/`FRONT` for the high-angle bank, `LAB`/`REAR`/`MAIN` for the
/// low-angle bank. Matching is case-insensitive via the enclosing `(?i)`.
pub const DETECTOR: &str = r"(?:HAB|FRONT|LAB|REAR|MAIN)";

/// A binning step suffix, `LIN` or `LOG`, resolved by `StepType::from_suffix`.
pub const STEP: &str = r"(?:LIN|LOG)";
