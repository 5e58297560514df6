//! Error types for user file parsing.
//!
//! Every error carries enough of the offending input to echo it back
//! verbatim; the raw-line report is what makes a bad user file debuggable.

use thiserror::Error;

/// Errors produced while parsing a single user file line.
///
/// Parsing never recovers inside a line: either the full set of settings for
/// the line is returned, or one of these. A failed line has no effect on any
/// other line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The line's command prefix matches no registered keyword.
    #[error("unknown command: '{line}'")]
    UnknownCommand { line: String },

    /// The keyword matched but the remainder fits none of the family's
    /// sub-grammars.
    #[error("unrecognised {command} setting: '{line}'")]
    UnknownSubcommand { command: &'static str, line: String },

    /// A token expected to be numeric did not parse.
    #[error("malformed number '{token}'")]
    MalformedNumber { token: String },

    /// A separated list had the wrong number of elements.
    #[error("expected {expected} values, got {actual}")]
    Arity { expected: usize, actual: usize },

    /// Explicit bounds given in the wrong order where the grammar requires
    /// them monotonic.
    #[error("range bounds out of order: {start} > {stop}")]
    RangeOrder { start: f64, stop: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_echoes_line() {
        let err = ParseError::UnknownCommand {
            line: "BOGUS/THING 1 2".to_string(),
        };
        assert_eq!(format!("{}", err), "unknown command: 'BOGUS/THING 1 2'");
    }

    #[test]
    fn test_unknown_subcommand_names_family() {
        let err = ParseError::UnknownSubcommand {
            command: "MASK",
            line: "MASK/XYZ".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("MASK"));
        assert!(rendered.contains("MASK/XYZ"));
    }

    #[test]
    fn test_arity_message() {
        let err = ParseError::Arity {
            expected: 5,
            actual: 3,
        };
        assert_eq!(format!("{}", err), "expected 5 values, got 3");
    }
}
