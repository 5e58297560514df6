//! `PRINT` family: free text echoed into the reduction log, verbatim.

use crate::error::ParseError;
use crate::model::{Key, Settings, Value};

pub const COMMAND: &str = "PRINT";

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(ParseError::UnknownSubcommand {
            command: COMMAND,
            line: line.to_string(),
        });
    }
    let mut settings = Settings::new();
    settings.insert(Key::PrintLine, Value::Text(body.to_string()));
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preserves_case() {
        let settings = parse(
            "Run reduced by J. Smith",
            "PRINT Run reduced by J. Smith",
        )
        .unwrap();
        assert_eq!(
            settings[&Key::PrintLine],
            Value::Text("Run reduced by J. Smith".to_string())
        );
    }

    #[test]
    fn test_empty_body_rejected() {
        assert!(matches!(
            parse("  ", "PRINT  "),
            Err(ParseError::UnknownSubcommand { .. })
        ));
    }
}
