//! Common extraction utilities shared by the command grammars

use crate::error::ParseError;
use crate::model::DetectorType;

/// Parse one numeric token, mapping failure to the parser's own error type.
pub fn parse_float(token: &str) -> Result<f64, ParseError> {
    token
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::MalformedNumber {
            token: token.trim().to_string(),
        })
}

/// Parse one integer token.
pub fn parse_int(token: &str) -> Result<i64, ParseError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::MalformedNumber {
            token: token.trim().to_string(),
        })
}

/// Parse a whitespace-separated list of floats with a fixed arity.
pub fn parse_float_list(text: &str, expected: usize) -> Result<Vec<f64>, ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(ParseError::Arity {
            expected,
            actual: tokens.len(),
        });
    }
    tokens.iter().map(|t| parse_float(t)).collect()
}

/// Parse a comma-separated list of floats with a fixed arity. Whitespace
/// around elements is ignored.
pub fn parse_csv_floats(text: &str, expected: usize) -> Result<Vec<f64>, ParseError> {
    let tokens: Vec<&str> = text.split(',').map(str::trim).collect();
    if tokens.len() != expected {
        return Err(ParseError::Arity {
            expected,
            actual: tokens.len(),
        });
    }
    tokens.iter().map(|t| parse_float(t)).collect()
}

/// Split a comma-separated list of file or workspace names, trimming
/// whitespace but preserving the user's casing. Empty elements are dropped.
pub fn split_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve an optional detector qualifier capture, applying the Lab default.
pub fn detector_or_default(token: Option<&str>) -> DetectorType {
    token
        .and_then(DetectorType::from_qualifier)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_malformed() {
        match parse_float("12..5") {
            Err(ParseError::MalformedNumber { token }) => assert_eq!(token, "12..5"),
            other => panic!("Expected MalformedNumber, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_float_list_arity() {
        match parse_float_list("1 2 3", 5) {
            Err(ParseError::Arity { expected, actual }) => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 3);
            }
            other => panic!("Expected Arity, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_csv_floats() {
        let values = parse_csv_floats("0.1, 0.01 ,0.3,0.02,0.5", 5).unwrap();
        assert_eq!(values, vec![0.1, 0.01, 0.3, 0.02, 0.5]);
    }

    #[test]
    fn test_split_name_list_preserves_case() {
        let names = split_name_list("MyMask.xml, Other.XML");
        assert_eq!(names, vec!["MyMask.xml", "Other.XML"]);
    }

    #[test]
    fn test_detector_or_default() {
        assert_eq!(detector_or_default(None), DetectorType::Lab);
        assert_eq!(detector_or_default(Some("FRONT")), DetectorType::Hab);
    }
}
