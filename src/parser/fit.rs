//! `FIT` family: transmission fit selection and monitor fit times.
//!
//! The transmission form is
//! `TRANS/[CAN/|SAMPLE/]LIN|LOG|POLYNOMIAL[2-5] [w1 w2]`. When neither
//! `CAN` nor `SAMPLE` is named, the fit applies to both measurements and the
//! line emits two settings.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::parse_float;
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{DataType, FitFunction, Key, RangeEntry, Settings, TransFitEntry, Value};

pub const COMMAND: &str = "FIT";

lazy_static! {
    /// Matches `TRANS/CLEAR` and the short `CLEAR`.
    static ref CLEAR_RE: Regex =
        Regex::new(r"(?i)^(?:TRANS\s*/\s*)?CLEAR$").unwrap();

    /// Matches `MONITOR t1 t2`.
    static ref MONITOR_RE: Regex = Regex::new(&format!(
        r"(?i)^MONITOR\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches the general transmission fit. Fit-mode alternatives list the
    /// longer spellings first so `LIN` never shadows `LINEAR`.
    static ref TRANS_FIT_RE: Regex = Regex::new(&format!(
        r"(?i)^TRANS\s*/\s*(?:(SAMPLE|CAN)\s*/\s*)?(LINEAR|STRAIGHT|LIN|YLOG|LOG|POLYNOMIAL)\s*([2-5])?(?:\s+({f})\s+({f}))?$",
        f = FLOAT
    ))
    .unwrap();
}

fn fit_function(token: &str, order: Option<&str>) -> FitFunction {
    match token.to_ascii_uppercase().as_str() {
        "LOG" | "YLOG" => FitFunction::Log,
        "POLYNOMIAL" => {
            let order = order.and_then(|o| o.parse().ok()).unwrap_or(2);
            FitFunction::Poly(order)
        }
        _ => FitFunction::Lin,
    }
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if CLEAR_RE.is_match(body) {
        settings.insert(Key::FitClear, Value::Bool(true));
        return Ok(settings);
    }

    if let Some(caps) = MONITOR_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::FitMonitorTimes, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = TRANS_FIT_RE.captures(body) {
        let data_type = caps.get(1).map(|m| {
            if m.as_str().eq_ignore_ascii_case("CAN") {
                DataType::Can
            } else {
                DataType::Sample
            }
        });
        let start = match caps.get(4) {
            Some(m) => Some(parse_float(m.as_str())?),
            None => None,
        };
        let stop = match caps.get(5) {
            Some(m) => Some(parse_float(m.as_str())?),
            None => None,
        };
        let entry = TransFitEntry {
            function: fit_function(&caps[2], caps.get(3).map(|m| m.as_str())),
            start,
            stop,
        };
        match data_type {
            Some(DataType::Sample) => {
                settings.insert(Key::FitSample, Value::TransFit(entry));
            }
            Some(DataType::Can) => {
                settings.insert(Key::FitCan, Value::TransFit(entry));
            }
            None => {
                settings.insert(Key::FitSample, Value::TransFit(entry));
                settings.insert(Key::FitCan, Value::TransFit(entry));
            }
        }
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
