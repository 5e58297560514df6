//! `BACK` family: background time windows for monitors.
//!
//! Sub-grammars, tried in order:
//! - `MON/TIMES t1 t2` - window applied to every monitor
//! - `M<n>/TIMES t1 t2` or `M<n> t1 t2` - window for one monitor
//! - `M<n>/OFF` - disable background subtraction for one monitor
//! - `TRANS t1 t2` - window for the transmission monitor

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{parse_float, parse_int};
use super::patterns::FLOAT;
use crate::error::ParseError;
use crate::model::{BackSingleMonitorEntry, Key, RangeEntry, Settings, Value};

pub const COMMAND: &str = "BACK";

lazy_static! {
    /// Matches `MON/TIMES t1 t2`.
    static ref ALL_MONITORS_RE: Regex = Regex::new(&format!(
        r"(?i)^MON\s*/\s*TIMES\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `M<n>/TIMES t1 t2` and the short form `M<n> t1 t2`.
    static ref SINGLE_MONITOR_RE: Regex = Regex::new(&format!(
        r"(?i)^M(\d+)(?:\s*/\s*TIMES)?\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `M<n>/OFF`.
    static ref MONITOR_OFF_RE: Regex = Regex::new(r"(?i)^M(\d+)\s*/\s*OFF$").unwrap();

    /// Matches `TRANS t1 t2`.
    static ref TRANS_RE: Regex = Regex::new(&format!(
        r"(?i)^TRANS\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = ALL_MONITORS_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::BackAllMonitors, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = MONITOR_OFF_RE.captures(body) {
        settings.insert(Key::BackMonitorOff, Value::Int(parse_int(&caps[1])?));
        return Ok(settings);
    }

    if let Some(caps) = SINGLE_MONITOR_RE.captures(body) {
        let entry = BackSingleMonitorEntry {
            monitor: parse_int(&caps[1])?,
            start: parse_float(&caps[2])?,
            stop: parse_float(&caps[3])?,
        };
        settings.insert(Key::BackSingleMonitors, Value::BackMonitor(entry));
        return Ok(settings);
    }

    if let Some(caps) = TRANS_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::BackTrans, Value::Range(range));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_monitors() {
        let settings = parse("MON/TIMES 1000 2000", "BACK/MON/TIMES 1000 2000").unwrap();
        assert_eq!(
            settings[&Key::BackAllMonitors],
            Value::Range(RangeEntry::new(1000.0, 2000.0))
        );
    }

    #[test]
    fn test_single_monitor_with_times() {
        let settings = parse("M3/TIMES 480 1000", "BACK/M3/TIMES 480 1000").unwrap();
        assert_eq!(
            settings[&Key::BackSingleMonitors],
            Value::BackMonitor(BackSingleMonitorEntry {
                monitor: 3,
                start: 480.0,
                stop: 1000.0,
            })
        );
    }

    #[test]
    fn test_single_monitor_short_form() {
        let settings = parse("M2 85 98", "BACK/M2 85 98").unwrap();
        assert_eq!(
            settings[&Key::BackSingleMonitors],
            Value::BackMonitor(BackSingleMonitorEntry {
                monitor: 2,
                start: 85.0,
                stop: 98.0,
            })
        );
    }

    #[test]
    fn test_monitor_off() {
        let settings = parse("M4/OFF", "BACK/M4/OFF").unwrap();
        assert_eq!(settings[&Key::BackMonitorOff], Value::Int(4));
    }

    #[test]
    fn test_trans_window() {
        let settings = parse("TRANS 120 280", "BACK/TRANS 120 280").unwrap();
        assert_eq!(
            settings[&Key::BackTrans],
            Value::Range(RangeEntry::new(120.0, 280.0))
        );
    }

    #[test]
    fn test_unknown_subcommand() {
        match parse("MON/WRONG 1 2", "BACK/MON/WRONG 1 2") {
            Err(ParseError::UnknownSubcommand { command, line }) => {
                assert_eq!(command, "BACK");
                assert_eq!(line, "BACK/MON/WRONG 1 2");
            }
            other => panic!("Expected UnknownSubcommand, got {:?}", other),
        }
    }
}
