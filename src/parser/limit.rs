//! `L` family: reduction limits - angle wedges, radius, event binning, and
//! the Q/Qxy/wavelength binning ranges.
//!
//! Sub-grammars, tried in order:
//! - `PHI[/NOMIRROR] a1 a2` - angle wedge mask
//! - `EVENTSTIME <binning>` - event time binning, taken verbatim
//! - `Q/RCUT v`, `Q/WCUT v` - radius and wavelength cutoffs
//! - `R r1 r2` - radius limits
//! - `SP s1 s2` - spectrum limits
//! - `Q`/`QXY`/`WAV` ranges - either `a b [s[/LIN|/LOG]]` or the 5-value
//!   comma form `a,s1,m,s2,b[/LIN|/LOG]` (not for `WAV`)
//!
//! The comma form is tried before the space form so a stray comma never
//! half-matches as a two-value range.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{parse_csv_floats, parse_float};
use super::patterns::{FLOAT, STEP, UNSIGNED};
use crate::error::ParseError;
use crate::model::{
    ComplexRange, Key, MaskAngleEntry, RangeEntry, Settings, SimpleRange, StepType, Value,
};

pub const COMMAND: &str = "L";

lazy_static! {
    /// Matches `PHI[/NOMIRROR] a1 a2`.
    static ref PHI_RE: Regex = Regex::new(&format!(
        r"(?i)^PHI(/\s*NOMIRROR)?\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `EVENTSTIME <rest>`; the binning string is kept verbatim.
    static ref EVENTS_TIME_RE: Regex = Regex::new(r"(?i)^EVENTSTIME\s+(.+)$").unwrap();

    /// Matches `Q/RCUT v` and `Q/WCUT v`.
    static ref CUT_RE: Regex = Regex::new(&format!(
        r"(?i)^Q\s*/\s*(RCUT|WCUT)\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `R r1 r2`.
    static ref RADIUS_RE: Regex = Regex::new(&format!(
        r"(?i)^R\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `SP s1 s2` (integer spectrum numbers).
    static ref SPECTRUM_RE: Regex = Regex::new(&format!(
        r"(?i)^SP\s+({u})\s+({u})$",
        u = UNSIGNED
    ))
    .unwrap();

    /// Matches the 5-value comma form of `Q`/`QXY`: the value list is
    /// captured loosely and validated by arity afterwards.
    static ref COMPLEX_RANGE_RE: Regex = Regex::new(&format!(
        r"(?i)^(Q|QXY)\s+([\d.eE+\-\s]*,[\d.eE+\-\s,]*?)(?:\s*/\s*({s}))?$",
        s = STEP
    ))
    .unwrap();

    /// Matches the space form `a b [s[/LIN|/LOG]]` of `Q`/`QXY`/`WAV`.
    static ref SIMPLE_RANGE_RE: Regex = Regex::new(&format!(
        r"(?i)^(Q|QXY|WAV)\s+({f})\s+({f})(?:\s+({f})(?:\s*/\s*({s}))?)?$",
        f = FLOAT,
        s = STEP
    ))
    .unwrap();
}

fn axis_key(axis: &str) -> Key {
    match axis.to_ascii_uppercase().as_str() {
        "Q" => Key::LimitsQ,
        "QXY" => Key::LimitsQxy,
        _ => Key::LimitsWavelength,
    }
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = PHI_RE.captures(body) {
        let entry = MaskAngleEntry {
            min: parse_float(&caps[2])?,
            max: parse_float(&caps[3])?,
            use_mirror: caps.get(1).is_none(),
        };
        settings.insert(Key::LimitsAngle, Value::Angle(entry));
        return Ok(settings);
    }

    if let Some(caps) = EVENTS_TIME_RE.captures(body) {
        settings.insert(Key::LimitsEvents, Value::Text(caps[1].trim().to_string()));
        return Ok(settings);
    }

    if let Some(caps) = CUT_RE.captures(body) {
        let key = if caps[1].eq_ignore_ascii_case("RCUT") {
            Key::LimitsRadiusCut
        } else {
            Key::LimitsWavelengthCut
        };
        settings.insert(key, Value::Float(parse_float(&caps[2])?));
        return Ok(settings);
    }

    if let Some(caps) = RADIUS_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::LimitsRadius, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = SPECTRUM_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::LimitsSpectrum, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = COMPLEX_RANGE_RE.captures(body) {
        let values = parse_csv_floats(caps[2].trim(), 5)?;
        let step_type = caps
            .get(3)
            .and_then(|m| StepType::from_suffix(m.as_str()))
            .unwrap_or_default();
        let range = ComplexRange {
            start: values[0],
            step1: values[1],
            mid: values[2],
            step2: values[3],
            stop: values[4],
            step_type,
        };
        settings.insert(axis_key(&caps[1]), Value::ComplexRange(range));
        return Ok(settings);
    }

    if let Some(caps) = SIMPLE_RANGE_RE.captures(body) {
        let step = match caps.get(4) {
            Some(m) => Some(parse_float(m.as_str())?),
            None => None,
        };
        let step_type = match step {
            Some(_) => Some(
                caps.get(5)
                    .and_then(|m| StepType::from_suffix(m.as_str()))
                    .unwrap_or_default(),
            ),
            None => None,
        };
        let range = SimpleRange {
            start: parse_float(&caps[2])?,
            stop: parse_float(&caps[3])?,
            step,
            step_type,
        };
        settings.insert(axis_key(&caps[1]), Value::SimpleRange(range));
        return Ok(settings);
    }

    Err(ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    })
}
