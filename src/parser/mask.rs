//! `MASK` family: time masks, spectrum masks, strip masks, and the composed
//! block/cross masks.
//!
//! Sub-grammars, tried in order:
//! - `CLEAR[/TIME]` - drop accumulated detector or time masks
//! - `[/det]/T|TIME t1 t2` - time window mask, optionally per bank
//! - `LINE w a [x y]` - line mask
//! - `S<n>` and `S<a>>S<b>` - spectrum masks
//! - `[/det] <strip-expr>` - strip expression: one strip (`H5`, `V3>V8`),
//!   or two strips joined by `+` forming a block (both ranged) or a cross
//!   (both single)
//!
//! Block forms are handled after the simpler spellings but before the bare
//! single strips they are built from, by parsing the `+`-composition in one
//! place: whichever half is horizontal or vertical is detected by its
//! leading letter, and mixed ranged/single halves are rejected.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{detector_or_default, parse_float, parse_int};
use super::patterns::{DETECTOR, FLOAT};
use crate::error::ParseError;
use crate::model::{
    DetectorType, Key, MaskBlock, MaskBlockCross, MaskLine, RangeEntry,
    RangeEntryWithDetector, Settings, SingleEntryWithDetector, Value,
};

pub const COMMAND: &str = "MASK";

lazy_static! {
    /// Matches `CLEAR` and `CLEAR/TIME`.
    static ref CLEAR_RE: Regex =
        Regex::new(r"(?i)^/?\s*CLEAR(\s*/\s*TIME)?$").unwrap();

    /// Matches `/det/T|TIME t1 t2`.
    static ref TIME_DETECTOR_RE: Regex = Regex::new(&format!(
        r"(?i)^/?\s*({d})\s*/\s*T(?:IME)?\s+({f})\s+({f})$",
        d = DETECTOR,
        f = FLOAT
    ))
    .unwrap();

    /// Matches `T|TIME t1 t2` without a bank qualifier.
    static ref TIME_RE: Regex = Regex::new(&format!(
        r"(?i)^/?\s*T(?:IME)?\s+({f})\s+({f})$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `LINE <numbers>`; arity (2 or 4) is validated afterwards.
    static ref LINE_RE: Regex = Regex::new(r"(?i)^/?\s*LINE\s+(.+)$").unwrap();

    /// Matches the spectrum range `S<a>>S<b>`.
    static ref SPECTRUM_RANGE_RE: Regex =
        Regex::new(r"(?i)^S(\d+)\s*>\s*S(\d+)$").unwrap();

    /// Matches a single spectrum `S<n>`.
    static ref SPECTRUM_RE: Regex = Regex::new(r"(?i)^S(\d+)$").unwrap();

    /// Peels an optional `/det ` qualifier off a strip expression.
    static ref STRIP_PREFIX_RE: Regex = Regex::new(&format!(
        r"(?i)^(?:/\s*({d})\s+)?(.+)$",
        d = DETECTOR
    ))
    .unwrap();

    /// One ranged strip half, `H<a>>H<b>` or `V<a>>V<b>`.
    static ref RANGE_STRIP_RE: Regex =
        Regex::new(r"(?i)^([HV])(\d+)\s*>\s*([HV])(\d+)$").unwrap();

    /// One single strip half, `H<n>` or `V<n>`.
    static ref SINGLE_STRIP_RE: Regex = Regex::new(r"(?i)^([HV])(\d+)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StripAxis {
    Horizontal,
    Vertical,
}

/// One half of a strip expression, already split on `+`.
#[derive(Debug, Clone, Copy)]
struct Strip {
    axis: StripAxis,
    first: f64,
    second: Option<f64>,
}

fn axis_of(letter: &str) -> StripAxis {
    if letter.eq_ignore_ascii_case("H") {
        StripAxis::Horizontal
    } else {
        StripAxis::Vertical
    }
}

fn parse_strip(part: &str) -> Option<Strip> {
    let part = part.trim();
    if let Some(caps) = RANGE_STRIP_RE.captures(part) {
        if !caps[1].eq_ignore_ascii_case(&caps[3]) {
            return None;
        }
        return Some(Strip {
            axis: axis_of(&caps[1]),
            first: caps[2].parse().ok()?,
            second: Some(caps[4].parse().ok()?),
        });
    }
    if let Some(caps) = SINGLE_STRIP_RE.captures(part) {
        return Some(Strip {
            axis: axis_of(&caps[1]),
            first: caps[2].parse().ok()?,
            second: None,
        });
    }
    None
}

fn single_strip_setting(strip: Strip, detector: DetectorType, settings: &mut Settings) {
    match strip.second {
        Some(stop) => {
            let key = match strip.axis {
                StripAxis::Horizontal => Key::MaskHorizontalRangeStrip,
                StripAxis::Vertical => Key::MaskVerticalRangeStrip,
            };
            settings.insert(
                key,
                Value::DetectorRange(RangeEntryWithDetector {
                    start: strip.first,
                    stop,
                    detector,
                }),
            );
        }
        None => {
            let key = match strip.axis {
                StripAxis::Horizontal => Key::MaskHorizontalSingleStrip,
                StripAxis::Vertical => Key::MaskVerticalSingleStrip,
            };
            settings.insert(
                key,
                Value::DetectorScalar(SingleEntryWithDetector {
                    entry: strip.first,
                    detector,
                }),
            );
        }
    }
}

/// Compose two strips into a block (both ranged) or a cross (both single).
/// Mixed forms and same-axis pairs are grammar violations.
fn block_setting(
    a: Strip,
    b: Strip,
    detector: DetectorType,
    settings: &mut Settings,
) -> bool {
    if a.axis == b.axis {
        return false;
    }
    let (h, v) = if a.axis == StripAxis::Horizontal {
        (a, b)
    } else {
        (b, a)
    };
    match (h.second, v.second) {
        (Some(h2), Some(v2)) => {
            settings.insert(
                Key::MaskBlock,
                Value::Block(MaskBlock {
                    horizontal1: h.first,
                    horizontal2: h2,
                    vertical1: v.first,
                    vertical2: v2,
                    detector,
                }),
            );
            true
        }
        (None, None) => {
            settings.insert(
                Key::MaskBlockCross,
                Value::BlockCross(MaskBlockCross {
                    horizontal: h.first,
                    vertical: v.first,
                    detector,
                }),
            );
            true
        }
        _ => false,
    }
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();
    let unknown = || ParseError::UnknownSubcommand {
        command: COMMAND,
        line: line.to_string(),
    };

    if let Some(caps) = CLEAR_RE.captures(body) {
        let key = if caps.get(1).is_some() {
            Key::MaskClearTime
        } else {
            Key::MaskClearDetector
        };
        settings.insert(key, Value::Bool(true));
        return Ok(settings);
    }

    if let Some(caps) = TIME_DETECTOR_RE.captures(body) {
        let range = RangeEntryWithDetector {
            start: parse_float(&caps[2])?,
            stop: parse_float(&caps[3])?,
            detector: detector_or_default(Some(&caps[1])),
        };
        settings.insert(Key::MaskTimeDetector, Value::DetectorRange(range));
        return Ok(settings);
    }

    if let Some(caps) = TIME_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::MaskTime, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = LINE_RE.captures(body) {
        let tokens: Vec<&str> = caps[1].split_whitespace().collect();
        let values: Vec<f64> = tokens
            .iter()
            .map(|t| parse_float(t))
            .collect::<Result<_, _>>()?;
        let mask = match values.as_slice() {
            [width, angle] => MaskLine {
                width: *width,
                angle: *angle,
                x: None,
                y: None,
            },
            [width, angle, x, y] => MaskLine {
                width: *width,
                angle: *angle,
                x: Some(*x),
                y: Some(*y),
            },
            _ => {
                let expected = if values.len() < 2 { 2 } else { 4 };
                return Err(ParseError::Arity {
                    expected,
                    actual: values.len(),
                });
            }
        };
        settings.insert(Key::MaskLine, Value::Line(mask));
        return Ok(settings);
    }

    if let Some(caps) = SPECTRUM_RANGE_RE.captures(body) {
        let range = RangeEntry::new(parse_float(&caps[1])?, parse_float(&caps[2])?);
        settings.insert(Key::MaskSpectrumRange, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = SPECTRUM_RE.captures(body) {
        settings.insert(Key::MaskSingleSpectrum, Value::Int(parse_int(&caps[1])?));
        return Ok(settings);
    }

    // Strip expressions, with an optional bank qualifier ahead of them.
    if let Some(caps) = STRIP_PREFIX_RE.captures(body) {
        let detector = detector_or_default(caps.get(1).map(|m| m.as_str()));
        let expr = caps[2].trim();
        let parts: Vec<&str> = expr.split('+').collect();
        match parts.as_slice() {
            [only] => {
                if let Some(strip) = parse_strip(only) {
                    single_strip_setting(strip, detector, &mut settings);
                    return Ok(settings);
                }
            }
            [first, second] => {
                if let (Some(a), Some(b)) = (parse_strip(first), parse_strip(second)) {
                    if block_setting(a, b, detector, &mut settings) {
                        return Ok(settings);
                    }
                }
                return Err(unknown());
            }
            _ => {}
        }
    }

    Err(unknown())
}
