//! `DET` family: reduction mode selection, per-bank geometry corrections,
//! and the merged-reduction rescale/shift controls.
//!
//! Sub-grammars, tried in order:
//! - `REAR|MAIN|LAB|FRONT|HAB|BOTH|MERGED|MERGE` - reduction mode
//! - `CORR/<det>/<axis> v` - geometry correction for one bank
//! - `RESCALE/FIT [q1 q2]`, `SHIFT/FIT [q1 q2]` - fit ranges (bounds optional)
//! - `RESCALE v`, `SHIFT v` - fixed factors
//!
//! The fit forms are tried before the fixed-factor forms they extend.

use lazy_static::lazy_static;
use regex::Regex;

use super::common::{detector_or_default, parse_float};
use super::patterns::{DETECTOR, FLOAT};
use crate::error::ParseError;
use crate::model::{
    Key, RangeEntry, ReductionMode, Settings, SingleEntryWithDetector, Value,
};

pub const COMMAND: &str = "DET";

lazy_static! {
    /// Matches a bare reduction-mode word.
    static ref REDUCTION_MODE_RE: Regex =
        Regex::new(r"(?i)^(REAR|MAIN|LAB|FRONT|HAB|BOTH|MERGED|MERGE)$").unwrap();

    /// Matches `CORR/<det>/<axis> v`. Axis alternatives list the tilt forms
    /// before the bare axis letters.
    static ref CORRECTION_RE: Regex = Regex::new(&format!(
        r"(?i)^CORR\s*/\s*({d})\s*/\s*(XTILT|YTILT|RADIUS|ROT|SIDE|X|Y|Z)\s+({f})$",
        d = DETECTOR,
        f = FLOAT
    ))
    .unwrap();

    /// Matches `RESCALE/FIT [q1 q2]` and `SHIFT/FIT [q1 q2]`.
    static ref FACTOR_FIT_RE: Regex = Regex::new(&format!(
        r"(?i)^(RESCALE|SHIFT)\s*/\s*FIT(?:\s+({f})\s+({f}))?$",
        f = FLOAT
    ))
    .unwrap();

    /// Matches `RESCALE v` and `SHIFT v`.
    static ref FACTOR_RE: Regex = Regex::new(&format!(
        r"(?i)^(RESCALE|SHIFT)\s+({f})$",
        f = FLOAT
    ))
    .unwrap();
}

fn reduction_mode(token: &str) -> ReductionMode {
    match token.to_ascii_uppercase().as_str() {
        "FRONT" | "HAB" => ReductionMode::Hab,
        "BOTH" => ReductionMode::All,
        "MERGED" | "MERGE" => ReductionMode::Merged,
        _ => ReductionMode::Lab,
    }
}

fn correction_key(axis: &str) -> Key {
    match axis.to_ascii_uppercase().as_str() {
        "X" => Key::DetCorrectionX,
        "Y" => Key::DetCorrectionY,
        "Z" => Key::DetCorrectionZ,
        "ROT" => Key::DetCorrectionRotation,
        "RADIUS" => Key::DetCorrectionRadius,
        "SIDE" => Key::DetCorrectionTranslation,
        "XTILT" => Key::DetCorrectionXTilt,
        _ => Key::DetCorrectionYTilt,
    }
}

pub fn parse(body: &str, line: &str) -> Result<Settings, ParseError> {
    let body = body.trim();
    let mut settings = Settings::new();

    if let Some(caps) = REDUCTION_MODE_RE.captures(body) {
        settings.insert(
            Key::DetReductionMode,
            Value::Reduction(reduction_mode(&caps[1])),
        );
        return Ok(settings);
    }

    if let Some(caps) = CORRECTION_RE.captures(body) {
        let entry = SingleEntryWithDetector {
            entry: parse_float(&caps[3])?,
            detector: detector_or_default(Some(&caps[1])),
        };
        settings.insert(correction_key(&caps[2]), Value::DetectorScalar(entry));
        return Ok(settings);
    }

    if let Some(caps) = FACTOR_FIT_RE.captures(body) {
        let range = match (caps.get(2), caps.get(3)) {
            (Some(start), Some(stop)) => {
                let start = parse_float(start.as_str())?;
                let stop = parse_float(stop.as_str())?;
                if start > stop {
                    return Err(ParseError::RangeOrder { start, stop });
                }
                RangeEntry::new(start, stop)
            }
            _ => RangeEntry::open(),
        };
        let key = if caps[1].eq_ignore_ascii_case("RESCALE") {
            Key::DetRescaleFit
        } else {
            Key::DetShiftFit
        };
        settings.insert(key, Value::Range(range));
        return Ok(settings);
    }

    if let Some(caps) = FACTOR_RE.captures(body) {
        let key = if caps[1].eq_ignore_ascii_case("RESCALE") {
            Key::DetRescale
        } else {
            Key::DetShift
        };
        settings.insert(key, Value::Float(parse_float(&caps[2])?));
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
    use crate::model::DetectorType;

    #[test]
    fn test_reduction_mode_synonyms() {
        for (token, mode) in [
            ("REAR", ReductionMode::Lab),
            ("MAIN", ReductionMode::Lab),
            ("front", ReductionMode::Hab),
            ("BOTH", ReductionMode::All),
            ("MERGE", ReductionMode::Merged),
            ("MERGED", ReductionMode::Merged),
        ] {
            let settings = parse(token, token).unwrap();
            assert_eq!(
                settings[&Key::DetReductionMode],
                Value::Reduction(mode),
                "token {}",
                token
            );
        }
    }

    #[test]
    fn test_correction_rear_x() {
        let settings = parse("CORR/REAR/X 1.5", "DET/CORR/REAR/X 1.5").unwrap();
        assert_eq!(
            settings[&Key::DetCorrectionX],
            Value::DetectorScalar(SingleEntryWithDetector {
                entry: 1.5,
                detector: DetectorType::Lab,
            })
        );
    }

    #[test]
    fn test_correction_front_overrides_default() {
        let settings = parse("CORR/FRONT/X 1.5", "DET/CORR/FRONT/X 1.5").unwrap();
        assert_eq!(
            settings[&Key::DetCorrectionX],
            Value::DetectorScalar(SingleEntryWithDetector {
                entry: 1.5,
                detector: DetectorType::Hab,
            })
        );
    }

    #[test]
    fn test_correction_tilt_axis_not_shadowed() {
        let settings = parse("CORR/REAR/XTILT 0.02", "DET/CORR/REAR/XTILT 0.02").unwrap();
        assert!(settings.contains_key(&Key::DetCorrectionXTilt));
    }

    #[test]
    fn test_correction_side() {
        let settings = parse("CORR/FRONT/SIDE -1.1", "DET/CORR/FRONT/SIDE -1.1").unwrap();
        assert_eq!(
            settings[&Key::DetCorrectionTranslation],
            Value::DetectorScalar(SingleEntryWithDetector {
                entry: -1.1,
                detector: DetectorType::Hab,
            })
        );
    }

    #[test]
    fn test_rescale_fixed() {
        let settings = parse("RESCALE 7.2", "DET/RESCALE 7.2").unwrap();
        assert_eq!(settings[&Key::DetRescale], Value::Float(7.2));
    }

    #[test]
    fn test_rescale_fit_with_bounds() {
        let settings = parse("RESCALE/FIT 0.14 0.24", "DET/RESCALE/FIT 0.14 0.24").unwrap();
        assert_eq!(
            settings[&Key::DetRescaleFit],
            Value::Range(RangeEntry::new(0.14, 0.24))
        );
    }

    #[test]
    fn test_shift_fit_without_bounds_is_open() {
        let settings = parse("SHIFT/FIT", "DET/SHIFT/FIT").unwrap();
        assert_eq!(settings[&Key::DetShiftFit], Value::Range(RangeEntry::open()));
    }

    #[test]
    fn test_fit_bounds_out_of_order() {
        match parse("RESCALE/FIT 0.24 0.14", "DET/RESCALE/FIT 0.24 0.14") {
            Err(ParseError::RangeOrder { start, stop }) => {
                assert_eq!(start, 0.24);
                assert_eq!(stop, 0.14);
            }
            other => panic!("Expected RangeOrder, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(matches!(
            parse("SIDEWAYS 1", "DET/SIDEWAYS 1"),
            Err(ParseError::UnknownSubcommand { command: "DET", .. })
        ));
    }
}
