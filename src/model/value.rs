//! Structured values produced by the command grammars

use serde::{Deserialize, Serialize};

use super::types::{DetectorType, FitFunction, ReductionMode, StepType};

/// Plain numeric interval. Bounds are optional because some grammars
/// (rescale/shift fit) accept the bare form meaning "full range"; the
/// sentinel is never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    pub start: Option<f64>,
    pub stop: Option<f64>,
}

impl RangeEntry {
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
        }
    }

    pub fn open() -> Self {
        Self {
            start: None,
            stop: None,
        }
    }
}

/// Interval qualified by the detector bank it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeEntryWithDetector {
    pub start: f64,
    pub stop: f64,
    pub detector: DetectorType,
}

/// Interval with an optional uniform step. `step` and `step_type` are either
/// both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleRange {
    pub start: f64,
    pub stop: f64,
    pub step: Option<f64>,
    pub step_type: Option<StepType>,
}

/// Five-point piecewise range (coarse, fine, coarse) for Q/Qxy binning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexRange {
    pub start: f64,
    pub step1: f64,
    pub mid: f64,
    pub step2: f64,
    pub stop: f64,
    pub step_type: StepType,
}

/// 2D coordinate with a detector qualifier (beam centre).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionEntry {
    pub pos1: f64,
    pub pos2: f64,
    pub detector: DetectorType,
}

/// Scalar qualified by detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SingleEntryWithDetector {
    pub entry: f64,
    pub detector: DetectorType,
}

/// Rectangular pixel mask built from two range strips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskBlock {
    pub horizontal1: f64,
    pub horizontal2: f64,
    pub vertical1: f64,
    pub vertical2: f64,
    pub detector: DetectorType,
}

/// Cross pixel mask built from two single strips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskBlockCross {
    pub horizontal: f64,
    pub vertical: f64,
    pub detector: DetectorType,
}

/// Line-shaped mask; position is optional.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskLine {
    pub width: f64,
    pub angle: f64,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Angle wedge mask from `L/PHI`. Angles are stored as written; the
/// wrap/mirror algebra is a downstream concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaskAngleEntry {
    pub min: f64,
    pub max: f64,
    pub use_mirror: bool,
}

/// Monitor flood/direct file with a detector qualifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorFile {
    pub file_path: String,
    pub detector: DetectorType,
}

/// Incident monitor spectrum selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorSpectrum {
    pub spectrum: i64,
    pub is_trans: bool,
    pub interpolate: bool,
}

/// Monitor length setting (`MON/LENGTH=l s`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonitorLength {
    pub length: f64,
    pub spectrum: i64,
    pub interpolate: bool,
}

/// The five scale factors of `SET SCALES`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetScalesEntry {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Background time window for a single monitor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackSingleMonitorEntry {
    pub monitor: i64,
    pub start: f64,
    pub stop: f64,
}

/// Transmission fit selection with optional wavelength bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransFitEntry {
    pub function: FitFunction,
    pub start: Option<f64>,
    pub stop: Option<f64>,
}

/// Tagged union over every value shape a grammar can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Range(RangeEntry),
    DetectorRange(RangeEntryWithDetector),
    SimpleRange(SimpleRange),
    ComplexRange(ComplexRange),
    Position(PositionEntry),
    DetectorScalar(SingleEntryWithDetector),
    Block(MaskBlock),
    BlockCross(MaskBlockCross),
    Line(MaskLine),
    Angle(MaskAngleEntry),
    MonitorFile(MonitorFile),
    MonitorSpectrum(MonitorSpectrum),
    MonitorLength(MonitorLength),
    Scales(SetScalesEntry),
    BackMonitor(BackSingleMonitorEntry),
    TransFit(TransFitEntry),
    Reduction(ReductionMode),
    Float(f64),
    Int(i64),
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Range(r) => write!(f, "{} {}", fmt_opt(r.start), fmt_opt(r.stop)),
            Value::DetectorRange(r) => {
                write!(f, "{} {} [{}]", r.start, r.stop, r.detector)
            }
            Value::SimpleRange(r) => {
                write!(f, "{} {}", r.start, r.stop)?;
                if let (Some(step), Some(step_type)) = (r.step, r.step_type) {
                    write!(f, " {}/{}", step, step_type)?;
                }
                Ok(())
            }
            Value::ComplexRange(r) => write!(
                f,
                "{},{},{},{},{}/{}",
                r.start, r.step1, r.mid, r.step2, r.stop, r.step_type
            ),
            Value::Position(p) => write!(f, "{} {} [{}]", p.pos1, p.pos2, p.detector),
            Value::DetectorScalar(s) => write!(f, "{} [{}]", s.entry, s.detector),
            Value::Block(b) => write!(
                f,
                "H{}>H{}+V{}>V{} [{}]",
                b.horizontal1, b.horizontal2, b.vertical1, b.vertical2, b.detector
            ),
            Value::BlockCross(b) => {
                write!(f, "H{}+V{} [{}]", b.horizontal, b.vertical, b.detector)
            }
            Value::Line(l) => {
                write!(f, "width {} angle {}", l.width, l.angle)?;
                if let (Some(x), Some(y)) = (l.x, l.y) {
                    write!(f, " at {} {}", x, y)?;
                }
                Ok(())
            }
            Value::Angle(a) => {
                write!(f, "{} {}", a.min, a.max)?;
                if !a.use_mirror {
                    write!(f, " (no mirror)")?;
                }
                Ok(())
            }
            Value::MonitorFile(m) => write!(f, "{} [{}]", m.file_path, m.detector),
            Value::MonitorSpectrum(m) => {
                write!(f, "spectrum {}", m.spectrum)?;
                if m.is_trans {
                    write!(f, " trans")?;
                }
                if m.interpolate {
                    write!(f, " interpolate")?;
                }
                Ok(())
            }
            Value::MonitorLength(m) => {
                write!(f, "length {} spectrum {}", m.length, m.spectrum)?;
                if m.interpolate {
                    write!(f, " interpolate")?;
                }
                Ok(())
            }
            Value::Scales(s) => {
                write!(f, "{} {} {} {} {}", s.s, s.a, s.b, s.c, s.d)
            }
            Value::BackMonitor(b) => {
                write!(f, "M{} {} {}", b.monitor, b.start, b.stop)
            }
            Value::TransFit(t) => {
                write!(f, "{}", t.function)?;
                if let (Some(start), Some(stop)) = (t.start, t.stop) {
                    write!(f, " {} {}", start, stop)?;
                }
                Ok(())
            }
            Value::Reduction(mode) => write!(f, "{}", mode),
            Value::Float(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", if *v { "on" } else { "off" }),
            Value::Text(s) => write!(f, "{}", s),
            Value::TextList(items) => write!(f, "{}", items.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_entry_open() {
        let range = RangeEntry::open();
        assert_eq!(range.start, None);
        assert_eq!(range.stop, None);
        assert_eq!(format!("{}", Value::Range(range)), "- -");
    }

    #[test]
    fn test_simple_range_display() {
        let range = SimpleRange {
            start: 0.1,
            stop: 0.5,
            step: Some(0.01),
            step_type: Some(StepType::Log),
        };
        assert_eq!(format!("{}", Value::SimpleRange(range)), "0.1 0.5 0.01/LOG");
    }

    #[test]
    fn test_block_display_carries_detector() {
        let block = MaskBlock {
            horizontal1: 0.0,
            horizontal2: 5.0,
            vertical1: 0.0,
            vertical2: 10.0,
            detector: DetectorType::Lab,
        };
        assert_eq!(format!("{}", Value::Block(block)), "H0>H5+V0>V10 [LAB]");
    }

    #[test]
    fn test_bool_display() {
        assert_eq!(format!("{}", Value::Bool(true)), "on");
        assert_eq!(format!("{}", Value::Bool(false)), "off");
    }
}
