//! Data model: setting keys, structured values, and the file aggregate

mod key;
mod settings;
mod types;
mod value;

pub use key::{CommandFamily, Key};
pub use settings::{LineError, SettingRecord, Settings, UserFileSettings};
pub use types::{DataType, DetectorType, FitFunction, ReductionMode, StepType};
pub use value::{
    BackSingleMonitorEntry, ComplexRange, MaskAngleEntry, MaskBlock, MaskBlockCross,
    MaskLine, MonitorFile, MonitorLength, MonitorSpectrum, PositionEntry, RangeEntry,
    RangeEntryWithDetector, SetScalesEntry, SimpleRange, SingleEntryWithDetector,
    TransFitEntry, Value,
};
