//! Setting keys and the command families that own them

use serde::{Deserialize, Serialize};

/// Command family a key belongs to, used for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandFamily {
    Back,
    Det,
    Limits,
    Mask,
    Sample,
    Set,
    Trans,
    TubeCalib,
    QResolution,
    Fit,
    Gravity,
    Mon,
    Print,
}

impl CommandFamily {
    pub fn name(&self) -> &'static str {
        match self {
            CommandFamily::Back => "back",
            CommandFamily::Det => "det",
            CommandFamily::Limits => "limits",
            CommandFamily::Mask => "mask",
            CommandFamily::Sample => "sample",
            CommandFamily::Set => "set",
            CommandFamily::Trans => "trans",
            CommandFamily::TubeCalib => "tubecalib",
            CommandFamily::QResolution => "qresolution",
            CommandFamily::Fit => "fit",
            CommandFamily::Gravity => "gravity",
            CommandFamily::Mon => "mon",
            CommandFamily::Print => "print",
        }
    }
}

impl std::fmt::Display for CommandFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for CommandFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "back" => Ok(CommandFamily::Back),
            "det" => Ok(CommandFamily::Det),
            "limits" | "limit" | "l" => Ok(CommandFamily::Limits),
            "mask" => Ok(CommandFamily::Mask),
            "sample" => Ok(CommandFamily::Sample),
            "set" => Ok(CommandFamily::Set),
            "trans" => Ok(CommandFamily::Trans),
            "tubecalib" | "tubecalibfile" => Ok(CommandFamily::TubeCalib),
            "qresolution" | "qresol" => Ok(CommandFamily::QResolution),
            "fit" => Ok(CommandFamily::Fit),
            "gravity" => Ok(CommandFamily::Gravity),
            "mon" => Ok(CommandFamily::Mon),
            "print" => Ok(CommandFamily::Print),
            _ => Err(format!("Unknown command family: {}", s)),
        }
    }
}

/// Canonical key for one parsed setting.
///
/// The set is closed: every sub-grammar of every command family maps to a
/// fixed key (or a fixed pair of keys, e.g. a transmission fit with no
/// SAMPLE/CAN qualifier).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    // BACK
    BackAllMonitors,
    BackSingleMonitors,
    BackMonitorOff,
    BackTrans,
    // DET
    DetReductionMode,
    DetRescale,
    DetShift,
    DetRescaleFit,
    DetShiftFit,
    DetCorrectionX,
    DetCorrectionY,
    DetCorrectionZ,
    DetCorrectionRotation,
    DetCorrectionRadius,
    DetCorrectionTranslation,
    DetCorrectionXTilt,
    DetCorrectionYTilt,
    // LIMIT
    LimitsAngle,
    LimitsEvents,
    LimitsRadius,
    LimitsRadiusCut,
    LimitsWavelengthCut,
    LimitsQ,
    LimitsQxy,
    LimitsWavelength,
    LimitsSpectrum,
    // MASK / MASKFILE
    MaskClearDetector,
    MaskClearTime,
    MaskTime,
    MaskTimeDetector,
    MaskBlock,
    MaskBlockCross,
    MaskHorizontalSingleStrip,
    MaskHorizontalRangeStrip,
    MaskVerticalSingleStrip,
    MaskVerticalRangeStrip,
    MaskSingleSpectrum,
    MaskSpectrumRange,
    MaskLine,
    MaskFiles,
    // SAMPLE
    SampleOffset,
    SamplePath,
    // SET
    SetCentre,
    SetCentreHab,
    SetScales,
    // TRANS
    TransSpectrum,
    TransSpectrumShift,
    TransRadius,
    TransRoi,
    TransMask,
    TransSampleWorkspace,
    TransCanWorkspace,
    // TUBECALIBFILE
    TubeCalibFile,
    // QRESOLUTION
    QResolutionOn,
    QResolutionDeltaR,
    QResolutionA1,
    QResolutionA2,
    QResolutionH1,
    QResolutionW1,
    QResolutionH2,
    QResolutionW2,
    QResolutionCollimationLength,
    QResolutionModerator,
    // FIT
    FitClear,
    FitSample,
    FitCan,
    FitMonitorTimes,
    // GRAVITY
    GravityOn,
    GravityExtraLength,
    // MON
    MonLength,
    MonSpectrum,
    MonDirect,
    MonFlat,
    MonHab,
    // PRINT
    PrintLine,
}

impl Key {
    pub fn family(&self) -> CommandFamily {
        use Key::*;
        match self {
            BackAllMonitors | BackSingleMonitors | BackMonitorOff | BackTrans => {
                CommandFamily::Back
            }
            DetReductionMode | DetRescale | DetShift | DetRescaleFit | DetShiftFit
            | DetCorrectionX | DetCorrectionY | DetCorrectionZ | DetCorrectionRotation
            | DetCorrectionRadius | DetCorrectionTranslation | DetCorrectionXTilt
            | DetCorrectionYTilt => CommandFamily::Det,
            LimitsAngle | LimitsEvents | LimitsRadius | LimitsRadiusCut
            | LimitsWavelengthCut | LimitsQ | LimitsQxy | LimitsWavelength
            | LimitsSpectrum => CommandFamily::Limits,
            MaskClearDetector | MaskClearTime | MaskTime | MaskTimeDetector | MaskBlock
            | MaskBlockCross | MaskHorizontalSingleStrip | MaskHorizontalRangeStrip
            | MaskVerticalSingleStrip | MaskVerticalRangeStrip | MaskSingleSpectrum
            | MaskSpectrumRange | MaskLine | MaskFiles => CommandFamily::Mask,
            SampleOffset | SamplePath => CommandFamily::Sample,
            SetCentre | SetCentreHab | SetScales => CommandFamily::Set,
            TransSpectrum | TransSpectrumShift | TransRadius | TransRoi | TransMask
            | TransSampleWorkspace | TransCanWorkspace => CommandFamily::Trans,
            TubeCalibFile => CommandFamily::TubeCalib,
            QResolutionOn | QResolutionDeltaR | QResolutionA1 | QResolutionA2
            | QResolutionH1 | QResolutionW1 | QResolutionH2 | QResolutionW2
            | QResolutionCollimationLength | QResolutionModerator => {
                CommandFamily::QResolution
            }
            FitClear | FitSample | FitCan | FitMonitorTimes => CommandFamily::Fit,
            GravityOn | GravityExtraLength => CommandFamily::Gravity,
            MonLength | MonSpectrum | MonDirect | MonFlat | MonHab => CommandFamily::Mon,
            PrintLine => CommandFamily::Print,
        }
    }

    /// Stable lowercase name, used for display and `show <key>` lookup.
    pub fn name(&self) -> &'static str {
        use Key::*;
        match self {
            BackAllMonitors => "back_all_monitors",
            BackSingleMonitors => "back_single_monitors",
            BackMonitorOff => "back_monitor_off",
            BackTrans => "back_trans",
            DetReductionMode => "det_reduction_mode",
            DetRescale => "det_rescale",
            DetShift => "det_shift",
            DetRescaleFit => "det_rescale_fit",
            DetShiftFit => "det_shift_fit",
            DetCorrectionX => "det_correction_x",
            DetCorrectionY => "det_correction_y",
            DetCorrectionZ => "det_correction_z",
            DetCorrectionRotation => "det_correction_rotation",
            DetCorrectionRadius => "det_correction_radius",
            DetCorrectionTranslation => "det_correction_translation",
            DetCorrectionXTilt => "det_correction_x_tilt",
            DetCorrectionYTilt => "det_correction_y_tilt",
            LimitsAngle => "limits_angle",
            LimitsEvents => "limits_events",
            LimitsRadius => "limits_radius",
            LimitsRadiusCut => "limits_radius_cut",
            LimitsWavelengthCut => "limits_wavelength_cut",
            LimitsQ => "limits_q",
            LimitsQxy => "limits_qxy",
            LimitsWavelength => "limits_wavelength",
            LimitsSpectrum => "limits_spectrum",
            MaskClearDetector => "mask_clear_detector",
            MaskClearTime => "mask_clear_time",
            MaskTime => "mask_time",
            MaskTimeDetector => "mask_time_detector",
            MaskBlock => "mask_block",
            MaskBlockCross => "mask_block_cross",
            MaskHorizontalSingleStrip => "mask_horizontal_single_strip",
            MaskHorizontalRangeStrip => "mask_horizontal_range_strip",
            MaskVerticalSingleStrip => "mask_vertical_single_strip",
            MaskVerticalRangeStrip => "mask_vertical_range_strip",
            MaskSingleSpectrum => "mask_single_spectrum",
            MaskSpectrumRange => "mask_spectrum_range",
            MaskLine => "mask_line",
            MaskFiles => "mask_files",
            SampleOffset => "sample_offset",
            SamplePath => "sample_path",
            SetCentre => "set_centre",
            SetCentreHab => "set_centre_hab",
            SetScales => "set_scales",
            TransSpectrum => "trans_spectrum",
            TransSpectrumShift => "trans_spectrum_shift",
            TransRadius => "trans_radius",
            TransRoi => "trans_roi",
            TransMask => "trans_mask",
            TransSampleWorkspace => "trans_sample_workspace",
            TransCanWorkspace => "trans_can_workspace",
            TubeCalibFile => "tube_calib_file",
            QResolutionOn => "q_resolution_on",
            QResolutionDeltaR => "q_resolution_delta_r",
            QResolutionA1 => "q_resolution_a1",
            QResolutionA2 => "q_resolution_a2",
            QResolutionH1 => "q_resolution_h1",
            QResolutionW1 => "q_resolution_w1",
            QResolutionH2 => "q_resolution_h2",
            QResolutionW2 => "q_resolution_w2",
            QResolutionCollimationLength => "q_resolution_collimation_length",
            QResolutionModerator => "q_resolution_moderator",
            FitClear => "fit_clear",
            FitSample => "fit_sample",
            FitCan => "fit_can",
            FitMonitorTimes => "fit_monitor_times",
            GravityOn => "gravity_on",
            GravityExtraLength => "gravity_extra_length",
            MonLength => "mon_length",
            MonSpectrum => "mon_spectrum",
            MonDirect => "mon_direct",
            MonFlat => "mon_flat",
            MonHab => "mon_hab",
            PrintLine => "print_line",
        }
    }

    /// All keys, in declaration order. Drives `show <key>` name lookup.
    pub fn all() -> &'static [Key] {
        use Key::*;
        &[
            BackAllMonitors,
            BackSingleMonitors,
            BackMonitorOff,
            BackTrans,
            DetReductionMode,
            DetRescale,
            DetShift,
            DetRescaleFit,
            DetShiftFit,
            DetCorrectionX,
            DetCorrectionY,
            DetCorrectionZ,
            DetCorrectionRotation,
            DetCorrectionRadius,
            DetCorrectionTranslation,
            DetCorrectionXTilt,
            DetCorrectionYTilt,
            LimitsAngle,
            LimitsEvents,
            LimitsRadius,
            LimitsRadiusCut,
            LimitsWavelengthCut,
            LimitsQ,
            LimitsQxy,
            LimitsWavelength,
            LimitsSpectrum,
            MaskClearDetector,
            MaskClearTime,
            MaskTime,
            MaskTimeDetector,
            MaskBlock,
            MaskBlockCross,
            MaskHorizontalSingleStrip,
            MaskHorizontalRangeStrip,
            MaskVerticalSingleStrip,
            MaskVerticalRangeStrip,
            MaskSingleSpectrum,
            MaskSpectrumRange,
            MaskLine,
            MaskFiles,
            SampleOffset,
            SamplePath,
            SetCentre,
            SetCentreHab,
            SetScales,
            TransSpectrum,
            TransSpectrumShift,
            TransRadius,
            TransRoi,
            TransMask,
            TransSampleWorkspace,
            TransCanWorkspace,
            TubeCalibFile,
            QResolutionOn,
            QResolutionDeltaR,
            QResolutionA1,
            QResolutionA2,
            QResolutionH1,
            QResolutionW1,
            QResolutionH2,
            QResolutionW2,
            QResolutionCollimationLength,
            QResolutionModerator,
            FitClear,
            FitSample,
            FitCan,
            FitMonitorTimes,
            GravityOn,
            GravityExtraLength,
            MonLength,
            MonSpectrum,
            MonDirect,
            MonFlat,
            MonHab,
            PrintLine,
        ]
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Key::all()
            .iter()
            .find(|k| k.name() == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown setting key: {}", s))
    }
}
