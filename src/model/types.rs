//! Enumerations shared across the command grammars

use serde::{Deserialize, Serialize};

/// Detector bank a setting is qualified against.
///
/// The user file accepts several synonyms per bank: `HAB`/`FRONT` for the
/// high-angle bank and `LAB`/`REAR`/`MAIN` for the low-angle bank. A missing
/// qualifier always means the low-angle bank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorType {
    Hab,
    #[default]
    Lab,
}

impl DetectorType {
    /// Resolve a qualifier token (`HAB`, `FRONT`, `LAB`, `REAR`, `MAIN`).
    pub fn from_qualifier(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "HAB" | "FRONT" => Some(DetectorType::Hab),
            "LAB" | "REAR" | "MAIN" => Some(DetectorType::Lab),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DetectorType::Hab => "HAB",
            DetectorType::Lab => "LAB",
        }
    }
}

impl std::fmt::Display for DetectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Step semantics for binning ranges. Absent step suffixes mean `Lin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepType {
    #[default]
    Lin,
    Log,
}

impl StepType {
    /// Resolve a `/LIN` or `/LOG` suffix token.
    pub fn from_suffix(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "LIN" => Some(StepType::Lin),
            "LOG" => Some(StepType::Log),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StepType::Lin => "LIN",
            StepType::Log => "LOG",
        }
    }
}

impl std::fmt::Display for StepType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which detector banks a reduction runs over (`DET/REAR`, `DET/FRONT`,
/// `DET/BOTH`, `DET/MERGED`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReductionMode {
    Hab,
    Lab,
    All,
    Merged,
}

impl std::fmt::Display for ReductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReductionMode::Hab => "HAB",
            ReductionMode::Lab => "LAB",
            ReductionMode::All => "BOTH",
            ReductionMode::Merged => "MERGED",
        };
        write!(f, "{}", name)
    }
}

/// Transmission fit model selected by the `FIT` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitFunction {
    Lin,
    Log,
    /// Polynomial of the given order (2-5; bare `POLYNOMIAL` means order 2).
    Poly(u8),
}

impl std::fmt::Display for FitFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitFunction::Lin => write!(f, "LIN"),
            FitFunction::Log => write!(f, "LOG"),
            FitFunction::Poly(order) => write!(f, "POLYNOMIAL{}", order),
        }
    }
}

/// Which measurement a transmission fit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Sample,
    Can,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Sample => "SAMPLE",
            DataType::Can => "CAN",
        };
        write!(f, "{}", name)
    }
}
