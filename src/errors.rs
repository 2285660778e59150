use std::{fmt, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShieldingError {
    #[error("malformed spectrum: {valid_rows} valid data row(s) found, at least 2 required")]
    MalformedSpectrum { valid_rows: usize },

    #[error("no hazardous energy: no sample reaches fluence {threshold:e} (maximum fluence {max_fluence:e})")]
    NoHazardousEnergy { threshold: f64, max_fluence: f64 },

    #[error("invalid energy {energy_mev} MeV: range is only defined for positive energies")]
    InvalidEnergy { energy_mev: f64 },

    #[error("invalid parameter `{name}` = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid profile output path {path:?}: {reason}")]
    InvalidProfilePath { path: PathBuf, reason: &'static str },

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("profile export error: {0}")]
    ProfileExport(#[from] csv::Error),
}

impl ShieldingError {
    pub(crate) fn invalid_parameter(name: &'static str, value: f64) -> Self {
        ShieldingError::InvalidParameter { name, value }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ShieldingError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Component of the shielding pipeline a failure originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configuration,
    SpectrumReader,
    HazardEnergySelector,
    RangeEnergyModel,
    ThicknessCalculator,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Configuration => write!(f, "Configuration"),
            Stage::SpectrumReader => write!(f, "Spectrum Reader"),
            Stage::HazardEnergySelector => write!(f, "Hazard Energy Selector"),
            Stage::RangeEnergyModel => write!(f, "Range Energy Model"),
            Stage::ThicknessCalculator => write!(f, "Thickness Calculator"),
        }
    }
}

#[derive(Debug, Error)]
#[error("{stage} failed: {source}")]
pub struct PipelineError {
    pub stage: Stage,
    #[source]
    pub source: ShieldingError,
}

impl PipelineError {
    pub fn new(stage: Stage, source: ShieldingError) -> Self {
        PipelineError { stage, source }
    }
}
