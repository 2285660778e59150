use crate::config::ShieldingConfig;
use crate::constants::DEFAULT_MIN_ENERGY;
use crate::errors::ShieldingError;
use crate::models::{Spectrum, SpectrumSample};
use log::{debug, info, warn};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Spectrum parsed from a radiation-model export, with the corrections made
/// while reading it.
#[derive(Debug, Clone)]
pub struct SpectrumReading {
    pub spectrum: Spectrum,
    pub warnings: Vec<String>,
}

/// Reads energy/fluence tables exported by radiation-environment models.
///
/// Rows are split on commas and whitespace. The first two fields are the
/// energy (MeV) and the fluence; a line where those do not both parse as
/// numbers is treated as a header or comment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumReader {
    min_energy_mev: f64,
    mission_duration_seconds: Option<f64>,
}

impl Default for SpectrumReader {
    fn default() -> Self {
        SpectrumReader {
            min_energy_mev: DEFAULT_MIN_ENERGY,
            mission_duration_seconds: None,
        }
    }
}

impl SpectrumReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ShieldingConfig) -> Result<Self, ShieldingError> {
        let reader = Self::new().with_min_energy(config.min_energy_mev)?;
        match config.mission_duration_days {
            Some(days) => reader.with_mission_duration_days(days),
            None => Ok(reader),
        }
    }

    /// Samples below `min_energy_mev` are dropped. Zero keeps everything.
    pub fn with_min_energy(mut self, min_energy_mev: f64) -> Result<Self, ShieldingError> {
        if !min_energy_mev.is_finite() || min_energy_mev < 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "min_energy_mev",
                min_energy_mev,
            ));
        }
        self.min_energy_mev = min_energy_mev;
        Ok(self)
    }

    /// Treat the second column as flux [1/(cm²·s)] and integrate it over a
    /// mission of `days`.
    pub fn with_mission_duration_days(mut self, days: f64) -> Result<Self, ShieldingError> {
        if !days.is_finite() || days <= 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "mission_duration_days",
                days,
            ));
        }
        self.mission_duration_seconds = Some(hifitime::Duration::from_days(days).to_seconds());
        Ok(self)
    }

    pub fn read_path(&self, path: &Path) -> Result<SpectrumReading, ShieldingError> {
        let text = fs::read_to_string(path).map_err(|e| ShieldingError::io(path, e))?;
        info!("Reading spectrum from {:?} ({} lines)", path, text.lines().count());
        self.parse_str(&text)
    }

    pub fn read<R: Read>(&self, mut reader: R) -> Result<SpectrumReading, ShieldingError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|e| ShieldingError::io("<stream>", e))?;
        self.parse_str(&text)
    }

    pub fn parse_str(&self, text: &str) -> Result<SpectrumReading, ShieldingError> {
        let mut samples = Vec::new();
        let mut warnings = Vec::new();
        let mut header_lines = 0;
        let mut below_cutoff = 0;

        for (index, line) in text.lines().enumerate() {
            let Some((energy_mev, value)) = parse_row(line) else {
                if !line.trim().is_empty() {
                    header_lines += 1;
                }
                continue;
            };

            let fluence = match self.mission_duration_seconds {
                Some(seconds) => value * seconds,
                None => value,
            };

            match SpectrumSample::new(energy_mev, fluence) {
                Ok(sample) if sample.energy_mev < self.min_energy_mev => below_cutoff += 1,
                Ok(sample) => samples.push(sample),
                Err(e) => {
                    let message = format!("line {}: skipped row ({})", index + 1, e);
                    warn!("{}", message);
                    warnings.push(message);
                }
            }
        }

        debug!(
            "Skipped {} header line(s), {} sample(s) below {} MeV",
            header_lines, below_cutoff, self.min_energy_mev
        );

        if samples.len() < 2 {
            return Err(ShieldingError::MalformedSpectrum {
                valid_rows: samples.len(),
            });
        }
        info!("Parsed {} data points", samples.len());

        let (spectrum, normalize_warnings) = Spectrum::normalize(samples)?;
        warnings.extend(normalize_warnings);

        Ok(SpectrumReading { spectrum, warnings })
    }
}

/// First two fields of a line as finite numbers.
fn parse_row(line: &str) -> Option<(f64, f64)> {
    let mut fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty());
    let energy = parse_number(fields.next()?)?;
    let value = parse_number(fields.next()?)?;
    Some((energy, value))
}

fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}
