use crate::errors::ShieldingError;
use log::warn;
use serde::Serialize;

/// One row of an electron spectrum: energy (MeV) and fluence (particles/cm²)
/// accumulated over the mission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpectrumSample {
    pub energy_mev: f64,
    pub fluence: f64,
}

impl SpectrumSample {
    pub fn new(energy_mev: f64, fluence: f64) -> Result<Self, ShieldingError> {
        if !energy_mev.is_finite() || energy_mev <= 0.0 {
            return Err(ShieldingError::InvalidEnergy { energy_mev });
        }
        if !fluence.is_finite() || fluence < 0.0 {
            return Err(ShieldingError::invalid_parameter("fluence", fluence));
        }
        Ok(SpectrumSample {
            energy_mev,
            fluence,
        })
    }
}

/// Non-empty sequence of samples with a strictly increasing energy axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    samples: Vec<SpectrumSample>,
}

impl Spectrum {
    /// Builds a spectrum from samples in any order. Samples are sorted by
    /// energy and exact-duplicate energies are dropped, keeping the first
    /// occurrence; both corrections are logged as warnings.
    pub fn from_samples(samples: Vec<SpectrumSample>) -> Result<Self, ShieldingError> {
        let (spectrum, _warnings) = Self::normalize(samples)?;
        Ok(spectrum)
    }

    /// Same as [`Spectrum::from_samples`], but also hands back the warnings.
    pub(crate) fn normalize(
        samples: Vec<SpectrumSample>,
    ) -> Result<(Self, Vec<String>), ShieldingError> {
        if samples.is_empty() {
            return Err(ShieldingError::MalformedSpectrum { valid_rows: 0 });
        }
        for sample in &samples {
            SpectrumSample::new(sample.energy_mev, sample.fluence)?;
        }

        let mut warnings = Vec::new();
        let mut samples = samples;

        let ascending = samples
            .windows(2)
            .all(|pair| pair[0].energy_mev <= pair[1].energy_mev);
        if !ascending {
            // Stable sort keeps the file order among equal energies.
            samples.sort_by(|a, b| a.energy_mev.total_cmp(&b.energy_mev));
            warnings.push("energies were not in ascending order; spectrum sorted".to_string());
        }

        let before = samples.len();
        samples.dedup_by(|later, earlier| later.energy_mev == earlier.energy_mev);
        let removed = before - samples.len();
        if removed > 0 {
            warnings.push(format!(
                "removed {} sample(s) with duplicate energy, kept first occurrence",
                removed
            ));
        }

        for message in &warnings {
            warn!("{}", message);
        }

        Ok((Spectrum { samples }, warnings))
    }

    pub fn samples(&self) -> &[SpectrumSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn max_fluence(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.fluence)
            .fold(0.0, f64::max)
    }
}
