use super::range::WeberCoefficients;
use crate::constants::MM_PER_CM;
use crate::errors::ShieldingError;
use crate::models::material::ShieldMaterial;
use crate::models::{ProfilePoint, Spectrum, ThicknessResult};

/// Converts an areal-density range into shield thickness and applies the
/// safety margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessCalculator {
    density_g_cm3: f64,
    margin_fraction: f64,
}

impl ThicknessCalculator {
    pub fn new(density_g_cm3: f64, margin_fraction: f64) -> Result<Self, ShieldingError> {
        if !density_g_cm3.is_finite() || density_g_cm3 <= 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "aluminum_density_g_cm3",
                density_g_cm3,
            ));
        }
        if !margin_fraction.is_finite() || margin_fraction < 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "safety_margin_fraction",
                margin_fraction,
            ));
        }
        Ok(ThicknessCalculator {
            density_g_cm3,
            margin_fraction,
        })
    }

    pub fn for_material<M: ShieldMaterial>(
        material: &M,
        margin_fraction: f64,
    ) -> Result<Self, ShieldingError> {
        Self::new(material.density_g_cm3(), margin_fraction)
    }

    /// Linear thickness [mm] of material with the given areal density.
    pub fn raw_thickness_mm(&self, range_g_cm2: f64) -> Result<f64, ShieldingError> {
        if !range_g_cm2.is_finite() || range_g_cm2 < 0.0 {
            return Err(ShieldingError::invalid_parameter("range_g_cm2", range_g_cm2));
        }
        Ok(range_g_cm2 / self.density_g_cm3 * MM_PER_CM)
    }

    pub fn thickness(&self, range_g_cm2: f64) -> Result<ThicknessResult, ShieldingError> {
        let raw_thickness_mm = self.raw_thickness_mm(range_g_cm2)?;
        Ok(ThicknessResult {
            raw_thickness_mm,
            margin_fraction: self.margin_fraction,
            recommended_thickness_mm: raw_thickness_mm * (1.0 + self.margin_fraction),
        })
    }
}

/// Range and unmargined thickness for every sample of the spectrum.
pub fn thickness_profile(
    spectrum: &Spectrum,
    weber: &WeberCoefficients,
    calculator: &ThicknessCalculator,
) -> Result<Vec<ProfilePoint>, ShieldingError> {
    spectrum
        .samples()
        .iter()
        .map(|sample| {
            let range = weber.range(sample.energy_mev)?;
            Ok(ProfilePoint {
                energy_mev: sample.energy_mev,
                fluence: sample.fluence,
                range_g_cm2: range.range_g_cm2,
                thickness_mm: calculator.raw_thickness_mm(range.range_g_cm2)?,
            })
        })
        .collect()
}
