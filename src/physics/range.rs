use crate::constants::*;
use crate::errors::ShieldingError;
use crate::models::{RangeRegime, RangeResult};

/// Weber (1964) empirical range-energy relation for electrons in aluminum.
///
/// Below the regime boundary:  R = a * E^(b - c * ln E)
/// At and above the boundary:  R = d * E - k
///
/// The two branches do not meet exactly at 2.5 MeV (1.2120 vs 1.2190 g/cm²).
/// That step is part of the empirical fit and is left as is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeberCoefficients {
    pub regime_boundary_mev: f64,
    pub power_coefficient: f64,
    pub power_exponent: f64,
    pub power_log_slope: f64,
    pub linear_slope: f64,
    pub linear_offset: f64,
}

impl Default for WeberCoefficients {
    fn default() -> Self {
        WeberCoefficients {
            regime_boundary_mev: WEBER_REGIME_BOUNDARY,
            power_coefficient: WEBER_POWER_COEFFICIENT,
            power_exponent: WEBER_POWER_EXPONENT,
            power_log_slope: WEBER_POWER_LOG_SLOPE,
            linear_slope: WEBER_LINEAR_SLOPE,
            linear_offset: WEBER_LINEAR_OFFSET,
        }
    }
}

impl WeberCoefficients {
    /// The boundary must lie above the energy where the linear branch
    /// reaches zero range (0.2 MeV for the standard fit).
    pub fn with_boundary(regime_boundary_mev: f64) -> Result<Self, ShieldingError> {
        let weber = WeberCoefficients {
            regime_boundary_mev,
            ..Self::default()
        };
        if !regime_boundary_mev.is_finite()
            || regime_boundary_mev <= weber.linear_zero_crossing_mev()
        {
            return Err(ShieldingError::invalid_parameter(
                "regime_boundary_mev",
                regime_boundary_mev,
            ));
        }
        Ok(weber)
    }

    /// Energy at which the linear branch predicts zero range.
    pub fn linear_zero_crossing_mev(&self) -> f64 {
        self.linear_offset / self.linear_slope
    }

    pub fn regime(&self, energy_mev: f64) -> RangeRegime {
        if energy_mev < self.regime_boundary_mev {
            RangeRegime::PowerLaw
        } else {
            RangeRegime::Linear
        }
    }

    /// Areal density [g/cm²] needed to stop an electron of `energy_mev`.
    pub fn range(&self, energy_mev: f64) -> Result<RangeResult, ShieldingError> {
        if !energy_mev.is_finite() || energy_mev <= 0.0 {
            return Err(ShieldingError::InvalidEnergy { energy_mev });
        }

        let regime = self.regime(energy_mev);
        let range_g_cm2 = match regime {
            RangeRegime::PowerLaw => {
                let exponent = self.power_exponent - self.power_log_slope * energy_mev.ln();
                self.power_coefficient * energy_mev.powf(exponent)
            }
            RangeRegime::Linear => self.linear_slope * energy_mev - self.linear_offset,
        };

        // Only reachable with hand-built coefficients; `with_boundary` rejects these.
        if !range_g_cm2.is_finite() || range_g_cm2 < 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "regime_boundary_mev",
                self.regime_boundary_mev,
            ));
        }

        Ok(RangeResult {
            energy_mev,
            range_g_cm2,
            regime,
        })
    }
}

/// Range with the standard aluminum coefficients.
pub fn electron_range(energy_mev: f64) -> Result<RangeResult, ShieldingError> {
    WeberCoefficients::default().range(energy_mev)
}
