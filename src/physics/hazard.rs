use crate::errors::ShieldingError;
use crate::models::{HazardEnergy, Spectrum};

/// Finds the energy that drives the shield design: the highest energy whose
/// fluence is at or above `threshold`.
///
/// Qualifying samples need not be contiguous; only the maximum energy among
/// them matters. On equal energies the first sample scanned wins.
pub fn select_hazard_energy(
    spectrum: &Spectrum,
    threshold: f64,
) -> Result<HazardEnergy, ShieldingError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ShieldingError::invalid_parameter(
            "significance_threshold",
            threshold,
        ));
    }

    let mut selected: Option<HazardEnergy> = None;
    for sample in spectrum.samples() {
        if sample.fluence < threshold {
            continue;
        }
        let is_higher = selected.map_or(true, |best| sample.energy_mev > best.energy_mev);
        if is_higher {
            selected = Some(HazardEnergy {
                energy_mev: sample.energy_mev,
                fluence: sample.fluence,
            });
        }
    }

    selected.ok_or(ShieldingError::NoHazardousEnergy {
        threshold,
        max_fluence: spectrum.max_fluence(),
    })
}
