use serde::Serialize;

/// Highest energy whose fluence reaches the significance threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HazardEnergy {
    pub energy_mev: f64,
    pub fluence: f64,
}

/// Branch of the Weber fit a range was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeRegime {
    PowerLaw,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeResult {
    pub energy_mev: f64,
    pub range_g_cm2: f64, // Areal density to stop the electron
    pub regime: RangeRegime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThicknessResult {
    pub raw_thickness_mm: f64,
    pub margin_fraction: f64,
    pub recommended_thickness_mm: f64,
}

/// Range and thickness needed to stop electrons at one spectrum energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfilePoint {
    pub energy_mev: f64,
    pub fluence: f64,
    pub range_g_cm2: f64,
    pub thickness_mm: f64,
}

/// Final output of one shielding run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShieldingReport {
    pub material: String,
    pub hazard_energy_mev: f64,
    pub hazard_fluence: f64,
    pub range_g_cm2: f64,
    pub raw_thickness_mm: f64,
    pub margin_fraction: f64,
    pub recommended_thickness_mm: f64,
    pub samples_considered: usize,
    pub warnings: Vec<String>,
}

impl ShieldingReport {
    pub fn new(
        material: &str,
        hazard: HazardEnergy,
        range: RangeResult,
        thickness: ThicknessResult,
        samples_considered: usize,
        warnings: Vec<String>,
    ) -> Self {
        ShieldingReport {
            material: material.to_string(),
            hazard_energy_mev: hazard.energy_mev,
            hazard_fluence: hazard.fluence,
            range_g_cm2: range.range_g_cm2,
            raw_thickness_mm: thickness.raw_thickness_mm,
            margin_fraction: thickness.margin_fraction,
            recommended_thickness_mm: thickness.recommended_thickness_mm,
            samples_considered,
            warnings,
        }
    }
}

/// Recommendation used in place of a computed thickness when the spectrum
/// has no hazardous energy and the caller opted into a structural floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorReport {
    pub material: String,
    pub reason: String,
    pub raw_thickness_mm: f64,
    pub margin_fraction: f64,
    pub recommended_thickness_mm: f64,
}
