use crate::config::{CustomMaterial, ShieldingConfig};
use crate::errors::{PipelineError, ShieldingError, Stage};
use crate::models::material::ShieldMaterial;
use crate::models::{FloorReport, ProfilePoint, ShieldingReport, Spectrum};
use crate::physics::hazard::select_hazard_energy;
use crate::physics::range::WeberCoefficients;
use crate::physics::thickness::{thickness_profile, ThicknessCalculator};
use crate::spectrum::{SpectrumReader, SpectrumReading};
use log::info;
use std::path::Path;

/// Result of a successful run: the design figures plus the per-energy
/// thickness curve they were picked from.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldingRun {
    pub report: ShieldingReport,
    pub profile: Vec<ProfilePoint>,
}

/// SpectrumReader -> HazardEnergySelector -> RangeEnergyModel -> ThicknessCalculator.
///
/// Each stage either succeeds or aborts the run; the error names the stage
/// that failed.
#[derive(Debug, Clone)]
pub struct ShieldingPipeline {
    config: ShieldingConfig,
    reader: SpectrumReader,
    weber: WeberCoefficients,
    calculator: ThicknessCalculator,
    material: CustomMaterial,
}

impl ShieldingPipeline {
    pub fn new(config: ShieldingConfig) -> Result<Self, PipelineError> {
        let configure = || -> Result<Self, ShieldingError> {
            config.validate()?;
            let material = config.material();
            Ok(ShieldingPipeline {
                reader: SpectrumReader::from_config(&config)?,
                weber: WeberCoefficients::with_boundary(config.regime_boundary_mev)?,
                calculator: ThicknessCalculator::for_material(
                    &material,
                    config.safety_margin_fraction,
                )?,
                material,
                config: config.clone(),
            })
        };
        configure().map_err(|e| PipelineError::new(Stage::Configuration, e))
    }

    pub fn config(&self) -> &ShieldingConfig {
        &self.config
    }

    pub fn material_name(&self) -> &str {
        self.material.name()
    }

    pub fn run_path(&self, path: &Path) -> Result<ShieldingRun, PipelineError> {
        let reading = self
            .reader
            .read_path(path)
            .map_err(|e| PipelineError::new(Stage::SpectrumReader, e))?;
        self.run_reading(reading)
    }

    pub fn run_str(&self, text: &str) -> Result<ShieldingRun, PipelineError> {
        let reading = self
            .reader
            .parse_str(text)
            .map_err(|e| PipelineError::new(Stage::SpectrumReader, e))?;
        self.run_reading(reading)
    }

    pub fn run_reading(&self, reading: SpectrumReading) -> Result<ShieldingRun, PipelineError> {
        self.run_spectrum(&reading.spectrum, reading.warnings)
    }

    /// Runs the stages after reading on an already built spectrum.
    pub fn run_spectrum(
        &self,
        spectrum: &Spectrum,
        warnings: Vec<String>,
    ) -> Result<ShieldingRun, PipelineError> {
        let hazard = select_hazard_energy(spectrum, self.config.significance_threshold)
            .map_err(|e| PipelineError::new(Stage::HazardEnergySelector, e))?;
        info!(
            "Max hazardous energy: {} MeV (fluence {:e})",
            hazard.energy_mev, hazard.fluence
        );

        let range = self
            .weber
            .range(hazard.energy_mev)
            .map_err(|e| PipelineError::new(Stage::RangeEnergyModel, e))?;
        info!(
            "Range at {} MeV: {:.4} g/cm² ({:?} regime)",
            range.energy_mev, range.range_g_cm2, range.regime
        );

        let thickness = self
            .calculator
            .thickness(range.range_g_cm2)
            .map_err(|e| PipelineError::new(Stage::ThicknessCalculator, e))?;

        let profile = thickness_profile(spectrum, &self.weber, &self.calculator).map_err(|e| {
            let stage = match e {
                ShieldingError::InvalidEnergy { .. } => Stage::RangeEnergyModel,
                _ => Stage::ThicknessCalculator,
            };
            PipelineError::new(stage, e)
        })?;

        let report = ShieldingReport::new(
            self.material.name(),
            hazard,
            range,
            thickness,
            spectrum.len(),
            warnings,
        );
        Ok(ShieldingRun { report, profile })
    }
}

/// Minimum wall recommended when a spectrum has no hazardous energy. The
/// pipeline itself never falls back to it; callers opt in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralFloor {
    wall_mm: f64,
}

impl StructuralFloor {
    pub fn new(wall_mm: f64) -> Result<Self, ShieldingError> {
        if !wall_mm.is_finite() || wall_mm <= 0.0 {
            return Err(ShieldingError::invalid_parameter(
                "structural_floor_mm",
                wall_mm,
            ));
        }
        Ok(StructuralFloor { wall_mm })
    }

    pub fn wall_mm(&self) -> f64 {
        self.wall_mm
    }

    /// Floor recommendation for a failed run, with the pipeline's margin
    /// applied. `None` unless the failure was `NoHazardousEnergy`.
    pub fn apply(
        &self,
        error: &PipelineError,
        pipeline: &ShieldingPipeline,
    ) -> Option<FloorReport> {
        if !matches!(error.source, ShieldingError::NoHazardousEnergy { .. }) {
            return None;
        }
        let margin_fraction = pipeline.config().safety_margin_fraction;
        Some(FloorReport {
            material: pipeline.material_name().to_string(),
            reason: error.source.to_string(),
            raw_thickness_mm: self.wall_mm,
            margin_fraction,
            recommended_thickness_mm: self.wall_mm * (1.0 + margin_fraction),
        })
    }
}
