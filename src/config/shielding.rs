use super::material::{Aluminum, CustomMaterial};
use crate::constants::*;
use crate::errors::ShieldingError;
use crate::models::material::ShieldMaterial;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "radshield";
const CONFIG_FILE: &str = "config.json";

/// Tunable inputs of a shielding run. Every field has a default, so a JSON
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShieldingConfig {
    /// Fluence at or above which an energy bin drives the design
    pub significance_threshold: f64,
    /// Shield density [g/cm³]
    pub aluminum_density_g_cm3: f64,
    /// Fractional overdesign applied to the raw thickness
    pub safety_margin_fraction: f64,
    /// Energy where the range fit switches from power law to linear [MeV]
    pub regime_boundary_mev: f64,
    /// Samples below this energy are ignored [MeV]
    pub min_energy_mev: f64,
    /// When set, the second column is flux [1/(cm²·s)] and is integrated over
    /// this many days
    pub mission_duration_days: Option<f64>,
    pub material_name: String,
}

/// Values given on the command line. Each one that is set replaces the
/// value loaded from file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub significance_threshold: Option<f64>,
    pub aluminum_density_g_cm3: Option<f64>,
    pub safety_margin_fraction: Option<f64>,
    pub regime_boundary_mev: Option<f64>,
    pub min_energy_mev: Option<f64>,
    pub mission_duration_days: Option<f64>,
    pub material_name: Option<String>,
}

impl Default for ShieldingConfig {
    fn default() -> Self {
        ShieldingConfig {
            significance_threshold: DEFAULT_SIGNIFICANCE_THRESHOLD,
            aluminum_density_g_cm3: Aluminum.density_g_cm3(),
            safety_margin_fraction: DEFAULT_SAFETY_MARGIN,
            regime_boundary_mev: WEBER_REGIME_BOUNDARY,
            min_energy_mev: DEFAULT_MIN_ENERGY,
            mission_duration_days: None,
            material_name: Aluminum.name().to_string(),
        }
    }
}

impl ShieldingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ShieldingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ShieldingError> {
        let json = fs::read_to_string(path).map_err(|e| ShieldingError::io(path, e))?;
        Self::from_json_str(&json)
    }

    /// Loads `path` if given, otherwise the user-level config file if one
    /// exists, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ShieldingError> {
        if let Some(path) = path {
            info!("Loading configuration from {:?}", path);
            return Self::from_json_file(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.is_file() => {
                info!("Loading configuration from {:?}", default_path);
                Self::from_json_file(&default_path)
            }
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(threshold) = overrides.significance_threshold {
            self.significance_threshold = threshold;
        }
        if let Some(density) = overrides.aluminum_density_g_cm3 {
            self.aluminum_density_g_cm3 = density;
        }
        if let Some(margin) = overrides.safety_margin_fraction {
            self.safety_margin_fraction = margin;
        }
        if let Some(boundary) = overrides.regime_boundary_mev {
            self.regime_boundary_mev = boundary;
        }
        if let Some(min_energy) = overrides.min_energy_mev {
            self.min_energy_mev = min_energy;
        }
        if overrides.mission_duration_days.is_some() {
            self.mission_duration_days = overrides.mission_duration_days;
        }
        if let Some(name) = &overrides.material_name {
            self.material_name = name.clone();
        }
        self
    }

    /// `<user config dir>/radshield/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Rejects non-physical values before any computation runs.
    pub fn validate(&self) -> Result<(), ShieldingError> {
        check(
            "significance_threshold",
            self.significance_threshold,
            |v| v >= 0.0,
        )?;
        check(
            "aluminum_density_g_cm3",
            self.aluminum_density_g_cm3,
            |v| v > 0.0,
        )?;
        check(
            "safety_margin_fraction",
            self.safety_margin_fraction,
            |v| v >= 0.0,
        )?;
        check("regime_boundary_mev", self.regime_boundary_mev, |v| {
            v > WEBER_LINEAR_OFFSET / WEBER_LINEAR_SLOPE
        })?;
        check("min_energy_mev", self.min_energy_mev, |v| v >= 0.0)?;
        if let Some(days) = self.mission_duration_days {
            check("mission_duration_days", days, |v| v > 0.0)?;
        }
        Ok(())
    }

    /// Shield material for the report. A non-aluminum density under the
    /// default aluminum name is reported as a custom material.
    pub fn material(&self) -> CustomMaterial {
        let density = self.aluminum_density_g_cm3;
        if self.material_name == Aluminum::NAME && density != Aluminum::DENSITY {
            let name = format!("Custom ({} g/cm³)", density);
            warn!(
                "Density {} g/cm³ is not aluminum's {} g/cm³; reporting material as {:?}",
                density,
                Aluminum::DENSITY,
                name
            );
            return CustomMaterial::new(name, density);
        }
        CustomMaterial::new(self.material_name.clone(), density)
    }
}

fn check(name: &'static str, value: f64, valid: impl Fn(f64) -> bool) -> Result<(), ShieldingError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(ShieldingError::invalid_parameter(name, value))
    }
}
