use clap::Parser;
use flexi_logger::Logger;
use log::{error, warn};
use radshield::output::{profile_paths, render_floor_report, render_report, write_profile_file};
use radshield::{ConfigOverrides, ShieldingConfig, ShieldingPipeline, StructuralFloor};
use std::error::Error;
use std::path::PathBuf;

/// Size aluminum shielding against the most penetrating significant
/// electron population of a mission spectrum.
#[derive(Parser, Debug)]
#[command(name = "radshield", version)]
struct Args {
    /// Energy/fluence tables exported by the radiation-environment model
    #[arg(required = true)]
    spectra: Vec<PathBuf>,

    /// JSON configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fluence at or above which an energy drives the design
    #[arg(long)]
    threshold: Option<f64>,

    /// Shield density in g/cm³
    #[arg(long)]
    density: Option<f64>,

    /// Shield material name used in the report
    #[arg(long)]
    material: Option<String>,

    /// Safety margin as a fraction (0.2 = 20%)
    #[arg(long)]
    margin: Option<f64>,

    /// Energy in MeV where the range fit switches to its linear branch
    #[arg(long)]
    regime_boundary: Option<f64>,

    /// Ignore samples below this energy in MeV
    #[arg(long)]
    min_energy: Option<f64>,

    /// Treat the second column as flux and integrate over this many days
    #[arg(long)]
    mission_days: Option<f64>,

    /// Wall thickness in mm to recommend when no energy is hazardous
    #[arg(long)]
    structural_floor_mm: Option<f64>,

    /// Write the per-energy thickness profile as CSV
    #[arg(long)]
    profile_out: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            significance_threshold: self.threshold,
            aluminum_density_g_cm3: self.density,
            safety_margin_fraction: self.margin,
            regime_boundary_mev: self.regime_boundary,
            min_energy_mev: self.min_energy,
            mission_duration_days: self.mission_days,
            material_name: self.material.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(&args.log_level)?.start()?;

    let floor = args
        .structural_floor_mm
        .map(StructuralFloor::new)
        .transpose()?;
    let profiles = match &args.profile_out {
        Some(base) => Some(profile_paths(base, &args.spectra)?),
        None => None,
    };

    let config = ShieldingConfig::load(args.config.as_deref())?.with_overrides(&args.overrides());
    let pipeline = ShieldingPipeline::new(config)?;

    let mut failures = 0;
    for (index, path) in args.spectra.iter().enumerate() {
        if !args.json {
            println!("--- Shielding analysis: {} ---", path.display());
        }

        let run = match pipeline.run_path(path) {
            Ok(run) => run,
            Err(e) => {
                match floor.and_then(|floor| floor.apply(&e, &pipeline)) {
                    Some(report) => {
                        warn!("{}: {}", path.display(), e);
                        if args.json {
                            println!("{}", serde_json::to_string_pretty(&report)?);
                        } else {
                            print!("{}", render_floor_report(&report));
                        }
                    }
                    None => {
                        error!("{}: {}", path.display(), e);
                        failures += 1;
                    }
                }
                continue;
            }
        };

        if args.json {
            println!("{}", serde_json::to_string_pretty(&run.report)?);
        } else {
            print!("{}", render_report(&run.report));
        }

        if let Some(profile_path) = profiles.as_ref().map(|paths| &paths[index]) {
            match write_profile_file(&run.profile, profile_path) {
                Ok(()) => {
                    if !args.json {
                        println!("Thickness profile written to {}", profile_path.display());
                    }
                }
                Err(e) => {
                    error!("{}: {}", path.display(), e);
                    failures += 1;
                    continue;
                }
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} spectra failed", failures, args.spectra.len()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radshield::errors::ShieldingError;

    #[test]
    fn cli_flags_become_overrides() {
        let args = Args::parse_from([
            "radshield",
            "--margin",
            "0.3",
            "--material",
            "Tantalum",
            "--density",
            "16.69",
            "spectrum.txt",
        ]);
        let config = ShieldingConfig {
            safety_margin_fraction: 0.5,
            significance_threshold: 1e3,
            ..Default::default()
        }
        .with_overrides(&args.overrides());
        assert_eq!(config.safety_margin_fraction, 0.3);
        assert_eq!(config.significance_threshold, 1e3);
        assert_eq!(config.material().name, "Tantalum");
        assert_eq!(args.spectra, vec![PathBuf::from("spectrum.txt")]);
    }

    #[test]
    fn floor_flag_is_validated() {
        let args = Args::parse_from(["radshield", "--structural-floor-mm", "-1", "a.txt"]);
        let floor = args.structural_floor_mm.map(StructuralFloor::new).transpose();
        assert!(matches!(
            floor,
            Err(ShieldingError::InvalidParameter {
                name: "structural_floor_mm",
                ..
            })
        ));
    }
}
