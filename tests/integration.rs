use approx::assert_abs_diff_eq;
use radshield::config::{ConfigOverrides, ShieldingConfig};
use radshield::errors::{ShieldingError, Stage};
use radshield::output::{profile_paths, write_profile_file};
use radshield::physics::hazard::select_hazard_energy;
use radshield::physics::range::electron_range;
use radshield::physics::thickness::ThicknessCalculator;
use radshield::spectrum::SpectrumReader;
use radshield::{ShieldingPipeline, StructuralFloor};
use std::path::PathBuf;
use std::fs;
use std::io::Write;

// Flux export for a 30 day Jovian moon orbit, as produced by the radiation
// environment model (energy MeV, integral flux, differential flux).
const JOVIAN_FLUX_EXPORT: &str = "\
'*' Block #1
'Energy (MeV)', 'IFlux (/cm2/s)', 'DFlux (/cm2/MeV/s)'
0.010, 9.8e+07, 5.1e+09
0.040, 4.2e+07, 8.0e+08
0.100, 1.9e+07, 2.2e+08
0.500, 3.1e+06, 1.5e+07
1.000, 9.7e+05, 2.9e+06
2.500, 8.8e+04, 1.8e+05
5.000, 3.3e+02, 4.9e+02
10.00, 4.1e+01, 5.2e+01
'End of Block'
";

#[test]
fn stages_compose_to_reference_design() {
    let reading = SpectrumReader::new()
        .parse_str("1.0 1e8\n2.5 5e6\n20.0 1e3\n")
        .unwrap();
    let hazard = select_hazard_energy(&reading.spectrum, 1e3).unwrap();
    assert_eq!(hazard.energy_mev, 20.0);

    let range = electron_range(hazard.energy_mev).unwrap();
    assert_abs_diff_eq!(range.range_g_cm2, 10.494, epsilon = 1e-9);

    let thickness = ThicknessCalculator::new(2.70, 0.20)
        .unwrap()
        .thickness(range.range_g_cm2)
        .unwrap();
    assert_abs_diff_eq!(thickness.raw_thickness_mm, 38.87, epsilon = 5e-3);
    assert_abs_diff_eq!(thickness.recommended_thickness_mm, 46.64, epsilon = 5e-3);
}

#[test]
fn thirty_day_flux_export_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let spectrum_path = dir.path().join("spenvis_sao.txt");
    fs::File::create(&spectrum_path)?.write_all(JOVIAN_FLUX_EXPORT.as_bytes())?;

    let pipeline = ShieldingPipeline::new(ShieldingConfig {
        mission_duration_days: Some(30.0),
        ..Default::default()
    })?;
    let run = pipeline.run_path(&spectrum_path)?;

    // 0.010 MeV is below the cutoff; 2.5 MeV is the last bin above 1e9
    // once integrated over 30 days (8.8e4 * 2.592e6 ≈ 2.3e11, 5 MeV ≈ 8.6e8).
    assert_eq!(run.report.samples_considered, 7);
    assert_eq!(run.report.hazard_energy_mev, 2.5);
    assert_abs_diff_eq!(run.report.range_g_cm2, 1.219, epsilon = 1e-9);
    assert_abs_diff_eq!(
        run.report.recommended_thickness_mm,
        1.219 / 2.70 * 10.0 * 1.2,
        epsilon = 1e-9
    );
    assert!(run.report.warnings.is_empty());

    let profile_path = dir.path().join("profile.csv");
    write_profile_file(&run.profile, &profile_path)?;
    let csv = fs::read_to_string(&profile_path)?;
    assert_eq!(csv.lines().count(), 1 + 7);
    Ok(())
}

#[test]
fn failures_name_their_stage() {
    let pipeline = ShieldingPipeline::new(ShieldingConfig::default()).unwrap();

    let err = pipeline.run_str("no numbers here\n").unwrap_err();
    assert_eq!(err.stage, Stage::SpectrumReader);
    assert!(matches!(
        err.source,
        ShieldingError::MalformedSpectrum { valid_rows: 0 }
    ));

    let err = pipeline.run_str("0.5 1e3\n1.0 1e2\n").unwrap_err();
    assert_eq!(err.stage, Stage::HazardEnergySelector);
    assert!(err.to_string().starts_with("Hazard Energy Selector failed"));

    let err = ShieldingPipeline::new(ShieldingConfig {
        safety_margin_fraction: -0.5,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err.stage, Stage::Configuration);
}

#[test]
fn config_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "significance_threshold": 1e3, "safety_margin_fraction": 0.5 }"#,
    )?;

    let config = ShieldingConfig::load(Some(config_path.as_path()))?;
    let run = ShieldingPipeline::new(config)?.run_str("1.0 1e8\n2.5 5e6\n20.0 1e3\n")?;
    assert_abs_diff_eq!(
        run.report.recommended_thickness_mm / run.report.raw_thickness_mm,
        1.5,
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn command_line_values_beat_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "significance_threshold": 1e3, "safety_margin_fraction": 0.5 }"#,
    )?;

    let config = ShieldingConfig::load(Some(config_path.as_path()))?.with_overrides(
        &ConfigOverrides {
            safety_margin_fraction: Some(0.1),
            ..Default::default()
        },
    );
    assert_eq!(config.significance_threshold, 1e3);
    assert_eq!(config.safety_margin_fraction, 0.1);

    let run = ShieldingPipeline::new(config)?.run_str("1.0 1e8\n2.5 5e6\n20.0 1e3\n")?;
    assert_abs_diff_eq!(
        run.report.recommended_thickness_mm / run.report.raw_thickness_mm,
        1.1,
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn structural_floor_covers_only_quiet_spectra() -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = ShieldingPipeline::new(ShieldingConfig::default())?;
    let floor = StructuralFloor::new(2.0)?;

    let quiet = pipeline.run_str("0.5 1e3\n1.0 1e2\n").unwrap_err();
    let report = floor.apply(&quiet, &pipeline).expect("floor report");
    assert_eq!(report.material, "Aluminum");
    assert_abs_diff_eq!(report.recommended_thickness_mm, 2.4, epsilon = 1e-12);
    assert!(report.reason.starts_with("no hazardous energy"));
    let json: serde_json::Value = serde_json::to_value(&report)?;
    assert_eq!(json["raw_thickness_mm"], 2.0);

    let malformed = pipeline.run_str("1.0 1e12\n").unwrap_err();
    assert_eq!(malformed.stage, Stage::SpectrumReader);
    assert!(floor.apply(&malformed, &pipeline).is_none());
    Ok(())
}

#[test]
fn batch_profiles_land_in_separate_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let pipeline = ShieldingPipeline::new(ShieldingConfig {
        significance_threshold: 1e3,
        ..Default::default()
    })?;
    let spectra = [PathBuf::from("inner.txt"), PathBuf::from("outer.txt")];
    let texts = ["1.0 1e8\n2.5 5e6\n", "1.0 1e8\n2.5 5e6\n20.0 1e3\n"];

    let paths = profile_paths(&dir.path().join("profile.csv"), &spectra)?;
    for (path, text) in paths.iter().zip(texts) {
        write_profile_file(&pipeline.run_str(text)?.profile, path)?;
    }

    let inner = fs::read_to_string(dir.path().join("profile_inner.csv"))?;
    let outer = fs::read_to_string(dir.path().join("profile_outer.csv"))?;
    assert_eq!(inner.lines().count(), 1 + 2);
    assert_eq!(outer.lines().count(), 1 + 3);
    assert!(!dir.path().join("profile.csv").exists());
    Ok(())
}
