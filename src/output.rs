use crate::errors::ShieldingError;
use crate::models::{FloorReport, ProfilePoint, ShieldingReport};
use csv::Writer;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const PROFILE_HEADER: [&str; 4] = [
    "Energy (MeV)",
    "Fluence",
    "Range (g/cm2)",
    "Al Thickness (mm)",
];

pub fn write_profile<W: Write>(profile: &[ProfilePoint], out: W) -> Result<(), ShieldingError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(PROFILE_HEADER)?;
    for point in profile {
        writer.write_record(&[
            point.energy_mev.to_string(),
            point.fluence.to_string(),
            point.range_g_cm2.to_string(),
            point.thickness_mm.to_string(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_profile_file(profile: &[ProfilePoint], path: &Path) -> Result<(), ShieldingError> {
    let file = File::create(path).map_err(|e| ShieldingError::io(path, e))?;
    write_profile(profile, file)
}

/// One profile CSV path per spectrum. A single spectrum writes to `base`
/// itself; several write to `<base stem>_<spectrum stem>.<ext>` next to
/// `base`, with a numeric suffix when two spectra share a stem.
pub fn profile_paths(base: &Path, spectra: &[PathBuf]) -> Result<Vec<PathBuf>, ShieldingError> {
    let base_stem = base
        .file_stem()
        .ok_or_else(|| ShieldingError::InvalidProfilePath {
            path: base.to_path_buf(),
            reason: "no file name",
        })?
        .to_string_lossy();
    if spectra.len() == 1 {
        return Ok(vec![base.to_path_buf()]);
    }
    let extension = base
        .extension()
        .map_or_else(|| "csv".into(), |ext| ext.to_string_lossy());

    let mut taken = HashSet::new();
    let mut paths = Vec::with_capacity(spectra.len());
    for (index, spectrum) in spectra.iter().enumerate() {
        let spectrum_stem = match spectrum.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => format!("spectrum{}", index + 1),
        };
        let mut name = format!("{}_{}.{}", base_stem, spectrum_stem, extension);
        let mut suffix = 2;
        while !taken.insert(name.clone()) {
            name = format!("{}_{}_{}.{}", base_stem, spectrum_stem, suffix, extension);
            suffix += 1;
        }
        paths.push(base.with_file_name(name));
    }
    Ok(paths)
}

/// Human-readable summary of a report.
pub fn render_report(report: &ShieldingReport) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Material: {}", report.material);
    let _ = writeln!(text, "Samples considered: {}", report.samples_considered);
    let _ = writeln!(
        text,
        "Max Hazardous Energy detected: {} MeV",
        report.hazard_energy_mev
    );
    let _ = writeln!(text, "Required range: {:.4} g/cm²", report.range_g_cm2);
    let _ = writeln!(
        text,
        "Raw Required Thickness: {:.2} mm",
        report.raw_thickness_mm
    );
    let _ = writeln!(
        text,
        "Recommended Thickness (with {:.0}% Safety Margin): {:.2} mm",
        report.margin_fraction * 100.0,
        report.recommended_thickness_mm
    );
    for warning in &report.warnings {
        let _ = writeln!(text, "Warning: {}", warning);
    }
    text
}

pub fn render_floor_report(report: &FloorReport) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "Material: {}", report.material);
    let _ = writeln!(
        text,
        "No hazardous energy found ({}); using the minimum structural wall.",
        report.reason
    );
    let _ = writeln!(
        text,
        "Raw Required Thickness: {:.2} mm",
        report.raw_thickness_mm
    );
    let _ = writeln!(
        text,
        "Recommended Thickness (with {:.0}% Safety Margin): {:.2} mm",
        report.margin_fraction * 100.0,
        report.recommended_thickness_mm
    );
    text
}
