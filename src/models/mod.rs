pub mod material;
pub mod results;
pub mod spectrum;

pub use material::ShieldMaterial;
pub use results::{
    FloorReport, HazardEnergy, ProfilePoint, RangeRegime, RangeResult, ShieldingReport,
    ThicknessResult,
};
pub use spectrum::{Spectrum, SpectrumSample};
