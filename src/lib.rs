//! Electron radiation shielding sizing.
//!
//! Reads an electron fluence spectrum, picks the highest energy whose
//! fluence is still significant, converts it to a stopping range with
//! Weber's range-energy relation for aluminum and turns that range into a
//! recommended shield thickness with a safety margin.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod output;
pub mod physics;
pub mod pipeline;
pub mod spectrum;

pub use config::{ConfigOverrides, ShieldingConfig};
pub use errors::{PipelineError, ShieldingError, Stage};
pub use pipeline::{ShieldingPipeline, ShieldingRun, StructuralFloor};
