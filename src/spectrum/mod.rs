pub mod reader;

pub use reader::{SpectrumReader, SpectrumReading};
