pub mod hazard;
pub mod range;
pub mod thickness;
