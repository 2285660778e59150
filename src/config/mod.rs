pub mod material;
pub mod shielding;

pub use material::{Aluminum, CustomMaterial};
pub use shielding::{ConfigOverrides, ShieldingConfig};
