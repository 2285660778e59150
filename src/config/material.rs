use crate::constants::ALUMINUM_DENSITY;
use crate::models::material::ShieldMaterial;

pub struct Aluminum;

impl Aluminum {
    pub const NAME: &'static str = "Aluminum";
    pub const DENSITY: f64 = ALUMINUM_DENSITY; // g/cm³
}

impl ShieldMaterial for Aluminum {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn density_g_cm3(&self) -> f64 {
        Self::DENSITY
    }
}

/// Material described by configuration rather than built in.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMaterial {
    pub name: String,
    pub density_g_cm3: f64,
}

impl CustomMaterial {
    pub fn new(name: impl Into<String>, density_g_cm3: f64) -> Self {
        CustomMaterial {
            name: name.into(),
            density_g_cm3,
        }
    }
}

impl ShieldMaterial for CustomMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn density_g_cm3(&self) -> f64 {
        self.density_g_cm3
    }
}
