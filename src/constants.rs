// Material properties
pub const ALUMINUM_DENSITY: f64 = 2.70; // Density of aluminum (g/cm³)

// Weber (1964) range-energy fit for electrons in aluminum
pub const WEBER_REGIME_BOUNDARY: f64 = 2.5; // Power-law / linear split (MeV)
pub const WEBER_POWER_COEFFICIENT: f64 = 0.412; // Power-law prefactor (g/cm²)
pub const WEBER_POWER_EXPONENT: f64 = 1.265; // Power-law base exponent
pub const WEBER_POWER_LOG_SLOPE: f64 = 0.0954; // Exponent dependence on ln(E)
pub const WEBER_LINEAR_SLOPE: f64 = 0.530; // Linear slope (g/cm² per MeV)
pub const WEBER_LINEAR_OFFSET: f64 = 0.106; // Linear offset (g/cm²)

// Design defaults
pub const DEFAULT_SIGNIFICANCE_THRESHOLD: f64 = 1e9; // Fluence above which electrons drive the design
pub const DEFAULT_SAFETY_MARGIN: f64 = 0.20; // Fractional overdesign
pub const DEFAULT_MIN_ENERGY: f64 = 0.04; // Low-energy cutoff (MeV)

// Units
pub const MM_PER_CM: f64 = 10.0;
