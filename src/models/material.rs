pub trait ShieldMaterial {
    fn name(&self) -> &str;
    fn density_g_cm3(&self) -> f64;
}
