///
/// [super::Equilibrium] configuration.
#[derive(Clone, Debug)]
pub struct EquilibriumConf {
    ///
    /// Half of the length between perpendiculars, in meters.
    ///
    /// Longitudinal centers of the hydrostatic table are measured from midship,
    /// adding this value measures them from the aft perpendicular.
    pub half_lbp: f64,
}
//
//
impl Default for EquilibriumConf {
    fn default() -> Self {
        Self { half_lbp: 139.1 }
    }
}
