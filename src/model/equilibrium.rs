//!
//! Floating equilibrium of the ship.
//!
//! This is a first order approximation: hydrostatic values are taken
//! at zero trim and the result isn't iterated to convergence.
//! Accuracy of trim and heel degrades for loading conditions
//! dominated by free surface effects.
//
pub mod equilibrium_conf;
#[cfg(test)]
#[path = "../tests/model/equilibrium_test.rs"]
mod tests;
//
use super::loading_condition::CompartmentProperties;
use crate::{
    common::{dbg_id::DbgId, interpolation::Interpolation, table::Table},
    error::Error,
};
use equilibrium_conf::EquilibriumConf;
///
/// Columns of the hydrostatic table.
mod hydrostatic_col {
    pub const DRAUGHT: usize = 0;
    pub const DISPLACEMENT: usize = 1;
    pub const LCF: usize = 4;
    pub const LCB: usize = 5;
    pub const VCB: usize = 6;
    pub const KMT: usize = 7;
    pub const MCT: usize = 11;
}
///
/// Hydrostatic values at a displacement.
///
/// LCF and LCB are measured from the aft perpendicular.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hydrostatics {
    pub draught_moulded: f64,
    pub lcf: f64,
    pub lcb: f64,
    pub vcb: f64,
    pub kmt: f64,
    pub mct: f64,
}
///
/// Floating equilibrium of the ship.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EquilibriumResult {
    ///
    /// Total mass, tons.
    pub displacement: f64,
    pub lcg: f64,
    pub tcg: f64,
    pub vcg: f64,
    pub draught_moulded: f64,
    pub lcf: f64,
    pub lcb: f64,
    pub vcb: f64,
    pub kmt: f64,
    pub mct: f64,
    ///
    /// Difference between aft and forward draughts, meters.
    pub trim: f64,
    ///
    /// Metacentric height.
    pub gm: f64,
    ///
    /// Heel angle, degrees.
    pub heel: f64,
    pub draught_fwd: f64,
    pub draught_aft: f64,
}
//
//
impl EquilibriumResult {
    ///
    /// _true_ if the total mass is zero, centers of gravity are meaningless then.
    pub fn is_degenerate(&self) -> bool {
        self.displacement == 0.0
    }
}
///
/// Solves the floating equilibrium from compartment loads and the hydrostatic table.
pub struct Equilibrium {
    dbgid: DbgId,
    conf: EquilibriumConf,
}
//
//
impl Equilibrium {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, conf: EquilibriumConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "Equilibrium"),
            conf,
        }
    }
    ///
    /// Returns the equilibrium of the ship loaded with `loads`.
    ///
    /// Zero displacement isn't an error: it's reported by the log
    /// and the centers of gravity are left zero.
    pub fn solve(
        &self,
        loads: &CompartmentProperties,
        hydrostatic_table: &Table,
    ) -> Result<EquilibriumResult, Error> {
        let callee = "solve";
        let mut displacement = 0.0;
        let mut longitudinal_moment = 0.0;
        let mut transverse_moment = 0.0;
        let mut vertical_moment = 0.0;
        for (_, load) in loads.iter() {
            displacement += load.mass;
            longitudinal_moment += load.mass * load.lcg;
            transverse_moment += load.mass * load.tcg + load.fsm;
            vertical_moment += load.mass * load.vcg;
        }
        let (lcg, tcg, vcg) = if displacement != 0.0 {
            (
                longitudinal_moment / displacement,
                transverse_moment / displacement,
                vertical_moment / displacement,
            )
        } else {
            log::warn!(
                "{}.{} | Degenerate displacement: total mass is zero",
                self.dbgid,
                callee
            );
            (0.0, 0.0, 0.0)
        };
        let hydrostatics = self.hydrostatics(hydrostatic_table, displacement)?;
        let trim = displacement * (hydrostatics.lcb - lcg) / (100.0 * hydrostatics.mct);
        let gm = hydrostatics.kmt - vcg;
        let heel = (tcg / gm).atan().to_degrees();
        let result = EquilibriumResult {
            displacement,
            lcg,
            tcg,
            vcg,
            draught_moulded: hydrostatics.draught_moulded,
            lcf: hydrostatics.lcf,
            lcb: hydrostatics.lcb,
            vcb: hydrostatics.vcb,
            kmt: hydrostatics.kmt,
            mct: hydrostatics.mct,
            trim,
            gm,
            heel,
            draught_fwd: hydrostatics.draught_moulded - 0.5 * trim,
            draught_aft: hydrostatics.draught_moulded + 0.5 * trim,
        };
        log::info!("{}.{} | {:?}", self.dbgid, callee, result);
        Ok(result)
    }
    ///
    /// Returns hydrostatic values at `displacement`.
    pub fn hydrostatics(&self, table: &Table, displacement: f64) -> Result<Hydrostatics, Error> {
        use hydrostatic_col::*;
        let vals = Interpolation::new(&self.dbgid, table, DISPLACEMENT)
            .get(displacement, &[DRAUGHT, LCF, LCB, VCB, KMT, MCT])?;
        Ok(Hydrostatics {
            draught_moulded: vals[0],
            lcf: self.conf.half_lbp + vals[1],
            lcb: self.conf.half_lbp + vals[2],
            vcb: vals[3],
            kmt: vals[4],
            mct: vals[5],
        })
    }
}
