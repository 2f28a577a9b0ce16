#[cfg(test)]
#[path = "tests/report_test.rs"]
mod tests;
//
use crate::model::{equilibrium::EquilibriumResult, loading_condition_id::LoadingConditionId};
use std::fmt;
///
/// Text rendition of the loading condition equilibrium.
pub struct Report<'a> {
    condition: &'a LoadingConditionId,
    result: &'a EquilibriumResult,
}
//
//
impl<'a> Report<'a> {
    ///
    /// Creates a new instance.
    pub fn new(condition: &'a LoadingConditionId, result: &'a EquilibriumResult) -> Self {
        Self { condition, result }
    }
}
//
//
impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        writeln!(f, "Loading Condition: {}", self.condition)?;
        writeln!(f, "Total weight: {} [tons]", r.displacement)?;
        writeln!(f, "LCG: {} [m from AP]", r.lcg)?;
        writeln!(f, "TCG: {} [m]", r.tcg)?;
        writeln!(f, "VCG: {} [m]", r.vcg)?;
        writeln!(f, "Draught moulded: {} [m]", r.draught_moulded)?;
        writeln!(f, "LCF: {} [m from AP]", r.lcf)?;
        writeln!(f, "LCB: {} [m from AP]", r.lcb)?;
        writeln!(f, "VCB: {} [m]", r.vcb)?;
        writeln!(f, "KMT: {} [m]", r.kmt)?;
        writeln!(f, "MCT: {} [tons/cm]", r.mct)?;
        writeln!(f, "Trim: {} [m]", r.trim)?;
        writeln!(f, "GM: {} [m]", r.gm)?;
        writeln!(f, "Heel: {} [deg]", r.heel)?;
        writeln!(f, "TF: {} [m]", r.draught_fwd)?;
        writeln!(f, "TA: {} [m]", r.draught_aft)
    }
}
