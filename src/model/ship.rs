#[cfg(test)]
#[path = "../tests/model/ship_test.rs"]
mod tests;
//
use super::{
    equilibrium::{Equilibrium, EquilibriumResult},
    loading_condition::LoadingCondition,
    loading_condition_id::LoadingConditionId,
    ship_conf::ShipConf,
    tank_plan::TankPlan,
};
use crate::{
    common::{dbg_id::DbgId, table::Table},
    error::Error,
    scanner::{
        cargo_hold_scanner::{CargoHoldScanner, CargoHoldTables},
        hydrostatic_scanner::HydrostaticScanner,
        sounding_scanner::{SoundingScanner, SoundingTables},
        trim_stability_scanner::TrimStabilityScanner,
    },
    source,
};
///
/// The ship described by its reference documents.
///
/// Each calculation reads all the documents it needs before computing anything,
/// so a failure of any document leaves no partial result.
pub struct Ship {
    dbgid: DbgId,
    conf: ShipConf,
}
//
//
impl Ship {
    ///
    /// Creates a new instance.
    ///
    /// Note that documents aren't read until [Ship::equilibrium] is called.
    pub fn new(parent: &DbgId, conf: ShipConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "Ship"),
            conf,
        }
    }
    ///
    /// Returns the floating equilibrium of the ship in loading condition `condition`.
    pub fn equilibrium(&self, condition: &LoadingConditionId) -> Result<EquilibriumResult, Error> {
        let callee = "equilibrium";
        log::info!("{}.{} | Loading condition {}...", self.dbgid, callee, condition);
        let tank_plan = self.tank_plan(condition)?;
        let sounding_tables = self.sounding_tables(&tank_plan)?;
        let hold_tables = self.hold_tables(&tank_plan)?;
        let hydrostatic_table = self.hydrostatic_table()?;
        let loads =
            LoadingCondition::new(&self.dbgid, &tank_plan, &sounding_tables, &hold_tables)
                .calculate()?;
        let result =
            Equilibrium::new(&self.dbgid, self.conf.equilibrium.clone()).solve(&loads, &hydrostatic_table)?;
        log::info!("{}.{} | Loading condition {} - OK", self.dbgid, callee, condition);
        Ok(result)
    }
    //
    //
    fn tank_plan(&self, condition: &LoadingConditionId) -> Result<TankPlan, Error> {
        let book = source::open_pages(&self.dbgid, &self.conf.trim_stability_book)?;
        TrimStabilityScanner::new(&self.dbgid, self.conf.trim_stability.clone())
            .scan(book.as_ref(), condition)
    }
    ///
    /// Sounding tables of the tank plan compartments.
    fn sounding_tables(&self, tank_plan: &TankPlan) -> Result<SoundingTables, Error> {
        let reader = source::open_lines(&self.dbgid, &self.conf.sounding_tables)?;
        SoundingScanner::new(&self.dbgid, self.conf.sounding.clone()).scan(reader, &tank_plan.ids())
    }
    ///
    /// Calibration tables of the cargo holds present in the tank plan.
    fn hold_tables(&self, tank_plan: &TankPlan) -> Result<CargoHoldTables, Error> {
        let scanner = CargoHoldScanner::new(&self.dbgid, self.conf.cargo_hold.clone());
        tank_plan
            .hold_numbers()
            .into_iter()
            .map(|hold| {
                let reader = source::open_lines(&self.dbgid, &self.conf.cargo_hold_path(hold))?;
                scanner.scan(reader).map(|table| (hold, table))
            })
            .collect()
    }
    //
    //
    fn hydrostatic_table(&self) -> Result<Table, Error> {
        let document = source::open_pages(&self.dbgid, &self.conf.hydrostatic_tables)?;
        Ok(HydrostaticScanner::new(&self.dbgid, self.conf.hydrostatic.clone()).scan(document.as_ref()))
    }
}
