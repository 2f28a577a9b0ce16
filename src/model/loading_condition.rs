#[cfg(test)]
#[path = "../tests/model/loading_condition_test.rs"]
mod tests;
//
use super::{compartment::CompartmentClass, tank_plan::TankPlan};
use crate::{
    common::{dbg_id::DbgId, interpolation::Interpolation, table::Table},
    error::{Error, StrErr},
    scanner::{cargo_hold_scanner::CargoHoldTables, sounding_scanner::SoundingTables},
};
use indexmap::IndexMap;
///
/// Columns of the sounding tables.
mod sounding_col {
    pub const VOLUME: usize = 1;
    pub const FILL: usize = 8;
    pub const LCG: usize = 9;
    pub const TCG: usize = 10;
    pub const VCG: usize = 11;
    pub const INERTIA: usize = 12;
}
///
/// Columns of the cargo hold tables.
mod hold_col {
    pub const VOLUME: usize = 1;
    pub const LCG: usize = 2;
    pub const TCG: usize = 3;
    pub const VCG: usize = 4;
}
///
/// Row of the cargo hold table holding the hold capacity.
const HOLD_CAPACITY_ROW: usize = 11;
///
/// Mass, center of gravity, and free surface moment of a compartment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompartmentLoad {
    pub mass: f64,
    pub lcg: f64,
    pub tcg: f64,
    pub vcg: f64,
    ///
    /// Free surface moment.
    pub fsm: f64,
}
///
/// Loads of the loading condition compartments in the order of the book.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompartmentProperties {
    loads: IndexMap<String, CompartmentLoad>,
}
//
//
impl CompartmentProperties {
    ///
    /// Load of compartment `id`, if present.
    pub fn get(&self, id: &str) -> Option<&CompartmentLoad> {
        self.loads.get(id)
    }
    //
    //
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompartmentLoad)> {
        self.loads.iter().map(|(id, load)| (id.as_str(), load))
    }
    //
    //
    pub fn len(&self) -> usize {
        self.loads.len()
    }
    //
    //
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
//
//
impl FromIterator<(String, CompartmentLoad)> for CompartmentProperties {
    fn from_iter<I: IntoIterator<Item = (String, CompartmentLoad)>>(iter: I) -> Self {
        Self {
            loads: iter.into_iter().collect(),
        }
    }
}
///
/// Values of a sounding table interpolated by fill percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SoundingValues {
    pub volume: f64,
    pub lcg: f64,
    pub tcg: f64,
    pub vcg: f64,
    pub inertia: f64,
}
///
/// Center of gravity of a cargo hold interpolated by volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldValues {
    pub lcg: f64,
    pub tcg: f64,
    pub vcg: f64,
}
///
/// Normalizes the tank plan of a loading condition into [CompartmentProperties].
///
/// The first compartment failed to normalize fails the whole calculation.
pub struct LoadingCondition<'a> {
    dbgid: DbgId,
    tank_plan: &'a TankPlan,
    sounding_tables: &'a SoundingTables,
    hold_tables: &'a CargoHoldTables,
}
//
//
impl<'a> LoadingCondition<'a> {
    ///
    /// Creates a new instance.
    pub fn new(
        parent: &DbgId,
        tank_plan: &'a TankPlan,
        sounding_tables: &'a SoundingTables,
        hold_tables: &'a CargoHoldTables,
    ) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "LoadingCondition"),
            tank_plan,
            sounding_tables,
            hold_tables,
        }
    }
    ///
    /// Returns loads of all compartments of the tank plan.
    ///
    /// # Errors
    /// [Error::CompartmentResolution] with the id of the first failed compartment.
    pub fn calculate(&self) -> Result<CompartmentProperties, Error> {
        let callee = "calculate";
        let mut loads = IndexMap::with_capacity(self.tank_plan.len());
        for (id, fields) in self.tank_plan.iter() {
            match self.compartment(id, fields) {
                Ok(Some(load)) => {
                    log::debug!("{}.{} | '{}': {:?}", self.dbgid, callee, id, load);
                    loads.insert(id.to_owned(), load);
                }
                Ok(None) => {}
                Err(err) => {
                    let err = err.for_compartment(id);
                    log::error!("{}.{} | {}", self.dbgid, callee, err);
                    return Err(err);
                }
            }
        }
        log::info!("{}.{} | Compartments: {}", self.dbgid, callee, loads.len());
        Ok(CompartmentProperties { loads })
    }
    ///
    /// Returns load of compartment `id`, `None` for entries out of the mass aggregation.
    fn compartment(&self, id: &str, fields: &[f64]) -> Result<Option<CompartmentLoad>, Error> {
        let class = CompartmentClass::of(id)?;
        let load = match class {
            CompartmentClass::CargoHold(hold) => self.cargo_hold(id, hold, fields)?,
            CompartmentClass::FloatingCondition => return Ok(None),
            _ if self.sounding_tables.contains(id) => self.sounded(id, fields)?,
            CompartmentClass::Lightweight => CompartmentLoad {
                mass: field(id, fields, 0)?,
                lcg: field(id, fields, 1)?,
                tcg: field(id, fields, 2)?,
                vcg: field(id, fields, 3)?,
                fsm: 0.0,
            },
            CompartmentClass::Listed => CompartmentLoad {
                mass: field(id, fields, 0)?,
                lcg: field(id, fields, 2)?,
                tcg: field(id, fields, 3)?,
                vcg: field(id, fields, 4)?,
                fsm: field(id, fields, 5)?,
            },
        };
        Ok(Some(load))
    }
    ///
    /// Load of a tank interpolated from its sounding table by the fill percentage.
    fn sounded(&self, id: &str, fields: &[f64]) -> Result<CompartmentLoad, Error> {
        let fill = field(id, fields, 1)?;
        let table = self
            .sounding_tables
            .get(id)
            .ok_or_else(|| missing_table(id, "sounding table"))?;
        let values = self.sounding_values(table, fill)?;
        let density = self.tank_plan.densities().resolve(id)?;
        Ok(CompartmentLoad {
            mass: density * values.volume,
            lcg: values.lcg,
            tcg: values.tcg,
            vcg: values.vcg,
            fsm: density * values.inertia,
        })
    }
    ///
    /// Returns sounding table values at `fill` percentage.
    ///
    /// The inertia moment is never negative.
    pub fn sounding_values(&self, table: &Table, fill: f64) -> Result<SoundingValues, Error> {
        use sounding_col::*;
        let vals = Interpolation::new(&self.dbgid, table, FILL)
            .with_floor(&[INERTIA])
            .get(fill, &[VOLUME, LCG, TCG, VCG, INERTIA])?;
        Ok(SoundingValues {
            volume: vals[0],
            lcg: vals[1],
            tcg: vals[2],
            vcg: vals[3],
            inertia: vals[4],
        })
    }
    ///
    /// Load of a cargo hold, its volume is the fill percentage of the hold capacity.
    fn cargo_hold(&self, id: &str, hold: u8, fields: &[f64]) -> Result<CompartmentLoad, Error> {
        let fill = field(id, fields, 1)?;
        let table = self
            .hold_tables
            .get(hold)
            .ok_or_else(|| missing_table(id, &format!("cargo hold {} table", hold)))?;
        let capacity = table
            .row(HOLD_CAPACITY_ROW)
            .map(|row| row[hold_col::VOLUME])
            .ok_or_else(|| {
                Error::InsufficientData(StrErr::from(format!(
                    "{}.cargo_hold | Hold {} table has {} rows, capacity row {} expected",
                    self.dbgid,
                    hold,
                    table.len(),
                    HOLD_CAPACITY_ROW + 1
                )))
            })?;
        let volume = fill * capacity / 100.0;
        let values = self.hold_values(table, volume)?;
        let density = self.tank_plan.densities().resolve(id)?;
        Ok(CompartmentLoad {
            mass: density * volume,
            lcg: values.lcg,
            tcg: values.tcg,
            vcg: values.vcg,
            fsm: 0.0,
        })
    }
    ///
    /// Returns cargo hold table values at `volume`.
    pub fn hold_values(&self, table: &Table, volume: f64) -> Result<HoldValues, Error> {
        use hold_col::*;
        let vals = Interpolation::new(&self.dbgid, table, VOLUME).get(volume, &[LCG, TCG, VCG])?;
        Ok(HoldValues {
            lcg: vals[0],
            tcg: vals[1],
            vcg: vals[2],
        })
    }
}
///
/// Returns the value `index` of compartment `id` fields.
fn field(id: &str, fields: &[f64], index: usize) -> Result<f64, Error> {
    fields
        .get(index)
        .copied()
        .ok_or_else(|| Error::CompartmentResolution {
            id: id.to_owned(),
            cause: StrErr::from(format!(
                "LoadingCondition.field | Expected value {} of {} value(s)",
                index + 1,
                fields.len()
            )),
        })
}
//
//
fn missing_table(id: &str, table: &str) -> Error {
    Error::CompartmentResolution {
        id: id.to_owned(),
        cause: StrErr::from(format!("LoadingCondition | Missing {}", table)),
    }
}
