#[cfg(test)]
#[path = "../tests/model/tank_plan_test.rs"]
mod tests;
//
use super::compartment::{density_slot, CompartmentClass, SpecialKey};
use crate::error::{Error, StrErr};
use indexmap::{IndexMap, IndexSet};
///
/// Densities of the compartment contents.
///
/// Slot `n` (1-based) holds the density of the content digit `n` of tank ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DensityTable {
    slots: Vec<Option<f64>>,
}
//
//
impl DensityTable {
    ///
    /// Density of the slot `slot`, if populated.
    pub fn get(&self, slot: usize) -> Option<f64> {
        slot.checked_sub(1)
            .and_then(|id| self.slots.get(id).copied().flatten())
    }
    ///
    /// Number of slots, populated or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    //
    //
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    ///
    /// Returns density of the content of compartment `id`.
    pub fn resolve(&self, id: &str) -> Result<f64, Error> {
        let slot = density_slot(id)?;
        self.get(slot).ok_or_else(|| Error::CompartmentResolution {
            id: id.to_owned(),
            cause: StrErr::from(format!(
                "DensityTable.resolve | Density slot {} out of populated range 1..={}",
                slot,
                self.slots.len()
            )),
        })
    }
}
//
//
impl From<Vec<Option<f64>>> for DensityTable {
    fn from(slots: Vec<Option<f64>>) -> Self {
        Self { slots }
    }
}
//
//
impl From<Vec<f64>> for DensityTable {
    fn from(densities: Vec<f64>) -> Self {
        Self {
            slots: densities.into_iter().map(Some).collect(),
        }
    }
}
///
/// Raw values of the loading condition compartments in the order of the book.
///
/// Meaning of the values depends on the compartment class (see [CompartmentClass]).
#[derive(Clone, Debug, Default)]
pub struct TankPlan {
    fields: IndexMap<String, Vec<f64>>,
    densities: DensityTable,
}
//
//
impl TankPlan {
    ///
    /// Creates a new instance.
    pub fn new(fields: IndexMap<String, Vec<f64>>, densities: DensityTable) -> Self {
        Self { fields, densities }
    }
    ///
    /// Values of compartment `id`, if present.
    pub fn fields(&self, id: &str) -> Option<&[f64]> {
        self.fields.get(id).map(Vec::as_slice)
    }
    ///
    /// Returns an iterator over compartments and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.fields
            .iter()
            .map(|(id, fields)| (id.as_str(), fields.as_slice()))
    }
    ///
    /// Compartment ids in the order of the book.
    pub fn ids(&self) -> IndexSet<String> {
        self.fields.keys().cloned().collect()
    }
    //
    //
    pub fn len(&self) -> usize {
        self.fields.len()
    }
    //
    //
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
    //
    //
    pub fn densities(&self) -> &DensityTable {
        &self.densities
    }
    ///
    /// Numbers of the cargo holds present in the plan.
    pub fn hold_numbers(&self) -> IndexSet<u8> {
        self.fields
            .keys()
            .filter_map(|id| match CompartmentClass::of(id) {
                Ok(CompartmentClass::CargoHold(hold)) => Some(hold),
                _ => None,
            })
            .collect()
    }
    ///
    /// Floating condition summary as printed in the book.
    ///
    /// It is the book's own result for the loading condition,
    /// not used in calculations.
    pub fn floating_condition(&self) -> Option<&[f64]> {
        self.fields(SpecialKey::FloatingCondition.as_ref())
    }
}
