//!
//! Compartment ids of the tank plan and their classification.
//!
//! Tank ids look like `R<content>.<number>[P|S]`, e. g. `R2.05P`,
//! where `<content>` selects the density of the compartment content.
//! Cargo holds are the tanks of content `1`, the hold number follows the dot.
//! Other entries of the plan have the literal ids of [SpecialKey].
//
#[cfg(test)]
#[path = "../tests/model/compartment_test.rs"]
mod tests;
//
use crate::error::{Error, StrErr};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
///
/// Literal ids of the tank plan entries, which aren't tanks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
pub enum SpecialKey {
    #[strum(serialize = "Lightweight")]
    Lightweight,
    ///
    /// Equilibrium summary of the book closing the loading condition.
    #[strum(serialize = "Floating Condition")]
    FloatingCondition,
    #[strum(serialize = "Crew and Stores")]
    CrewAndStores,
    #[strum(serialize = "Oil and Water")]
    OilAndWater,
}
//
//
impl SpecialKey {
    ///
    /// Text of the book line holding the entry values.
    ///
    /// The floating condition is located by its own pattern, so it has no trigger.
    pub fn trigger(&self) -> Option<&'static str> {
        match self {
            SpecialKey::Lightweight => Some("Lightweight"),
            SpecialKey::FloatingCondition => None,
            SpecialKey::CrewAndStores => Some("CREW&ST."),
            SpecialKey::OilAndWater => Some("OIL&WAT."),
        }
    }
}
///
/// Prefix of cargo hold ids.
const CARGO_HOLD_PREFIX: &str = "R1.";
///
/// The way a compartment is normalized, selected by the shape of its id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompartmentClass {
    ///
    /// Cargo hold with its number.
    CargoHold(u8),
    ///
    /// Never normalized, marks the end of the loading condition.
    FloatingCondition,
    Lightweight,
    ///
    /// Tanks and the rest of entries:
    /// interpolated if the sounding table is present, taken from the plan otherwise.
    Listed,
}
//
//
impl CompartmentClass {
    ///
    /// Returns the class of compartment `id`.
    pub fn of(id: &str) -> Result<Self, Error> {
        if id.len() > CARGO_HOLD_PREFIX.len() && id.starts_with(CARGO_HOLD_PREFIX) {
            let hold = id
                .chars()
                .nth(CARGO_HOLD_PREFIX.len())
                .and_then(|ch| ch.to_digit(10))
                .ok_or_else(|| Error::CompartmentResolution {
                    id: id.to_owned(),
                    cause: StrErr::from(format!(
                        "CompartmentClass.of | Expected hold number digit after '{}'",
                        CARGO_HOLD_PREFIX
                    )),
                })?;
            return Ok(Self::CargoHold(hold as u8));
        }
        Ok(match SpecialKey::from_str(id) {
            Ok(SpecialKey::FloatingCondition) => Self::FloatingCondition,
            Ok(SpecialKey::Lightweight) => Self::Lightweight,
            _ => Self::Listed,
        })
    }
}
///
/// Returns the 1-based density slot of compartment `id`, its 2nd character.
pub fn density_slot(id: &str) -> Result<usize, Error> {
    id.chars()
        .nth(1)
        .and_then(|ch| ch.to_digit(10))
        .map(|digit| digit as usize)
        .ok_or_else(|| Error::CompartmentResolution {
            id: id.to_owned(),
            cause: StrErr::from("density_slot | Invalid id format, expected digit at 2nd position"),
        })
}
