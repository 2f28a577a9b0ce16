#[cfg(test)]
#[path = "../tests/model/loading_condition_id_test.rs"]
mod tests;
//
use crate::error::{Error, StrErr};
use std::{fmt, ops::RangeInclusive, str::FromStr};
///
/// Number of a predefined loading condition of the trim and stability book.
///
/// Parsed from exactly two digits, e. g. `07`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadingConditionId(u8);
//
//
impl LoadingConditionId {
    ///
    /// Loading conditions present in the book.
    pub const RANGE: RangeInclusive<u8> = 1..=31;
    ///
    /// Numeric value of the id.
    pub fn value(&self) -> u8 {
        self.0
    }
    ///
    /// Text heading the loading condition in the book.
    pub fn marker(&self) -> String {
        format!("LOADING CONDITION - COND{:02}", self.0)
    }
}
//
//
impl FromStr for LoadingConditionId {
    type Err = Error;
    //
    //
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::MalformedCondition(StrErr::from(format!(
                "LoadingConditionId.from_str | Improper input format '{}', expected 2 digits",
                s
            ))));
        }
        let value = s.parse::<u8>().map_err(|err| {
            Error::MalformedCondition(StrErr::from(format!(
                "LoadingConditionId.from_str | Failed parsing '{}': {}",
                s, err
            )))
        })?;
        Self::try_from(value)
    }
}
//
//
impl TryFrom<u8> for LoadingConditionId {
    type Error = Error;
    //
    //
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::RANGE.contains(&value) {
            true => Ok(Self(value)),
            false => Err(Error::MalformedCondition(StrErr::from(format!(
                "LoadingConditionId.try_from | Non-existent loading condition {}, expected {:?}",
                value,
                Self::RANGE
            )))),
        }
    }
}
//
//
impl fmt::Display for LoadingConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}
