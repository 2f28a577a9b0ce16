#[cfg(test)]
#[path = "../tests/common/interpolation_test.rs"]
mod tests;
//
use super::{dbg_id::DbgId, table::Table};
use crate::error::{Error, StrErr};
///
/// Linear interpolation over a [Table] between the two rows nearest to the query.
///
/// Rows are selected by the absolute distance between their reference value and the query,
/// it is not a bracketing search: a query outside of the table range is extrapolated
/// from the two boundary rows.
///
/// # Examples
/// ```
/// use loadicator::common::{dbg_id::DbgId, interpolation::Interpolation, table::Table};
/// //
/// let dbgid = DbgId("example".to_owned());
/// // reference column is the first one
/// let table = Table::from_rows(2, [vec![50.0, 100.0], vec![60.0, 120.0]]);
/// let vals = Interpolation::new(&dbgid, &table, 0).get(55.0, &[1]).unwrap();
/// assert_eq!(vals, vec![110.0]);
/// ```
pub struct Interpolation<'a> {
    dbgid: DbgId,
    table: &'a Table,
    reference: usize,
    floored: Vec<usize>,
}
//
//
impl<'a> Interpolation<'a> {
    ///
    /// Creates a new instance.
    /// - `reference` - index of the column the query is compared against
    pub fn new(parent: &DbgId, table: &'a Table, reference: usize) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "Interpolation"),
            table,
            reference,
            floored: vec![],
        }
    }
    ///
    /// Returns the instance clamping interpolated values of `columns` at zero from below.
    pub fn with_floor(mut self, columns: &[usize]) -> Self {
        self.floored = columns.to_vec();
        self
    }
    ///
    /// Returns indexes of the nearest and the second nearest rows to `query`.
    ///
    /// On equal distance the earlier row is kept.
    pub fn nearest(&self, query: f64) -> Result<(usize, usize), Error> {
        let callee = "nearest";
        if self.table.len() < 2 {
            return Err(Error::InsufficientData(StrErr::from(format!(
                "{}.{} | Expected at least 2 rows, found {}",
                self.dbgid,
                callee,
                self.table.len()
            ))));
        }
        self.check_column(self.reference, callee)?;
        let distance = |row_id: usize| (self.table[row_id][self.reference] - query).abs();
        let (mut id1, mut id2) = (0, 1);
        let (mut diff1, mut diff2) = (distance(0), distance(1));
        if diff2 < diff1 {
            std::mem::swap(&mut id1, &mut id2);
            std::mem::swap(&mut diff1, &mut diff2);
        }
        for row_id in 2..self.table.len() {
            let diff = distance(row_id);
            if diff < diff1 {
                (id2, diff2) = (id1, diff1);
                (id1, diff1) = (row_id, diff);
            } else if diff < diff2 {
                (id2, diff2) = (row_id, diff);
            }
        }
        log::trace!(
            "{}.{} | query={} rows=({}, {}) distances=({}, {})",
            self.dbgid,
            callee,
            query,
            id1,
            id2,
            diff1,
            diff2
        );
        Ok((id1, id2))
    }
    ///
    /// Returns values of `outputs` columns interpolated at `query`.
    ///
    /// Values are returned in the order of `outputs`.
    /// If both nearest rows have the same reference value,
    /// values of the nearest row are returned as is.
    pub fn get(&self, query: f64, outputs: &[usize]) -> Result<Vec<f64>, Error> {
        let callee = "get";
        for &col in outputs {
            self.check_column(col, callee)?;
        }
        let (id1, id2) = self.nearest(query)?;
        let row1 = &self.table[id1];
        let row2 = &self.table[id2];
        let (ref1, ref2) = (row1[self.reference], row2[self.reference]);
        if ref1 == ref2 {
            return Ok(outputs.iter().map(|&col| row1[col]).collect());
        }
        let fraction = (query - ref1) / (ref2 - ref1);
        Ok(outputs
            .iter()
            .map(|&col| {
                let val = row1[col] + fraction * (row2[col] - row1[col]);
                match self.floored.contains(&col) && val < 0.0 {
                    true => 0.0,
                    false => val,
                }
            })
            .collect())
    }
    //
    //
    fn check_column(&self, col: usize, callee: &str) -> Result<(), Error> {
        match col < self.table.width() {
            true => Ok(()),
            false => Err(Error::InsufficientData(StrErr::from(format!(
                "{}.{} | Column {} is out of table width {}",
                self.dbgid,
                callee,
                col,
                self.table.width()
            )))),
        }
    }
}
