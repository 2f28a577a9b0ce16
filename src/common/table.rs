#[cfg(test)]
#[path = "../tests/common/table_test.rs"]
mod tests;
//
use std::ops::Index;
///
/// Matrix of numbers with the fixed row width.
///
/// Meaning of each column is positional and defined by the table kind.
/// Only rows of exactly `width` values are stored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    width: usize,
    rows: Vec<Vec<f64>>,
}
//
//
impl Table {
    ///
    /// Creates an empty table of rows having `width` values.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: vec![],
        }
    }
    ///
    /// Creates an empty table with space reserved for `rows` rows.
    pub fn with_capacity(width: usize, rows: usize) -> Self {
        Self {
            width,
            rows: Vec::with_capacity(rows),
        }
    }
    ///
    /// Creates a table of those `rows`, which have exactly `width` values.
    pub fn from_rows(width: usize, rows: impl IntoIterator<Item = Vec<f64>>) -> Self {
        let mut table = Self::new(width);
        for row in rows {
            table.push(row);
        }
        table
    }
    ///
    /// Number of values in each row.
    pub fn width(&self) -> usize {
        self.width
    }
    ///
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    //
    //
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    ///
    /// Number of rows the table can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.rows.capacity()
    }
    ///
    /// Reserves space for at least `additional` more rows.
    pub fn grow(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }
    ///
    /// Appends `row` if it has exactly [Table::width] values.
    ///
    /// Returns _false_ if the row is rejected.
    pub fn push(&mut self, row: Vec<f64>) -> bool {
        if row.len() != self.width {
            return false;
        }
        self.rows.push(row);
        true
    }
    ///
    /// Returns the row by its index, if present.
    pub fn row(&self, id: usize) -> Option<&[f64]> {
        self.rows.get(id).map(Vec::as_slice)
    }
    ///
    /// Returns an iterator over rows in their order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }
}
//
//
impl Index<usize> for Table {
    type Output = [f64];
    //
    //
    fn index(&self, id: usize) -> &Self::Output {
        &self.rows[id]
    }
}
