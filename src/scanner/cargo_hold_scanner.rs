#[cfg(test)]
#[path = "../tests/scanner/cargo_hold_scanner_test.rs"]
mod tests;
//
use super::scanner_conf::CargoHoldScannerConf;
use crate::{
    common::{dbg_id::DbgId, numbers, table::Table},
    error::Error,
    source,
};
use indexmap::IndexMap;
use std::io::BufRead;
///
/// Calibration tables by cargo hold number.
#[derive(Clone, Debug, Default)]
pub struct CargoHoldTables {
    tables: IndexMap<u8, Table>,
}
//
//
impl CargoHoldTables {
    ///
    /// Returns the table of hold `hold`, if present.
    pub fn get(&self, hold: u8) -> Option<&Table> {
        self.tables.get(&hold)
    }
    //
    //
    pub fn len(&self) -> usize {
        self.tables.len()
    }
    //
    //
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
//
//
impl FromIterator<(u8, Table)> for CargoHoldTables {
    fn from_iter<I: IntoIterator<Item = (u8, Table)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
///
/// Reads the calibration table of a cargo hold.
///
/// Columns: sounding, volume, lcg, tcg, vcg, spare.
pub struct CargoHoldScanner {
    dbgid: DbgId,
    conf: CargoHoldScannerConf,
}
//
//
impl CargoHoldScanner {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, conf: CargoHoldScannerConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "CargoHoldScanner"),
            conf,
        }
    }
    ///
    /// Returns the table read from `reader`.
    ///
    /// Blank lines and rows of a wrong width are dropped.
    pub fn scan(&self, reader: impl BufRead) -> Result<Table, Error> {
        let callee = "scan";
        let mut table = Table::new(self.conf.columns);
        for (try_line, line_id) in source::read_lines(&self.dbgid, reader).zip(1..) {
            let line = try_line?;
            if line_id <= self.conf.preamble_lines || line.trim().is_empty() {
                continue;
            }
            let row = numbers::leading(&line);
            let len = row.len();
            if !table.push(row) {
                log::debug!(
                    "{}.{} | Rejected row of {} values at line={}",
                    self.dbgid,
                    callee,
                    len,
                    line_id
                );
            }
        }
        log::debug!("{}.{} | Table rows: {}", self.dbgid, callee, table.len());
        Ok(table)
    }
}
