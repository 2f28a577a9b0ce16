#[cfg(test)]
#[path = "../tests/scanner/hydrostatic_scanner_test.rs"]
mod tests;
//
use super::scanner_conf::HydrostaticScannerConf;
use crate::{
    common::{dbg_id::DbgId, numbers, table::Table},
    source::PageTextSource,
};
///
/// Reads the hydrostatic table from a paged document.
///
/// Table values are held by lines containing the marker (`]:` by default).
/// Each marker line holds values of one column for a block of consecutive rows,
/// so a block of rows is complete after [HydrostaticScannerConf::columns] marker lines.
pub struct HydrostaticScanner {
    dbgid: DbgId,
    conf: HydrostaticScannerConf,
}
//
//
impl HydrostaticScanner {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, conf: HydrostaticScannerConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "HydrostaticScanner"),
            conf,
        }
    }
    ///
    /// Returns the table assembled from all pages of `source`
    /// except first [HydrostaticScannerConf::skip_pages].
    pub fn scan(&self, source: &dyn PageTextSource) -> Table {
        let callee = "scan";
        let mut scan = HydrostaticScan::new(&self.dbgid, &self.conf);
        for index in self.conf.skip_pages..source.page_count() {
            match source.page(index) {
                Some(chars) => scan.page(&chars),
                None => log::warn!("{}.{} | Skipped unreadable page={}", self.dbgid, callee, index),
            }
        }
        let table = scan.finish();
        log::info!("{}.{} | Table rows: {}", self.dbgid, callee, table.len());
        table
    }
}
///
/// Accumulator state of a single [HydrostaticScanner::scan].
struct HydrostaticScan<'a> {
    dbgid: &'a DbgId,
    conf: &'a HydrostaticScannerConf,
    ///
    /// Current line of the page.
    line: String,
    ///
    /// _true_ once the marker is met in the current line.
    row_active: bool,
    ///
    /// Columns of the incomplete block of rows.
    block: Vec<Vec<f64>>,
    table: Table,
}
//
//
impl<'a> HydrostaticScan<'a> {
    //
    //
    fn new(dbgid: &'a DbgId, conf: &'a HydrostaticScannerConf) -> Self {
        Self {
            dbgid,
            conf,
            line: String::new(),
            row_active: false,
            block: Vec::with_capacity(conf.columns),
            table: Table::with_capacity(conf.columns, conf.initial_rows),
        }
    }
    ///
    /// Consumes code points of a page.
    ///
    /// The trailing line of the page is handled as terminated.
    fn page(&mut self, chars: &[char]) {
        for &ch in chars {
            if ch == '\n' || ch == '\r' {
                self.end_line();
            } else {
                self.line.push(ch);
                if !self.row_active && self.line.ends_with(self.conf.marker.as_str()) {
                    self.row_active = true;
                }
            }
        }
        self.end_line();
    }
    //
    //
    fn end_line(&mut self) {
        if self.row_active {
            let values = self
                .line
                .find(self.conf.marker.as_str())
                .map(|pos| numbers::extract(&self.line[pos + self.conf.marker.len()..], false))
                .unwrap_or_default();
            self.insert(values);
        }
        self.line.clear();
        self.row_active = false;
    }
    ///
    /// Adds a column of values to the current block.
    ///
    /// A marker line without values is a column not printed for the block.
    fn insert(&mut self, values: Vec<f64>) {
        if values.is_empty() {
            log::trace!(
                "{}.insert | Marker line without values, column={}",
                self.dbgid,
                self.block.len()
            );
        }
        self.block.push(values);
        if self.block.len() == self.conf.columns {
            self.append_block();
        }
    }
    ///
    /// Moves rows of the complete block into the table.
    ///
    /// Columns without values are zero in every row of the block,
    /// rows missing a value in any other column are dropped.
    fn append_block(&mut self) {
        let callee = "append_block";
        let complete = self
            .block
            .iter()
            .map(Vec::len)
            .filter(|&len| len > 0)
            .min()
            .unwrap_or(0);
        let longest = self.block.iter().map(Vec::len).max().unwrap_or(0);
        if longest > complete {
            log::debug!(
                "{}.{} | Rejected {} row(s) missing values, row_id={}",
                self.dbgid,
                callee,
                longest - complete,
                self.table.len() + complete
            );
        }
        if self.table.len() + complete > self.table.capacity() {
            log::debug!(
                "{}.{} | Growing table over capacity={}",
                self.dbgid,
                callee,
                self.table.capacity()
            );
            self.table.grow(complete);
        }
        for row_id in 0..complete {
            let row = self
                .block
                .iter()
                .map(|column| column.get(row_id).copied().unwrap_or(0.0))
                .collect();
            self.table.push(row);
        }
        self.block.clear();
    }
    ///
    /// Returns the assembled table.
    fn finish(self) -> Table {
        if !self.block.is_empty() {
            log::debug!(
                "{}.finish | Dropped incomplete block of {} column(s)",
                self.dbgid,
                self.block.len()
            );
        }
        self.table
    }
}
