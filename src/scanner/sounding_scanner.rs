#[cfg(test)]
#[path = "../tests/scanner/sounding_scanner_test.rs"]
mod tests;
//
use super::scanner_conf::SoundingScannerConf;
use crate::{
    common::{dbg_id::DbgId, numbers, table::Table},
    error::Error,
    source,
};
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use std::{io::BufRead, ops::ControlFlow, sync::OnceLock};
///
/// Sounding tables by compartment id.
///
/// Columns of each table: fill level reference, volume, ..., fill percentage (8),
/// lcg (9), tcg (10), vcg (11), inertia moment (12).
#[derive(Clone, Debug, Default)]
pub struct SoundingTables {
    tables: IndexMap<String, Table>,
}
//
//
impl SoundingTables {
    ///
    /// Returns the table of compartment `id`, if present.
    pub fn get(&self, id: &str) -> Option<&Table> {
        self.tables.get(id)
    }
    ///
    /// Returns `true` if compartment `id` has a table.
    pub fn contains(&self, id: &str) -> bool {
        self.tables.contains_key(id)
    }
    ///
    /// Ids of compartments having tables, in order of the document.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
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
impl FromIterator<(String, Table)> for SoundingTables {
    fn from_iter<I: IntoIterator<Item = (String, Table)>>(iter: I) -> Self {
        Self {
            tables: iter.into_iter().collect(),
        }
    }
}
///
/// Reads sounding tables of the wanted compartments from a line oriented document.
///
/// A block of the document starts with `Compartment ident: <id>` line
/// followed by header lines and ends with a line of 3 or more dashes.
/// A row may be wrapped over several physical lines.
pub struct SoundingScanner {
    dbgid: DbgId,
    conf: SoundingScannerConf,
}
//
//
impl SoundingScanner {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, conf: SoundingScannerConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "SoundingScanner"),
            conf,
        }
    }
    ///
    /// Returns tables of `wanted` compartments found in `reader`.
    ///
    /// Scanning stops at the `Compartment ident:` line of an unwanted compartment
    /// met inside an open block.
    pub fn scan(
        &self,
        reader: impl BufRead,
        wanted: &IndexSet<String>,
    ) -> Result<SoundingTables, Error> {
        let callee = "scan";
        let mut scan = SoundingScan::new(&self.dbgid, &self.conf, wanted);
        for (try_line, line_id) in source::read_lines(&self.dbgid, reader).zip(1..) {
            let line = try_line?;
            if line_id <= self.conf.preamble_lines {
                continue;
            }
            if scan.line(line.trim_start()).is_break() {
                log::debug!("{}.{} | Stopped at line={}", self.dbgid, callee, line_id);
                break;
            }
        }
        let tables = scan.finish();
        log::info!(
            "{}.{} | Found {} of {} wanted table(s)",
            self.dbgid,
            callee,
            tables.len(),
            wanted.len()
        );
        Ok(tables)
    }
}
//
//
fn ident_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Compartment ident: (\S+)").expect("valid ident pattern"))
}
///
/// Accumulator state of a single [SoundingScanner::scan].
struct SoundingScan<'a> {
    dbgid: &'a DbgId,
    conf: &'a SoundingScannerConf,
    wanted: &'a IndexSet<String>,
    ///
    /// Compartment id of the open block.
    key: Option<String>,
    ///
    /// Header lines left to skip.
    skip: usize,
    ///
    /// _true_ once the open block has got a data line.
    capturing: bool,
    ///
    /// Values of the row being gathered from wrapped lines.
    pending: Vec<f64>,
    rows: Table,
    tables: IndexMap<String, Table>,
}
//
//
impl<'a> SoundingScan<'a> {
    //
    //
    fn new(dbgid: &'a DbgId, conf: &'a SoundingScannerConf, wanted: &'a IndexSet<String>) -> Self {
        Self {
            dbgid,
            conf,
            wanted,
            key: None,
            skip: 0,
            capturing: false,
            pending: vec![],
            rows: Table::new(conf.columns),
            tables: IndexMap::new(),
        }
    }
    ///
    /// Consumes a line with leading whitespaces trimmed.
    fn line(&mut self, line: &str) -> ControlFlow<()> {
        if let Some(caps) = ident_regex().captures(line) {
            let id = &caps[1];
            if self.wanted.contains(id) {
                self.commit();
                self.key = Some(id.to_owned());
                self.skip = self.conf.header_lines;
                self.capturing = false;
            } else if self.capturing {
                log::debug!(
                    "{}.line | Unwanted compartment '{}' inside open block",
                    self.dbgid,
                    id
                );
                return ControlFlow::Break(());
            }
        }
        if self.key.is_none() {
            return ControlFlow::Continue(());
        }
        if self.skip > 0 {
            self.skip -= 1;
        } else if line.contains("---") {
            self.commit();
        } else {
            self.capturing = true;
            self.pending.extend(numbers::leading(line));
            if self.pending.len() >= self.conf.columns {
                let row = std::mem::take(&mut self.pending);
                let len = row.len();
                if !self.rows.push(row) {
                    log::debug!(
                        "{}.line | Rejected row of {} values in '{}'",
                        self.dbgid,
                        len,
                        self.key.as_deref().unwrap_or_default()
                    );
                }
            }
        }
        ControlFlow::Continue(())
    }
    ///
    /// Closes the open block storing its rows.
    fn commit(&mut self) {
        if !self.pending.is_empty() {
            log::debug!(
                "{}.commit | Rejected row of {} values in '{}'",
                self.dbgid,
                self.pending.len(),
                self.key.as_deref().unwrap_or_default()
            );
            self.pending.clear();
        }
        let rows = std::mem::replace(&mut self.rows, Table::new(self.conf.columns));
        if let Some(key) = self.key.take() {
            if !rows.is_empty() {
                log::debug!("{}.commit | '{}' rows: {}", self.dbgid, key, rows.len());
                self.tables.insert(key, rows);
            }
        }
        self.capturing = false;
    }
    ///
    /// Returns collected tables, the open block included.
    fn finish(mut self) -> SoundingTables {
        self.commit();
        SoundingTables {
            tables: self.tables,
        }
    }
}
