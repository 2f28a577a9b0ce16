#[cfg(test)]
#[path = "../tests/scanner/trim_stability_scanner_test.rs"]
mod tests;
//
use super::scanner_conf::TrimStabilityScannerConf;
use crate::{
    common::{dbg_id::DbgId, numbers},
    error::{Error, StrErr},
    model::{
        compartment::SpecialKey,
        loading_condition_id::LoadingConditionId,
        tank_plan::{DensityTable, TankPlan},
    },
    source::PageTextSource,
};
use indexmap::IndexMap;
use regex::Regex;
use std::{ops::ControlFlow, sync::OnceLock};
use strum::IntoEnumIterator;
///
/// Reads the tank plan of a loading condition from the trim and stability book.
///
/// The loading condition starts at the page containing its heading
/// (see [LoadingConditionId::marker]) and ends at `Draught moulded` line
/// of the floating condition summary.
pub struct TrimStabilityScanner {
    dbgid: DbgId,
    conf: TrimStabilityScannerConf,
}
//
//
impl TrimStabilityScanner {
    ///
    /// Creates a new instance.
    pub fn new(parent: &DbgId, conf: TrimStabilityScannerConf) -> Self {
        Self {
            dbgid: DbgId::with_parent(parent, "TrimStabilityScanner"),
            conf,
        }
    }
    ///
    /// Returns the tank plan of loading condition `condition` found in `source`.
    ///
    /// # Errors
    /// [Error::PatternNotFound] if either the loading condition heading
    /// or the floating condition summary is missing.
    pub fn scan(
        &self,
        source: &dyn PageTextSource,
        condition: &LoadingConditionId,
    ) -> Result<TankPlan, Error> {
        let callee = "scan";
        let marker = condition.marker();
        let mut scan = TrimStabilityScan::new(&self.dbgid, &self.conf);
        let mut anchor = None;
        for index in 0..source.page_count() {
            let Some(chars) = source.page(index) else {
                log::warn!("{}.{} | Skipped unreadable page={}", self.dbgid, callee, index);
                continue;
            };
            let text: String = chars.into_iter().collect();
            if anchor.is_none() {
                if !text.contains(&marker) {
                    continue;
                }
                log::info!("{}.{} | Found '{}' at page={}", self.dbgid, callee, marker, index);
                anchor = Some(index);
            }
            if scan.page(&text).is_break() {
                let tank_plan = scan.finish();
                log::info!(
                    "{}.{} | Compartments: {}, density slots: {}",
                    self.dbgid,
                    callee,
                    tank_plan.len(),
                    tank_plan.densities().len()
                );
                return Ok(tank_plan);
            }
        }
        Err(Error::PatternNotFound(StrErr::from(match anchor {
            None => format!("{}.{} | Not found '{}'", self.dbgid, callee, marker),
            Some(index) => format!(
                "{}.{} | Not found 'Draught moulded' after '{}' at page={}",
                self.dbgid, callee, marker, index
            ),
        })))
    }
}
//
//
fn tank_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"R[1-6]\.\d{1,2}[PS]?").expect("valid tank id pattern"))
}
//
//
fn number_label_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"NO\.\d+").expect("valid number label pattern"))
}
//
//
fn draught_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"Draught\s+moulded").expect("valid draught pattern"))
}
///
/// Accumulator state of a single [TrimStabilityScanner::scan].
struct TrimStabilityScan<'a> {
    dbgid: &'a DbgId,
    conf: &'a TrimStabilityScannerConf,
    fields: IndexMap<String, Vec<f64>>,
    densities: Vec<Option<f64>>,
}
//
//
impl<'a> TrimStabilityScan<'a> {
    //
    //
    fn new(dbgid: &'a DbgId, conf: &'a TrimStabilityScannerConf) -> Self {
        Self {
            dbgid,
            conf,
            fields: IndexMap::new(),
            densities: vec![],
        }
    }
    ///
    /// Consumes text of a page.
    ///
    /// Breaks once the floating condition summary is captured.
    fn page(&mut self, text: &str) -> ControlFlow<()> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        for (line_id, line) in lines.iter().enumerate() {
            if let Some(tank) = tank_regex().find(line) {
                // `NO.<n>` is the hold number label, values follow it
                let start = number_label_regex()
                    .find(line)
                    .map_or(tank.end(), |label| label.end());
                self.append(tank.as_str(), numbers::extract_words(&line[start..], false));
            }
            for key in SpecialKey::iter() {
                if key.trigger().is_some_and(|trigger| line.contains(trigger)) {
                    self.append(key.as_ref(), numbers::extract_words(line, false));
                }
            }
            if line.contains("RHO") {
                self.density(line, lines.get(line_id + self.conf.rho_lookahead).copied());
            }
            if draught_regex().is_match(line) {
                let summary = lines
                    .iter()
                    .skip(line_id)
                    .take(1 + self.conf.floating_condition_lines);
                for line in summary {
                    self.append(
                        SpecialKey::FloatingCondition.as_ref(),
                        numbers::extract_words(line, false),
                    );
                }
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
    //
    //
    fn append(&mut self, id: &str, values: Vec<f64>) {
        log::trace!("{}.append | '{}': {:?}", self.dbgid, id, values);
        self.fields.entry(id.to_owned()).or_default().extend(values);
    }
    ///
    /// Stores the density of `rho_line` into the slot given by a digit of `slot_line`.
    fn density(&mut self, rho_line: &str, slot_line: Option<&str>) {
        let callee = "density";
        let Some(&density) = numbers::extract_words(rho_line, false).first() else {
            log::debug!("{}.{} | No value in line '{}'", self.dbgid, callee, rho_line);
            return;
        };
        let slot = slot_line
            .and_then(|line| line.chars().nth(self.conf.rho_digit_offset))
            .and_then(|ch| ch.to_digit(10))
            .map(|digit| digit as usize);
        match slot {
            Some(slot) if slot > 0 => {
                if self.densities.len() < slot {
                    self.densities.resize(slot, None);
                }
                self.densities[slot - 1] = Some(density);
                log::debug!("{}.{} | slot={} density={}", self.dbgid, callee, slot, density);
            }
            _ => log::debug!(
                "{}.{} | No slot digit for density={} in line {:?}",
                self.dbgid,
                callee,
                density,
                slot_line
            ),
        }
    }
    ///
    /// Returns the collected tank plan.
    fn finish(self) -> TankPlan {
        TankPlan::new(self.fields, DensityTable::from(self.densities))
    }
}
