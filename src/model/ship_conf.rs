use super::equilibrium::equilibrium_conf::EquilibriumConf;
use crate::scanner::scanner_conf::{
    CargoHoldScannerConf, HydrostaticScannerConf, SoundingScannerConf, TrimStabilityScannerConf,
};
use std::path::{Path, PathBuf};
///
/// [super::ship::Ship] configuration.
///
/// It can be used to wrap configuration getting from an external source.
#[derive(Clone, Debug)]
pub struct ShipConf {
    ///
    /// Paged document with the loading conditions.
    pub trim_stability_book: PathBuf,
    ///
    /// Text document with the tank sounding tables.
    pub sounding_tables: PathBuf,
    ///
    /// Directory containing `Hold (<n>).txt` calibration tables.
    pub cargo_hold_dir: PathBuf,
    ///
    /// Paged document with the hydrostatic table.
    pub hydrostatic_tables: PathBuf,
    pub trim_stability: TrimStabilityScannerConf,
    pub sounding: SoundingScannerConf,
    pub cargo_hold: CargoHoldScannerConf,
    pub hydrostatic: HydrostaticScannerConf,
    pub equilibrium: EquilibriumConf,
}
//
//
impl ShipConf {
    ///
    /// Returns configuration of the documents stored in `dir` under their usual names.
    ///
    /// Paged documents are expected as PDF files if built with `pdf` feature,
    /// as their text renditions otherwise.
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let paged_ext = match cfg!(feature = "pdf") {
            true => "pdf",
            false => "txt",
        };
        Self {
            trim_stability_book: dir.join(format!("Trim and stability book.{}", paged_ext)),
            sounding_tables: dir.join("Sounding tables (1).txt"),
            cargo_hold_dir: dir.join("Cargo hold data"),
            hydrostatic_tables: dir.join(format!("Hydrostatic tables.{}", paged_ext)),
            trim_stability: TrimStabilityScannerConf::default(),
            sounding: SoundingScannerConf::default(),
            cargo_hold: CargoHoldScannerConf::default(),
            hydrostatic: HydrostaticScannerConf::default(),
            equilibrium: EquilibriumConf::default(),
        }
    }
    ///
    /// Path of the calibration table of cargo hold `hold`.
    pub fn cargo_hold_path(&self, hold: u8) -> PathBuf {
        self.cargo_hold_dir.join(format!("Hold ({}).txt", hold))
    }
}
