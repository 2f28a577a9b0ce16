//!
//! Scanner configurations.
//!
//! Default values describe the template of one document family,
//! other editions of the documents may require other values.
///
/// [super::hydrostatic_scanner::HydrostaticScanner] configuration.
#[derive(Clone, Debug)]
pub struct HydrostaticScannerConf {
    ///
    /// Substring opening a line of table values.
    pub marker: String,
    ///
    /// Number of table columns.
    pub columns: usize,
    ///
    /// Expected number of table rows.
    pub initial_rows: usize,
    ///
    /// Number of leading pages without table data.
    pub skip_pages: usize,
}
//
//
impl Default for HydrostaticScannerConf {
    fn default() -> Self {
        Self {
            marker: "]:".to_owned(),
            columns: 30,
            initial_rows: 83,
            skip_pages: 3,
        }
    }
}
///
/// [super::sounding_scanner::SoundingScanner] configuration.
#[derive(Clone, Debug)]
pub struct SoundingScannerConf {
    ///
    /// Number of leading lines of the document to ignore.
    pub preamble_lines: usize,
    ///
    /// Number of block header lines, including the `Compartment ident:` line.
    pub header_lines: usize,
    ///
    /// Number of values in a table row.
    pub columns: usize,
}
//
//
impl Default for SoundingScannerConf {
    fn default() -> Self {
        Self {
            preamble_lines: 2,
            header_lines: 19,
            columns: 13,
        }
    }
}
///
/// [super::cargo_hold_scanner::CargoHoldScanner] configuration.
#[derive(Clone, Debug)]
pub struct CargoHoldScannerConf {
    ///
    /// Number of leading lines of the document to ignore.
    pub preamble_lines: usize,
    ///
    /// Number of values in a table row.
    pub columns: usize,
}
//
//
impl Default for CargoHoldScannerConf {
    fn default() -> Self {
        Self {
            preamble_lines: 2,
            columns: 6,
        }
    }
}
///
/// [super::trim_stability_scanner::TrimStabilityScanner] configuration.
#[derive(Clone, Debug)]
pub struct TrimStabilityScannerConf {
    ///
    /// Distance in lines from `RHO` line to the line holding the density slot digit.
    pub rho_lookahead: usize,
    ///
    /// Character offset of the density slot digit.
    pub rho_digit_offset: usize,
    ///
    /// Number of lines captured after `Draught moulded` line.
    pub floating_condition_lines: usize,
}
//
//
impl Default for TrimStabilityScannerConf {
    fn default() -> Self {
        Self {
            rho_lookahead: 2,
            rho_digit_offset: 2,
            floating_condition_lines: 5,
        }
    }
}
