//!
//! State machines locating tabular regions in the reference documents
//! and turning them into numeric tables.
//!
//! - [hydrostatic_scanner] - hydrostatic table of the paged document,
//! - [sounding_scanner] - sounding tables of the tanks,
//! - [cargo_hold_scanner] - calibration table of a cargo hold,
//! - [trim_stability_scanner] - tank plan of a loading condition in the trim and stability book.
//!
//! Malformed rows are dropped by the scanners, only missing sources
//! and missing structural markers fail the scan.
//
pub mod cargo_hold_scanner;
pub mod hydrostatic_scanner;
pub mod scanner_conf;
pub mod sounding_scanner;
pub mod trim_stability_scanner;
