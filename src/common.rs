//!
//! Building blocks shared by the scanners and the calculations.
//
pub mod dbg_id;
pub mod interpolation;
pub mod numbers;
pub mod table;
