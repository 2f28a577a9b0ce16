//!
//! Floating equilibrium of the ship in a loading condition
//! of its trim and stability book.
//!
//! The reference documents are scanned into numeric tables:
//! - the trim and stability book gives the tank plan of the loading condition,
//! - the sounding and cargo hold tables give volumes and centers of gravity by fill level,
//! - the hydrostatic table gives the ship hydrostatics by displacement.
//!
//! Compartment loads are aggregated into the ship center of gravity,
//! which gives trim, heel, and draughts against the hydrostatics.
//
pub mod common;
pub mod error;
pub mod model;
pub mod report;
pub mod scanner;
pub mod source;
//
pub use error::Error;
pub use model::{
    equilibrium::EquilibriumResult, loading_condition_id::LoadingConditionId, ship::Ship,
    ship_conf::ShipConf,
};
pub use report::Report;
