//!
//! The ship loading condition and its floating equilibrium.
//!
//! - [tank_plan] - raw compartment data of a loading condition,
//! - [compartment] - classification of compartment ids,
//! - [loading_condition] - mass and center of gravity of each compartment,
//! - [equilibrium] - displacement, trim, heel, and draughts of the ship,
//! - [ship] - the whole pipeline from reference documents to the result.
//
pub mod compartment;
pub mod equilibrium;
pub mod loading_condition;
pub mod loading_condition_id;
pub mod ship;
pub mod ship_conf;
pub mod tank_plan;
