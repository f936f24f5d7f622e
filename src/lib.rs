//! Auto Repair Shop Simulation Library
//!
//! A turn-based repair shop simulation that can be driven from the console
//! or from tests.

pub mod console;
pub mod simulation;
