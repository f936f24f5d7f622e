//! Repair shop simulation
//!
//! This module contains all the core shop logic. It never touches the
//! console, so it can be driven by tests or any [`Operator`].

mod autoservice;
mod car;
mod catalog;
mod config;
mod factory;
mod ledger;
mod rng;
mod storage;
mod types;

pub use autoservice::{refusal_penalty, AutoService, Operator, ServiceView, TurnOutcome};
pub use car::Car;
pub use catalog::{PartCatalog, DEFAULT_PART_NAMES};
pub use config::{
    PenaltyPolicy, ShopConfig, CLIENTS_COUNT, FIXED_PENALTY, MAX_PART_PRICE, MIN_PART_PRICE,
    REPAIR_SURCHARGE, STARTING_MONEY, STORAGE_SIZE,
};
pub use factory::{broken_chance, AutoServiceFactory, CarFactory, StorageFactory};
pub use ledger::Ledger;
pub use rng::SimRng;
pub use storage::Storage;
pub use types::{Decision, Part, TurnEvent, TurnStatus, BASE_BROKEN_CHANCE};
