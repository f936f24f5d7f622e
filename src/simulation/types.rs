//! Core types for the repair shop simulation
//!
//! These are plain value types shared by the catalog, storage, cars and the
//! service engine.

use std::fmt;

/// Base chance (in percent) that the first slot of a new car is broken.
/// Slot `i` uses `BASE_BROKEN_CHANCE / (i + 1)`.
pub const BASE_BROKEN_CHANCE: u32 = 100;

/// A single car component
///
/// Parts are never mutated after creation. Repairing a car swaps one part
/// for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name: String,
    price: i64,
    is_intact: bool,
}

impl Part {
    pub fn new(name: impl Into<String>, price: i64, is_intact: bool) -> Self {
        Self {
            name: name.into(),
            price,
            is_intact,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn is_intact(&self) -> bool {
        self.is_intact
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_intact { "intact" } else { "BROKEN" };
        write!(f, "{} - {}", self.name, status)
    }
}

/// State of the client currently at the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// At least one broken part remains and the client is still waiting
    Servicing,
    /// Every part is intact
    Resolved,
    /// The operator gave up on the car
    Refused,
}

/// What the operator wants to do with the current car
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Stop servicing this client and pay the penalty
    Refuse,
    /// Try to replace the part at this 1-based slot
    Repair(usize),
}

/// Something that happened while applying a decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A part from storage was installed. `income` is zero when the slot
    /// was already intact.
    Installed {
        slot: usize,
        part_name: String,
        income: i64,
    },
    /// Storage holds no part with this name
    PartMissing { slot: usize, part_name: String },
    /// The operator refused the client
    Refused { penalty: i64 },
    /// The last broken part was replaced
    Resolved {
        slot: usize,
        part_name: String,
        income: i64,
    },
}
