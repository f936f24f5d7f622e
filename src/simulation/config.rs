//! Tunable parameters for a workday at the shop

use anyhow::{ensure, Result};
use clap::ValueEnum;

/// Money on the account when the shop opens
pub const STARTING_MONEY: i64 = 1000;
/// Parts stocked in storage at the start of the day
pub const STORAGE_SIZE: usize = 25;
/// Cars waiting in the queue
pub const CLIENTS_COUNT: usize = 5;
/// Base penalty for refusing a client
pub const FIXED_PENALTY: i64 = 100;
/// Bonus paid on top of the part price for every successful repair
pub const REPAIR_SURCHARGE: i64 = 0;
/// Part prices are drawn from `[MIN_PART_PRICE, MAX_PART_PRICE)`
pub const MIN_PART_PRICE: i64 = 50;
pub const MAX_PART_PRICE: i64 = 150;

/// How the refusal penalty is computed when the current broken count is an
/// exact multiple of the count at the start of the turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PenaltyPolicy {
    /// Always the fixed penalty
    #[default]
    Flat,
    /// Fixed penalty times the broken count once any repair was attempted
    RepairAware,
}

/// Everything needed to set up a workday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub starting_money: i64,
    pub storage_size: usize,
    pub clients_count: usize,
    pub fixed_penalty: i64,
    pub repair_surcharge: i64,
    pub min_part_price: i64,
    pub max_part_price: i64,
    pub penalty_policy: PenaltyPolicy,
    /// Seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            storage_size: STORAGE_SIZE,
            clients_count: CLIENTS_COUNT,
            fixed_penalty: FIXED_PENALTY,
            repair_surcharge: REPAIR_SURCHARGE,
            min_part_price: MIN_PART_PRICE,
            max_part_price: MAX_PART_PRICE,
            penalty_policy: PenaltyPolicy::default(),
            seed: None,
        }
    }
}

impl ShopConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_part_price < self.max_part_price,
            "Part price range is empty: [{}, {})",
            self.min_part_price,
            self.max_part_price
        );
        ensure!(self.min_part_price >= 0, "Part prices cannot be negative");
        ensure!(self.fixed_penalty >= 0, "Fixed penalty cannot be negative");
        ensure!(
            self.repair_surcharge >= 0,
            "Repair surcharge cannot be negative"
        );
        Ok(())
    }
}
