//! Factories that set up a workday
//!
//! Cars and storage are built from the part catalog. The service factory
//! wires them together from a [`ShopConfig`].

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::VecDeque;

use super::autoservice::AutoService;
use super::car::Car;
use super::catalog::PartCatalog;
use super::config::ShopConfig;
use super::rng::SimRng;
use super::storage::Storage;
use super::types::BASE_BROKEN_CHANCE;

/// Chance in percent that the slot at `index` is broken on a new car
pub fn broken_chance(index: usize) -> u32 {
    BASE_BROKEN_CHANCE / (index as u32 + 1)
}

/// Builds client cars
#[derive(Debug, Clone)]
pub struct CarFactory {
    catalog: PartCatalog,
}

impl CarFactory {
    pub fn new(catalog: PartCatalog) -> Self {
        Self { catalog }
    }

    /// One part per catalog name, in catalog order
    ///
    /// Earlier slots break more often: slot 0 always, slot 1 half the time,
    /// and so on.
    pub fn create(&self, rng: &mut SimRng) -> Car {
        let parts = self
            .catalog
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let is_broken = rng.roll_percent() < broken_chance(index);
                self.catalog.create(name, !is_broken, rng)
            })
            .collect();
        Car::new(parts)
    }
}

/// Stocks storage with random intact parts
#[derive(Debug, Clone)]
pub struct StorageFactory {
    catalog: PartCatalog,
}

impl StorageFactory {
    pub fn new(catalog: PartCatalog) -> Self {
        Self { catalog }
    }

    pub fn create(&self, parts_count: usize, rng: &mut SimRng) -> Storage {
        let parts = (0..parts_count)
            .map(|_| self.catalog.create_random_intact_part(rng))
            .collect();
        Storage::new(parts)
    }
}

/// Builds a ready-to-run [`AutoService`]
#[derive(Debug, Clone)]
pub struct AutoServiceFactory {
    storage_factory: StorageFactory,
    car_factory: CarFactory,
    config: ShopConfig,
}

impl AutoServiceFactory {
    /// Factory using the default part names and the configured price range
    ///
    /// The configuration is checked once here; `create` trusts it.
    pub fn from_config(config: ShopConfig) -> Result<Self> {
        config.validate().context("Invalid shop configuration")?;
        let catalog = PartCatalog::with_price_range(config.min_part_price, config.max_part_price)?;
        Ok(Self {
            storage_factory: StorageFactory::new(catalog.clone()),
            car_factory: CarFactory::new(catalog),
            config,
        })
    }

    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    pub fn create(&self, rng: &mut SimRng) -> AutoService {
        let mut clients = VecDeque::with_capacity(self.config.clients_count);
        for _ in 0..self.config.clients_count {
            let car = self.car_factory.create(rng);
            debug!("Queued car with {} broken parts", car.broken_parts_count());
            clients.push_back(car);
        }

        let storage = self.storage_factory.create(self.config.storage_size, rng);
        info!(
            "Opening shop: money={}, storage={}, clients={}",
            self.config.starting_money,
            storage.parts_count(),
            clients.len()
        );

        AutoService::new(&self.config, storage, clients)
    }
}
