//! Part catalog: the fixed list of part names and the part factory

use anyhow::{ensure, Result};

use super::config::{MAX_PART_PRICE, MIN_PART_PRICE};
use super::rng::SimRng;
use super::types::Part;

/// Part names every car is built from, in slot order
pub const DEFAULT_PART_NAMES: [&str; 5] = ["Engine", "Wheel", "Gearbox", "Windows", "Body"];

/// Creates parts with random prices
#[derive(Debug, Clone)]
pub struct PartCatalog {
    names: Vec<String>,
    min_price: i64,
    max_price: i64,
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_PART_NAMES.iter().map(|name| name.to_string()).collect(),
            min_price: MIN_PART_PRICE,
            max_price: MAX_PART_PRICE,
        }
    }
}

impl PartCatalog {
    /// Create a catalog with custom names and price range `[min_price, max_price)`
    pub fn new(names: Vec<String>, min_price: i64, max_price: i64) -> Result<Self> {
        ensure!(!names.is_empty(), "Part catalog needs at least one name");
        ensure!(
            min_price < max_price,
            "Part price range is empty: [{}, {})",
            min_price,
            max_price
        );
        Ok(Self {
            names,
            min_price,
            max_price,
        })
    }

    /// Default names with a custom price range
    pub fn with_price_range(min_price: i64, max_price: i64) -> Result<Self> {
        Self::new(Self::default().names, min_price, max_price)
    }

    /// Copy of the ordered name list
    pub fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn create(&self, name: &str, is_intact: bool, rng: &mut SimRng) -> Part {
        Part::new(name, self.generate_price(rng), is_intact)
    }

    /// Intact part with a uniformly chosen name. Used for stocking storage.
    pub fn create_random_intact_part(&self, rng: &mut SimRng) -> Part {
        let name = &self.names[rng.random_index(self.names.len())];
        self.create(name, true, rng)
    }

    fn generate_price(&self, rng: &mut SimRng) -> i64 {
        rng.random_range(self.min_price, self.max_price)
    }
}
