//! Parts storage

use log::warn;
use std::collections::BTreeMap;

use super::types::Part;

/// Intact spare parts available for repairs
///
/// Parts only ever leave storage; nothing restocks it during a day.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    parts: Vec<Part>,
}

impl Storage {
    /// Broken parts are rejected so storage only ever holds intact ones
    pub fn new(parts: Vec<Part>) -> Self {
        let total = parts.len();
        let parts: Vec<Part> = parts.into_iter().filter(Part::is_intact).collect();
        if parts.len() != total {
            warn!(
                "Discarded {} broken parts while stocking storage",
                total - parts.len()
            );
        }
        Self { parts }
    }

    pub fn parts_count(&self) -> usize {
        self.parts.len()
    }

    /// Take a part with the given name out of storage
    ///
    /// When several parts share the name, the last one found is removed.
    /// Returns `None` and leaves storage untouched when nothing matches.
    pub fn try_get_part(&mut self, name: &str) -> Option<Part> {
        let index = self.parts.iter().rposition(|part| part.name() == name)?;
        Some(self.parts.remove(index))
    }

    /// Number of parts held per name
    pub fn stock_by_name(&self) -> BTreeMap<String, usize> {
        let mut stock = BTreeMap::new();
        for part in &self.parts {
            *stock.entry(part.name().to_string()).or_insert(0) += 1;
        }
        stock
    }
}
