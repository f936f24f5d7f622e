//! A client's car

use super::types::Part;

/// One client's vehicle: an ordered list of part slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    parts: Vec<Part>,
}

impl Car {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    pub fn slot_count(&self) -> usize {
        self.parts.len()
    }

    pub fn broken_parts_count(&self) -> usize {
        self.parts.iter().filter(|part| !part.is_intact()).count()
    }

    pub fn broken_parts(&self) -> Vec<Part> {
        self.parts
            .iter()
            .filter(|part| !part.is_intact())
            .cloned()
            .collect()
    }

    /// Snapshot of every slot
    pub fn parts(&self) -> Vec<Part> {
        self.parts.clone()
    }

    pub fn part(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    /// Replace the part at `index`
    ///
    /// No name check is done here. Panics if `index` is out of range.
    pub fn set_new_part(&mut self, index: usize, part: Part) {
        self.parts[index] = part;
    }
}
