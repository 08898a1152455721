//! The wolf's pack: an ordered list of consumables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::item::{Item, ItemKind};
use crate::schema::vitals::Vitals;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("your pack is empty")]
    Empty,
    #[error("no {0} in your pack")]
    NotFound(String),
}

/// Items in the order they were found. Duplicate names are allowed.
///
/// `Clone` is a full deep copy: snapshots hold their own items and never
/// alias the live pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryList {
    items: Vec<Item>,
}

impl InventoryList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end of the pack.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Use the first item named `name`, applying its effect to `vitals`.
    ///
    /// Food lowers hunger (floored at zero), Medical restores health (capped
    /// at 100), anything else is simply used up. On error neither the pack
    /// nor `vitals` change.
    pub fn consume(&mut self, name: &str, vitals: &mut Vitals) -> Result<Item, InventoryError> {
        if self.items.is_empty() {
            return Err(InventoryError::Empty);
        }
        let index = self
            .items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| InventoryError::NotFound(name.to_string()))?;

        let item = self.items.remove(index);
        match item.kind {
            ItemKind::Food => vitals.feed(item.magnitude),
            ItemKind::Medical => vitals.heal(item.magnitude),
            ItemKind::Other => {}
        }
        Ok(item)
    }

    /// `"Pack: Empty"`, or `"Pack: [a] [b] "` in pack order. Every name is
    /// followed by a space, the last one included.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return "Pack: Empty".to_string();
        }
        self.items.iter().fold("Pack: ".to_string(), |mut line, item| {
            line.push('[');
            line.push_str(&item.name);
            line.push_str("] ");
            line
        })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
