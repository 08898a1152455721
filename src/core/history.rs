//! Undo history: full snapshots of the mutable engine state.

use rustc_hash::FxHashSet;

use crate::core::inventory::InventoryList;
use crate::schema::story::NodeId;
use crate::schema::vitals::Vitals;

/// Everything needed to put the engine back where it was before a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub vitals: Vitals,
    pub node: NodeId,
    /// Owned deep copy; restoring moves it straight back into the engine.
    pub inventory: InventoryList,
    /// Nodes whose grants were already handed out (first-arrival mode).
    pub granted: FxHashSet<NodeId>,
}

/// Last-in first-out stack of [`Snapshot`]s.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// The most recent snapshot, or `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::item::{Item, ItemKind};

    fn snapshot(node: u32, health: i32) -> Snapshot {
        Snapshot {
            vitals: Vitals { health, ..Default::default() },
            node: NodeId(node),
            inventory: InventoryList::new(),
            granted: FxHashSet::default(),
        }
    }

    #[test]
    fn pops_most_recent_first() {
        let mut h = HistoryStack::new();
        h.push(snapshot(1, 100));
        h.push(snapshot(2, 90));
        assert_eq!(h.len(), 2);
        assert_eq!(h.pop().unwrap().node, NodeId(2));
        assert_eq!(h.pop().unwrap().node, NodeId(1));
        assert!(h.pop().is_none());
    }

    #[test]
    fn stored_inventory_is_detached() {
        let mut live = InventoryList::new();
        live.add(Item::new("Scraps", ItemKind::Food, 10));

        let mut h = HistoryStack::new();
        h.push(Snapshot {
            inventory: live.clone(),
            ..snapshot(4, 100)
        });
        live.clear();

        assert_eq!(h.pop().unwrap().inventory.render(), "Pack: [Scraps] ");
    }

    #[test]
    fn clear_drops_everything() {
        let mut h = HistoryStack::new();
        h.push(snapshot(1, 100));
        h.clear();
        assert!(h.is_empty());
    }
}
