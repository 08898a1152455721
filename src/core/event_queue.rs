//! Pending random interrupts, served lowest priority value first.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::schema::event::GameEvent;

/// Heap entry ordered by `(priority, seq)`; `seq` keeps ties first-in first-out.
#[derive(Debug, Clone)]
struct Pending {
    seq: u64,
    event: GameEvent,
}

impl Pending {
    fn key(&self) -> (i32, u64) {
        (self.event.priority, self.seq)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A min-priority queue of [`GameEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Reverse<Pending>>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Pending { seq, event }));
    }

    /// Remove and return the event with the lowest priority value.
    pub fn pop_if_any(&mut self) -> Option<GameEvent> {
        self.heap.pop().map(|Reverse(p)| p.event)
    }

    pub fn peek(&self) -> Option<&GameEvent> {
        self.heap.peek().map(|Reverse(p)| &p.event)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}
