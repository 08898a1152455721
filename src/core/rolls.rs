//! Randomness for event rolls.

use rand::{Rng, RngCore};
use std::collections::VecDeque;

/// A source of percentile draws.
pub trait RollSource {
    /// One uniform draw in `[0, 100)`.
    fn roll_percent(&mut self) -> u32;
}

impl<R: RngCore> RollSource for R {
    fn roll_percent(&mut self) -> u32 {
        self.gen_range(0..100)
    }
}

/// Predetermined draws, handed out in order, then `fallback` forever.
///
/// Used to replay a known run or to force an event on a given choice.
#[derive(Debug, Clone)]
pub struct ScriptedRolls {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRolls {
    /// Draws from `rolls`, then 99 (never an event at any chance below 100).
    pub fn new(rolls: impl IntoIterator<Item = u32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
            fallback: 99,
        }
    }

    /// A source that never triggers an event.
    pub fn calm() -> Self {
        Self::new([])
    }

    pub fn with_fallback(mut self, fallback: u32) -> Self {
        self.fallback = fallback.min(99);
        self
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RollSource for ScriptedRolls {
    fn roll_percent(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(self.fallback).min(99)
    }
}
