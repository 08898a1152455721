use serde::{Deserialize, Serialize};

/// Ceiling applied when healing.
pub const MAX_HEALTH: i32 = 100;

/// Hunger at which the wolf starves.
pub const STARVATION_HUNGER: i32 = 100;

/// The wolf's health, hunger and energy.
///
/// Only healing clamps anything. Hunger and energy drift freely and event
/// damage may push health below zero; callers decide what counts as a loss
/// (see [`Vitals::collapse`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vitals {
    pub health: i32,
    pub hunger: i32,
    pub energy: i32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: 100,
            hunger: 0,
            energy: 100,
        }
    }
}

/// Why the wolf can no longer go on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Collapse {
    Starvation,
    Exhaustion,
    Wounds,
}

impl Collapse {
    /// Ending line shown by the presentation loop.
    pub fn ending_text(&self) -> &'static str {
        match self {
            Self::Starvation => "ENDING: You collapse from hunger.",
            Self::Exhaustion => "ENDING: You collapse from exhaustion.",
            Self::Wounds => "ENDING: Your wounds are too deep. You collapse in the snow.",
        }
    }
}

impl Vitals {
    /// Restore health, capped at [`MAX_HEALTH`].
    pub fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount).min(MAX_HEALTH);
    }

    /// Reduce hunger, floored at zero.
    pub fn feed(&mut self, amount: i32) {
        self.hunger = self.hunger.saturating_sub(amount).max(0);
    }

    /// Apply a raw health change. Not clamped to [`MAX_HEALTH`]; saturates
    /// at the `i32` bounds.
    pub fn apply_health_delta(&mut self, delta: i32) {
        self.health = self.health.saturating_add(delta);
    }

    /// Reports the first collapse condition that holds, wounds first.
    ///
    /// The engine never consults this. Drive loops that end the game on
    /// collapse call it after every turn.
    pub fn collapse(&self) -> Option<Collapse> {
        if self.health <= 0 {
            Some(Collapse::Wounds)
        } else if self.hunger >= STARVATION_HUNGER {
            Some(Collapse::Starvation)
        } else if self.energy <= 0 {
            Some(Collapse::Exhaustion)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Vitals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Health: {} | Hunger: {} | Energy: {}",
            self.health, self.hunger, self.energy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_wolf() {
        let v = Vitals::default();
        assert_eq!(v, Vitals { health: 100, hunger: 0, energy: 100 });
    }

    #[test]
    fn heal_caps_at_max() {
        let mut v = Vitals { health: 70, ..Default::default() };
        v.heal(30);
        assert_eq!(v.health, 100);
        v.health = 95;
        v.heal(30);
        assert_eq!(v.health, MAX_HEALTH);
    }

    #[test]
    fn feed_floors_at_zero() {
        let mut v = Vitals { hunger: 15, ..Default::default() };
        v.feed(10);
        assert_eq!(v.hunger, 5);
        v.feed(40);
        assert_eq!(v.hunger, 0);
    }

    #[test]
    fn health_delta_is_unclamped() {
        let mut v = Vitals { health: 5, ..Default::default() };
        v.apply_health_delta(-10);
        assert_eq!(v.health, -5);
    }

    #[test]
    fn extreme_amounts_saturate() {
        let mut v = Vitals::default();
        v.heal(i32::MAX);
        assert_eq!(v.health, MAX_HEALTH);
        v.feed(i32::MIN);
        assert_eq!(v.hunger, i32::MAX);
        v.feed(i32::MAX);
        assert_eq!(v.hunger, 0);
        v.apply_health_delta(i32::MIN);
        v.apply_health_delta(i32::MIN);
        assert_eq!(v.health, i32::MIN);
    }

    #[test]
    fn collapse_conditions() {
        assert_eq!(Vitals::default().collapse(), None);
        let starving = Vitals { hunger: 100, ..Default::default() };
        assert_eq!(starving.collapse(), Some(Collapse::Starvation));
        let spent = Vitals { energy: 0, ..Default::default() };
        assert_eq!(spent.collapse(), Some(Collapse::Exhaustion));
        let dying = Vitals { health: 0, hunger: 120, energy: -5 };
        assert_eq!(dying.collapse(), Some(Collapse::Wounds));
    }

    #[test]
    fn display_line() {
        let v = Vitals { health: 90, hunger: 5, energy: 85 };
        assert_eq!(v.to_string(), "Health: 90 | Hunger: 5 | Energy: 85");
    }
}
