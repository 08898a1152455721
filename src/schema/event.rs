use serde::{Deserialize, Serialize};

/// A random interrupt that hits the wolf and must be acknowledged.
///
/// Lower `priority` values are served first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameEvent {
    pub description: String,
    pub priority: i32,
    pub health_delta: i32,
}

impl GameEvent {
    pub fn new(description: impl Into<String>, priority: i32, health_delta: i32) -> Self {
        Self {
            description: description.into(),
            priority,
            health_delta,
        }
    }

    /// The interrupt the engine synthesizes on an unlucky roll.
    pub fn snowstorm() -> Self {
        Self::new("Sudden Snowstorm! -10 Health", 2, -10)
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}
