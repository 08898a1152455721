//! Wolf Trail: a branching survival story engine.
//!
//! A lone wolf walks a hand-authored story graph. Every choice costs
//! hunger and energy, some places leave items behind, random interrupts
//! hurt, and every step can be rewound. The [`core::engine::Engine`] owns
//! all of that state; a caller drives it one choice at a time until the
//! current node is an ending.

pub mod core;
pub mod schema;

pub use crate::core::config::EngineConfig;
pub use crate::core::engine::{ChoiceOutcome, Engine, EngineBuilder, EngineError, PlayState};
pub use crate::core::story_graph::{BuiltinStory, Choice, StoryGraph};
pub use crate::schema::vitals::Vitals;
