//! Runtime state: the story graph, inventory, event queue, history and
//! the engine that ties them together.

pub mod config;
pub mod engine;
pub mod event_queue;
pub mod history;
pub mod inventory;
pub mod rolls;
pub mod story_graph;
