//! Plain data shared by the runtime and the story files.

pub mod event;
pub mod item;
pub mod story;
pub mod vitals;
