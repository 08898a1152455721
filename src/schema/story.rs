use serde::{Deserialize, Serialize};

use super::item::{Item, ItemKind};

/// Stable identity of a story node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node as written in a story file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub text: String,
    #[serde(default)]
    pub choice_a: String,
    #[serde(default)]
    pub choice_b: String,
    #[serde(default)]
    pub on_a: Option<NodeId>,
    #[serde(default)]
    pub on_b: Option<NodeId>,
    #[serde(default)]
    pub ending: bool,
}

/// An item handed out whenever the wolf stands on `node` after a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    pub node: NodeId,
    pub name: String,
    pub kind: ItemKind,
    pub magnitude: i32,
}

impl GrantRecord {
    pub fn to_item(&self) -> Item {
        Item::new(self.name.clone(), self.kind, self.magnitude)
    }
}

/// The on-disk shape of a whole story.
///
/// ```ron
/// (
///     title: "Echoes After the Storm",
///     root: 1,
///     nodes: [
///         (id: 1, text: "...", choice_a: "Go", choice_b: "Stay", on_a: Some(2), on_b: Some(3)),
///         (id: 2, text: "...", ending: true),
///     ],
///     grants: [(node: 2, name: "Scraps", kind: Food, magnitude: 10)],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDefinition {
    #[serde(default)]
    pub title: String,
    pub root: NodeId,
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub grants: Vec<GrantRecord>,
}
