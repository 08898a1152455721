//! The story graph: an id-indexed arena of narrative nodes.
//!
//! Nodes may be reached along several paths (the graph is a DAG, not a
//! tree), so edges are stored as [`NodeId`]s into the arena rather than as
//! owned children. Every id resolves to exactly one canonical node.

use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;

use crate::schema::item::Item;
use crate::schema::story::{NodeId, StoryDefinition};

const FROZEN_PACK: &str = include_str!("../../story/frozen_pack.ron");
const BLIZZARD_FORK: &str = include_str!("../../story/blizzard_fork.ron");

/// Problems that make a story unplayable; the load fails.
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("story has no nodes")]
    Empty,
    #[error("node {0} is defined more than once")]
    DuplicateNode(NodeId),
    #[error("root node {0} does not exist")]
    MissingRoot(NodeId),
    #[error("node {from} choice {choice} points at missing node {to}")]
    DanglingEdge {
        from: NodeId,
        choice: Choice,
        to: NodeId,
    },
    #[error("ending node {0} has outgoing choices")]
    EndingHasEdges(NodeId),
    #[error("item grant refers to missing node {0}")]
    GrantOnUnknownNode(NodeId),
}

/// Problems that leave the graph playable but are probably authoring slips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoryWarning {
    /// Not reachable from the root.
    Unreachable(NodeId),
    /// Not an ending, yet has no way forward.
    DeadEnd(NodeId),
    /// An edge exists but its label is blank.
    MissingLabel { node: NodeId, choice: Choice },
}

impl std::fmt::Display for StoryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable(id) => write!(f, "node {id} is unreachable from the root"),
            Self::DeadEnd(id) => write!(f, "node {id} is not an ending but has no choices"),
            Self::MissingLabel { node, choice } => {
                write!(f, "node {node} choice {choice} has an edge but no label")
            }
        }
    }
}

/// One of the two outgoing edges of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// `1` is A, `2` is B, anything else is no choice at all.
    pub fn from_index(index: i64) -> Option<Choice> {
        match index {
            1 => Some(Choice::A),
            2 => Some(Choice::B),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Choice::A => 1,
            Choice::B => 2,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Choice::A => f.write_str("A"),
            Choice::B => f.write_str("B"),
        }
    }
}

/// A node of the graph. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryNode {
    pub id: NodeId,
    pub text: String,
    pub label_a: String,
    pub label_b: String,
    pub is_ending: bool,
    pub on_a: Option<NodeId>,
    pub on_b: Option<NodeId>,
}

impl StoryNode {
    pub fn edge(&self, choice: Choice) -> Option<NodeId> {
        match choice {
            Choice::A => self.on_a,
            Choice::B => self.on_b,
        }
    }

    pub fn label(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.label_a,
            Choice::B => &self.label_b,
        }
    }

    /// The first line of the text, which authors use as a heading.
    pub fn title(&self) -> &str {
        self.text.lines().next().unwrap_or_default()
    }
}

/// Stories that ship with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuiltinStory {
    /// "Echoes After the Storm": 26 nodes, several converging paths.
    #[default]
    FrozenPack,
    /// "You stand at a fork": 21 nodes in a strict binary tree.
    BlizzardFork,
}

impl BuiltinStory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::FrozenPack => "frozen_pack",
            Self::BlizzardFork => "blizzard_fork",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "frozen_pack" => Some(Self::FrozenPack),
            "blizzard_fork" => Some(Self::BlizzardFork),
            _ => None,
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Self::FrozenPack => FROZEN_PACK,
            Self::BlizzardFork => BLIZZARD_FORK,
        }
    }
}

/// The validated, immutable story graph.
#[derive(Debug, Clone)]
pub struct StoryGraph {
    title: String,
    nodes: Vec<StoryNode>,
    index: FxHashMap<NodeId, usize>,
    root: usize,
    grants: FxHashMap<NodeId, Vec<Item>>,
}

impl StoryGraph {
    /// Load a story from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<StoryGraph, StoryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a story from a RON string.
    pub fn parse_ron(input: &str) -> Result<StoryGraph, StoryError> {
        let definition: StoryDefinition = ron::from_str(input)?;
        Self::from_definition(definition)
    }

    /// One of the bundled stories.
    pub fn builtin(story: BuiltinStory) -> Result<StoryGraph, StoryError> {
        Self::parse_ron(story.source())
    }

    /// Build the arena and check structural integrity.
    pub fn from_definition(definition: StoryDefinition) -> Result<StoryGraph, StoryError> {
        if definition.nodes.is_empty() {
            return Err(StoryError::Empty);
        }

        let mut nodes = Vec::with_capacity(definition.nodes.len());
        let mut index = FxHashMap::default();
        for record in definition.nodes {
            if index.insert(record.id, nodes.len()).is_some() {
                return Err(StoryError::DuplicateNode(record.id));
            }
            nodes.push(StoryNode {
                id: record.id,
                text: record.text,
                label_a: record.choice_a,
                label_b: record.choice_b,
                is_ending: record.ending,
                on_a: record.on_a,
                on_b: record.on_b,
            });
        }

        for node in &nodes {
            for choice in [Choice::A, Choice::B] {
                if let Some(to) = node.edge(choice) {
                    if node.is_ending {
                        return Err(StoryError::EndingHasEdges(node.id));
                    }
                    if !index.contains_key(&to) {
                        return Err(StoryError::DanglingEdge {
                            from: node.id,
                            choice,
                            to,
                        });
                    }
                }
            }
        }

        let root = *index
            .get(&definition.root)
            .ok_or(StoryError::MissingRoot(definition.root))?;

        let mut grants: FxHashMap<NodeId, Vec<Item>> = FxHashMap::default();
        for grant in definition.grants {
            if !index.contains_key(&grant.node) {
                return Err(StoryError::GrantOnUnknownNode(grant.node));
            }
            grants.entry(grant.node).or_default().push(grant.to_item());
        }

        Ok(StoryGraph {
            title: definition.title,
            nodes,
            index,
            root,
            grants,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The unique entry node.
    pub fn root(&self) -> &StoryNode {
        &self.nodes[self.root]
    }

    /// The canonical node for `id`.
    pub fn node_by_id(&self, id: NodeId) -> Option<&StoryNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// The node reached from `from` along `choice`, or `None` for no movement.
    pub fn follow(&self, from: NodeId, choice: Choice) -> Option<&StoryNode> {
        let to = self.node_by_id(from)?.edge(choice)?;
        self.node_by_id(to)
    }

    /// Items handed out at `id`, in authoring order.
    pub fn grants_at(&self, id: NodeId) -> &[Item] {
        self.grants.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// All nodes in authoring order.
    pub fn nodes(&self) -> &[StoryNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn endings(&self) -> impl Iterator<Item = &StoryNode> {
        self.nodes.iter().filter(|n| n.is_ending)
    }

    /// Ids reachable from the root, breadth first.
    pub fn reachable(&self) -> FxHashSet<NodeId> {
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::from([self.root().id]);
        while let Some(id) = queue.pop_front() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(node) = self.node_by_id(id) {
                queue.extend(node.on_a);
                queue.extend(node.on_b);
            }
        }
        seen
    }

    /// Nodes with more than one incoming edge.
    pub fn converging(&self) -> Vec<NodeId> {
        let mut incoming: FxHashMap<NodeId, usize> = FxHashMap::default();
        for node in &self.nodes {
            for to in [node.on_a, node.on_b].into_iter().flatten() {
                *incoming.entry(to).or_default() += 1;
            }
        }
        let mut ids: Vec<NodeId> = incoming
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, _)| id)
            .collect();
        ids.sort();
        ids
    }

    /// Non-fatal authoring problems, in node order.
    pub fn lint(&self) -> Vec<StoryWarning> {
        let reachable = self.reachable();
        let mut warnings = Vec::new();
        for node in &self.nodes {
            if !reachable.contains(&node.id) {
                warnings.push(StoryWarning::Unreachable(node.id));
            }
            if !node.is_ending && node.on_a.is_none() && node.on_b.is_none() {
                warnings.push(StoryWarning::DeadEnd(node.id));
            }
            for choice in [Choice::A, Choice::B] {
                if node.edge(choice).is_some() && node.label(choice).trim().is_empty() {
                    warnings.push(StoryWarning::MissingLabel {
                        node: node.id,
                        choice,
                    });
                }
            }
        }
        warnings
    }
}
