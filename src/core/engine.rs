//! The engine: one wolf walking one story.
//!
//! Every advancing choice runs the same fixed sequence: snapshot, move,
//! hunger, grants, event roll, event delivery. A delivered event arms an
//! acknowledgement gate, and the next choice only dismisses it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::core::config::{ConfigError, EngineConfig};
use crate::core::event_queue::EventQueue;
use crate::core::history::{HistoryStack, Snapshot};
use crate::core::inventory::{InventoryError, InventoryList};
use crate::core::rolls::RollSource;
use crate::core::story_graph::{BuiltinStory, Choice, StoryError, StoryGraph, StoryNode};
use crate::schema::event::GameEvent;
use crate::schema::item::{Item, ItemKind};
use crate::schema::story::NodeId;
use crate::schema::vitals::Vitals;

/// Reasons an engine could not be built.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("story error: {0}")]
    Story(#[from] StoryError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Whether the current node is an ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayState {
    Playing,
    Ended,
}

/// What a call to [`Engine::make_choice`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// A pending event was dismissed. Nothing moved, nothing was spent.
    Acknowledged,
    /// The turn ran.
    Advanced {
        from: NodeId,
        to: NodeId,
        /// False when the chosen edge does not exist.
        moved: bool,
        granted: Vec<Item>,
        /// The event delivered this turn, if any.
        event: Option<GameEvent>,
    },
}

/// Owns the story position, vitals, pack, history and event queue.
///
/// The engine never stops on its own. Once [`Engine::state`] reports
/// [`PlayState::Ended`] the caller should stop choosing; further choices
/// are accepted but cannot move off an ending.
#[derive(Debug)]
pub struct Engine<R = StdRng> {
    story: StoryGraph,
    config: EngineConfig,
    rolls: R,
    current: NodeId,
    vitals: Vitals,
    inventory: InventoryList,
    history: HistoryStack,
    events: EventQueue,
    granted: FxHashSet<NodeId>,
    last_event: Option<GameEvent>,
    event_pending: bool,
    status: String,
}

impl Engine<StdRng> {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

impl<R: RollSource> Engine<R> {
    /// Start a fresh game at the story root.
    pub fn new(story: StoryGraph, config: EngineConfig, rolls: R) -> Result<Self, EngineError> {
        config.validate()?;
        let current = story.root().id;
        let vitals = config.starting_vitals;
        Ok(Self {
            story,
            config,
            rolls,
            current,
            vitals,
            inventory: InventoryList::new(),
            history: HistoryStack::new(),
            events: EventQueue::new(),
            granted: FxHashSet::default(),
            last_event: None,
            event_pending: false,
            status: String::new(),
        })
    }

    /// Back to the root with starting vitals and empty pack, history and
    /// queue. The roll source carries on where it was.
    pub fn reset(&mut self) {
        self.current = self.story.root().id;
        self.vitals = self.config.starting_vitals;
        self.inventory.clear();
        self.history.clear();
        self.events.clear();
        self.granted.clear();
        self.last_event = None;
        self.event_pending = false;
        self.status.clear();
        debug!(root = %self.current, "engine reset");
    }

    pub fn current_node(&self) -> &StoryNode {
        self.story
            .node_by_id(self.current)
            .unwrap_or_else(|| self.story.root())
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    /// The last human-readable status, e.g. `"Used Scraps"`.
    pub fn status_message(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> PlayState {
        if self.current_node().is_ending {
            PlayState::Ended
        } else {
            PlayState::Playing
        }
    }

    pub fn is_ended(&self) -> bool {
        self.state() == PlayState::Ended
    }

    /// True while the next choice will only dismiss an event.
    pub fn event_pending(&self) -> bool {
        self.event_pending
    }

    /// The most recently delivered event, kept after it is acknowledged.
    pub fn last_event(&self) -> Option<&GameEvent> {
        self.last_event.as_ref()
    }

    pub fn inventory(&self) -> &InventoryList {
        &self.inventory
    }

    pub fn inventory_text(&self) -> String {
        self.inventory.render()
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    /// The event the next advancing choice will deliver, if one is queued.
    pub fn next_event(&self) -> Option<&GameEvent> {
        self.events.peek()
    }

    pub fn story(&self) -> &StoryGraph {
        &self.story
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Take choice `1` (A) or `2` (B). Any other number takes no edge.
    pub fn make_choice(&mut self, choice: i64) -> ChoiceOutcome {
        if self.event_pending {
            self.event_pending = false;
            debug!(node = %self.current, "event acknowledged");
            return ChoiceOutcome::Acknowledged;
        }

        self.history.push(self.snapshot());

        let from = self.current;
        let target = Choice::from_index(choice)
            .and_then(|c| self.story.follow(from, c).map(|node| (c, node.id)));
        let moved = match target {
            Some((c, to)) => {
                self.current = to;
                let cost = match c {
                    Choice::A => self.config.choice_a_energy_cost,
                    Choice::B => self.config.choice_b_energy_cost,
                };
                self.vitals.energy = self.vitals.energy.saturating_sub(cost);
                true
            }
            None => false,
        };
        self.vitals.hunger = self.vitals.hunger.saturating_add(self.config.hunger_per_choice);

        let granted = self.apply_grants();

        let roll = self.rolls.roll_percent();
        if roll < self.config.event_chance {
            self.events.push(self.config.random_event.clone());
        }
        let event = self.deliver_event();

        debug!(
            choice,
            from = %from,
            to = %self.current,
            moved,
            roll,
            hunger = self.vitals.hunger,
            energy = self.vitals.energy,
            "choice resolved"
        );

        ChoiceOutcome::Advanced {
            from,
            to: self.current,
            moved,
            granted,
            event,
        }
    }

    /// Use the first item named `name` from the pack.
    pub fn use_item(&mut self, name: &str) -> Result<Item, InventoryError> {
        let result = self.inventory.consume(name, &mut self.vitals);
        self.status = match &result {
            Ok(item) => format!("Used {}", item.name),
            Err(InventoryError::Empty) => "Your pack is empty.".to_string(),
            Err(InventoryError::NotFound(missing)) => format!("No {missing} in your pack."),
        };
        debug!(item = name, ok = result.is_ok(), "use item");
        result
    }

    /// Rewind to the state before the last advancing choice.
    ///
    /// Returns false, with status `"Nothing to undo!"`, when there is no
    /// history. A pending event stays pending.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            self.status = "Nothing to undo!".to_string();
            return false;
        };

        match self.story.node_by_id(snapshot.node) {
            Some(node) => self.current = node.id,
            None => warn!(node = %snapshot.node, "snapshot refers to an unknown node"),
        }
        self.vitals = snapshot.vitals;
        self.inventory = snapshot.inventory;
        self.granted = snapshot.granted;
        self.status = "Time rewound!".to_string();
        debug!(node = %self.current, depth = self.history.len(), "undo");
        true
    }

    /// Put an item at the end of the pack.
    pub fn add_item(&mut self, name: impl Into<String>, kind: impl Into<ItemKind>, magnitude: i32) {
        self.receive(Item::new(name, kind, magnitude));
    }

    /// Queue an interrupt; it is delivered by the next advancing choice,
    /// ahead of anything with a higher priority value.
    pub fn queue_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            vitals: self.vitals,
            node: self.current,
            inventory: self.inventory.clone(),
            granted: self.granted.clone(),
        }
    }

    fn receive(&mut self, item: Item) {
        info!(item = %item.name, kind = %item.kind, node = %self.current, "item found");
        self.status = format!("Found: {}", item.name);
        self.inventory.add(item);
    }

    fn apply_grants(&mut self) -> Vec<Item> {
        let node = self.current;
        if !self.config.regrant_on_revisit && !self.granted.insert(node) {
            return Vec::new();
        }
        let items = self.story.grants_at(node).to_vec();
        for item in &items {
            self.receive(item.clone());
        }
        items
    }

    fn deliver_event(&mut self) -> Option<GameEvent> {
        let event = self.events.pop_if_any()?;
        self.vitals.apply_health_delta(event.health_delta);
        info!(
            event = %event.description,
            priority = event.priority,
            health = self.vitals.health,
            "event fired"
        );
        self.last_event = Some(event.clone());
        self.event_pending = true;
        Some(event)
    }
}

/// Builder for an [`Engine`]. Files named here are read in `build`.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    story: Option<StoryGraph>,
    story_path: Option<PathBuf>,
    builtin: BuiltinStory,
    config: Option<EngineConfig>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Use an already built graph.
    pub fn story(mut self, story: StoryGraph) -> Self {
        self.story = Some(story);
        self
    }

    /// Load the story from a RON file.
    pub fn story_file(mut self, path: impl AsRef<Path>) -> Self {
        self.story_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use a bundled story. Ignored if a graph or file is given.
    pub fn builtin(mut self, story: BuiltinStory) -> Self {
        self.builtin = story;
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the config from a RON file.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides any seed in the config.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build with a `StdRng`, seeded if a seed was given, else from the OS.
    pub fn build(self) -> Result<Engine<StdRng>, EngineError> {
        let (story, config) = self.resolve()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Engine::new(story, config, rng)
    }

    /// Build with a caller-supplied roll source.
    pub fn build_with_rolls<R: RollSource>(self, rolls: R) -> Result<Engine<R>, EngineError> {
        let (story, config) = self.resolve()?;
        Engine::new(story, config, rolls)
    }

    fn resolve(self) -> Result<(StoryGraph, EngineConfig), EngineError> {
        let story = match (self.story, self.story_path) {
            (Some(story), _) => story,
            (None, Some(path)) => StoryGraph::load_from_ron(&path)?,
            (None, None) => StoryGraph::builtin(self.builtin)?,
        };
        let mut config = match (self.config, self.config_path) {
            (Some(config), _) => config,
            (None, Some(path)) => EngineConfig::load_from_ron(&path)?,
            (None, None) => EngineConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok((story, config))
    }
}
