//! WASM bindings for wolf-trail: drives one game from a web page.

use wasm_bindgen::prelude::*;

use wolf_trail::core::engine::{ChoiceOutcome, Engine};
use wolf_trail::core::story_graph::{BuiltinStory, StoryGraph};
use wolf_trail::schema::vitals::Vitals;

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct EventView {
    description: String,
    health_delta: i32,
}

#[derive(serde::Serialize)]
struct TrailView {
    node_id: u32,
    text: String,
    label_a: String,
    label_b: String,
    is_ending: bool,
    vitals: Vitals,
    collapse: Option<&'static str>,
    pack: String,
    items: Vec<String>,
    status: String,
    event_pending: bool,
    event: Option<EventView>,
    can_undo: bool,
}

#[derive(serde::Serialize)]
struct TurnView {
    acknowledged: bool,
    moved: bool,
    found: Vec<String>,
}

fn js_err(context: &str, e: impl std::fmt::Display) -> JsError {
    JsError::new(&format!("{context}: {e}"))
}

// ---------------------------------------------------------------------------
// WolfTrail: the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct WolfTrail {
    engine: Engine,
}

#[wasm_bindgen]
impl WolfTrail {
    /// Start a bundled story (`frozen_pack` or `blizzard_fork`) with a seed.
    #[wasm_bindgen(constructor)]
    pub fn new(story: &str, seed: u64) -> Result<WolfTrail, JsError> {
        let builtin = BuiltinStory::from_name(story)
            .ok_or_else(|| JsError::new(&format!("Unknown story: {story}")))?;
        let engine = Engine::builder()
            .builtin(builtin)
            .seed(seed)
            .build()
            .map_err(|e| js_err("Engine build error", e))?;
        Ok(WolfTrail { engine })
    }

    /// Start a story supplied as RON text.
    pub fn from_ron(story_ron: &str, seed: u64) -> Result<WolfTrail, JsError> {
        let story = StoryGraph::parse_ron(story_ron).map_err(|e| js_err("Story parse error", e))?;
        let engine = Engine::builder()
            .story(story)
            .seed(seed)
            .build()
            .map_err(|e| js_err("Engine build error", e))?;
        Ok(WolfTrail { engine })
    }

    /// Return JSON array of bundled story names.
    pub fn available_stories() -> String {
        serde_json::to_string(&[
            BuiltinStory::FrozenPack.name(),
            BuiltinStory::BlizzardFork.name(),
        ])
        .unwrap_or_else(|_| "[]".to_string())
    }

    /// Take choice 1 or 2. Returns a JSON turn summary.
    pub fn choose(&mut self, choice: i32) -> Result<String, JsError> {
        let view = match self.engine.make_choice(i64::from(choice)) {
            ChoiceOutcome::Acknowledged => TurnView {
                acknowledged: true,
                moved: false,
                found: Vec::new(),
            },
            ChoiceOutcome::Advanced { moved, granted, .. } => TurnView {
                acknowledged: false,
                moved,
                found: granted.into_iter().map(|item| item.name).collect(),
            },
        };
        serde_json::to_string(&view).map_err(|e| js_err("Serialization error", e))
    }

    /// Use an item by name. Returns the status line.
    pub fn use_item(&mut self, name: &str) -> String {
        let _ = self.engine.use_item(name);
        self.engine.status_message().to_string()
    }

    /// Rewind one choice. Returns the status line.
    pub fn undo(&mut self) -> String {
        self.engine.undo();
        self.engine.status_message().to_string()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Everything a page needs to draw the current screen, as JSON.
    pub fn state(&self) -> Result<String, JsError> {
        let node = self.engine.current_node();
        let event = if self.engine.event_pending() {
            self.engine.last_event().map(|e| EventView {
                description: e.description.clone(),
                health_delta: e.health_delta,
            })
        } else {
            None
        };
        let view = TrailView {
            node_id: node.id.0,
            text: node.text.clone(),
            label_a: node.label_a.clone(),
            label_b: node.label_b.clone(),
            is_ending: node.is_ending,
            vitals: *self.engine.vitals(),
            collapse: self.engine.vitals().collapse().map(|c| c.ending_text()),
            pack: self.engine.inventory_text(),
            items: self
                .engine
                .inventory()
                .items()
                .iter()
                .map(|item| item.name.clone())
                .collect(),
            status: self.engine.status_message().to_string(),
            event_pending: self.engine.event_pending(),
            event,
            can_undo: self.engine.history_depth() > 0,
        };
        serde_json::to_string(&view).map_err(|e| js_err("Serialization error", e))
    }
}
