//! Story loading integration tests: fixture files and the bundled stories.

use std::path::Path;

use wolf_trail::core::config::{ConfigError, EngineConfig};
use wolf_trail::core::story_graph::{BuiltinStory, Choice, StoryError, StoryGraph, StoryWarning};
use wolf_trail::schema::item::ItemKind;
use wolf_trail::schema::story::NodeId;

#[test]
fn crossroads_fixture_loads_and_lints_clean() {
    let graph = StoryGraph::load_from_ron(Path::new("tests/fixtures/crossroads.ron")).unwrap();
    assert_eq!(graph.title(), "Crossroads");
    assert_eq!(graph.len(), 6);
    assert_eq!(graph.root().id, NodeId(10));
    assert_eq!(graph.root().title(), "Crossroads");
    assert_eq!(graph.endings().count(), 2);
    assert_eq!(graph.reachable().len(), 6);
    assert!(graph.lint().is_empty());

    // 20 -B-> 30 and 10 -B-> 30; 20 -A-> 40 and 30 -A-> 40
    assert_eq!(graph.converging(), vec![NodeId(30), NodeId(40)]);

    let via_north = graph.follow(NodeId(20), Choice::A).unwrap();
    let via_east = graph.follow(NodeId(30), Choice::A).unwrap();
    assert!(std::ptr::eq(via_north, via_east));
    assert!(graph.follow(NodeId(30), Choice::B).is_none());

    let hare = &graph.grants_at(NodeId(40))[0];
    assert_eq!(hare.name, "Hare");
    assert_eq!(hare.kind, ItemKind::Food);
    assert_eq!(hare.magnitude, 25);
    assert!(graph.grants_at(NodeId(10)).is_empty());
}

#[test]
fn dangling_edge_is_rejected() {
    let err = StoryGraph::load_from_ron(Path::new("tests/fixtures/broken_edge.ron")).unwrap_err();
    match err {
        StoryError::DanglingEdge { from, choice, to } => {
            assert_eq!(from, NodeId(2));
            assert_eq!(choice, Choice::A);
            assert_eq!(to, NodeId(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let err = StoryGraph::load_from_ron(Path::new("tests/fixtures/no_such_story.ron")).unwrap_err();
    assert!(matches!(err, StoryError::Io(_)));
}

#[test]
fn bundled_stories_load_by_name() {
    for name in ["frozen_pack", "blizzard_fork"] {
        let builtin = BuiltinStory::from_name(name).unwrap();
        assert_eq!(builtin.name(), name);
        let graph = StoryGraph::builtin(builtin).unwrap();
        assert_eq!(graph.root().id, NodeId(1));
        assert!(graph.endings().count() > 0);
    }
    assert!(BuiltinStory::from_name("summer_hunt").is_none());
}

#[test]
fn frozen_pack_reaches_every_node() {
    let graph = StoryGraph::builtin(BuiltinStory::FrozenPack).unwrap();
    assert_eq!(graph.reachable().len(), graph.len());
    assert!(graph.converging().contains(&NodeId(9)));
    assert_eq!(graph.grants_at(NodeId(8))[0].name, "Medical Herbs");
}

#[test]
fn blizzard_fork_dead_ends_are_reported() {
    let graph = StoryGraph::builtin(BuiltinStory::BlizzardFork).unwrap();
    let dead: Vec<NodeId> = graph
        .lint()
        .into_iter()
        .filter_map(|w| match w {
            StoryWarning::DeadEnd(id) => Some(id),
            _ => None,
        })
        .collect();
    assert_eq!(dead, (11..=15).map(NodeId).collect::<Vec<_>>());
}

#[test]
fn harsh_config_fixture_parses() {
    let cfg = EngineConfig::load_from_ron(Path::new("tests/fixtures/harsh_winter.ron")).unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.hunger_per_choice, 10);
    assert_eq!(cfg.event_chance, 100);
    assert_eq!(cfg.random_event.health_delta, -15);
    assert!(!cfg.regrant_on_revisit);
    // Not named in the file, so left at the default.
    assert_eq!(cfg.choice_b_energy_cost, 5);
}

#[test]
fn mistyped_config_is_a_ron_error() {
    let err = EngineConfig::parse_ron(r#"(event_chance: "often")"#).unwrap_err();
    assert!(matches!(err, ConfigError::Ron(_)));
}
