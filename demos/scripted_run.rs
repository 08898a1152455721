//! Scripted run: plays the frozen pack along a fixed path with a fixed
//! set of rolls, then rewinds part of it.
//!
//! A storm hits on the third choice. The wolf eats its scraps, treats its
//! wounds with herbs, then thinks better of the last two steps.
//!
//! Run with: cargo run --example scripted_run

use wolf_trail::core::engine::{ChoiceOutcome, Engine};
use wolf_trail::core::rolls::ScriptedRolls;
use wolf_trail::core::story_graph::BuiltinStory;

fn main() {
    // Third choice rolls 12: below the 30% threshold, so a storm hits.
    let rolls = ScriptedRolls::new([80, 55, 12, 70, 64, 91]);
    let mut engine = Engine::builder()
        .builtin(BuiltinStory::FrozenPack)
        .build_with_rolls(rolls)
        .expect("bundled story should load");

    println!("=== {} ===\n", engine.story().title());

    // Follow blood scent, cross the ice, heal wounds, (dismiss storm), rest longer.
    for choice in [1, 1, 1, 1, 1] {
        let title = engine.current_node().title().to_string();
        match engine.make_choice(choice) {
            ChoiceOutcome::Acknowledged => println!("  (the storm passes)"),
            ChoiceOutcome::Advanced { to, granted, event, .. } => {
                println!("{} --{}--> {}", title, choice, to);
                for item in granted {
                    println!("  found {}", item.name);
                }
                if let Some(event) = event {
                    println!("  !!! {} !!!", event);
                }
            }
        }
        println!("  {}", engine.vitals());
    }

    let _ = engine.use_item("Scraps");
    println!("\n{}", engine.status_message());
    let _ = engine.use_item("Medical Herbs");
    println!("{}", engine.status_message());
    println!("{}", engine.vitals());
    println!("{}", engine.inventory_text());

    println!("\nNow at: {}", engine.current_node().title());
    engine.undo();
    engine.undo();
    println!("{} -> back at: {}", engine.status_message(), engine.current_node().title());
    println!("{}", engine.vitals());
    println!("{}", engine.inventory_text());
}
