//! Play: the interactive drive loop for a wolf trail story.
//!
//! Usage: play [--story <name|path>] [--config <path>] [--seed <n>]
//!
//! Commands at the prompt:
//!   1 / 2        take choice A / B
//!   use <item>   use an item from the pack
//!   undo         rewind the last choice
//!   pack         show the pack
//!   help         list commands
//!   quit         exit

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use wolf_trail::core::engine::{ChoiceOutcome, Engine};
use wolf_trail::core::rolls::RollSource;
use wolf_trail::core::story_graph::BuiltinStory;

#[derive(Debug, Parser)]
#[command(name = "play", about = "Walk the wolf through a story")]
struct Args {
    /// Bundled story name (frozen_pack, blizzard_fork) or a RON story file.
    #[arg(long, default_value = "frozen_pack")]
    story: String,

    /// RON engine config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

const RULE: &str = "----------------------------";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Engine::builder();
    builder = match BuiltinStory::from_name(&args.story) {
        Some(story) => builder.builtin(story),
        None => builder.story_file(&args.story),
    };
    if let Some(ref path) = args.config {
        builder = builder.config_file(path);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    let mut engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(1);
        }
    };

    if !engine.story().title().is_empty() {
        println!("=== {} ===", engine.story().title());
    }
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    while !engine.is_ended() {
        if let Some(collapse) = engine.vitals().collapse() {
            println!("\n{}", RULE);
            println!("{}", collapse.ending_text());
            println!("\nGAME OVER");
            return;
        }

        render(&engine);
        print!("> ");
        stdout.flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd.to_lowercase(), rest.trim()),
            None => (line.to_lowercase(), ""),
        };

        match cmd.as_str() {
            "quit" | "exit" | "q" => {
                println!("The wolf lies down in the snow.");
                return;
            }
            "help" | "h" | "?" => print_help(),
            "pack" | "p" => println!("{}", engine.inventory_text()),
            "undo" | "u" => {
                engine.undo();
                println!("{}", engine.status_message());
            }
            "use" => {
                if rest.is_empty() {
                    println!("Usage: use <item name>");
                    continue;
                }
                // The status line already says what happened.
                let _ = engine.use_item(rest);
                println!("{}", engine.status_message());
            }
            other => match other.parse::<i64>() {
                Ok(choice) => report(engine.make_choice(choice), &engine),
                Err(_) => println!("Unknown command: '{}'. Type 'help' for commands.", other),
            },
        }
    }

    println!("\n{}", RULE);
    println!("{}", engine.current_node().text);
    println!("\n{}", engine.vitals());
    println!("\nGAME OVER");
}

fn render<R: RollSource>(engine: &Engine<R>) {
    let node = engine.current_node();
    println!("\n{}", RULE);
    if engine.event_pending() {
        if let Some(event) = engine.last_event() {
            println!("!!! {} !!!", event);
            println!("{}", engine.vitals());
            println!("\n1. Continue");
            return;
        }
    }
    println!("{}", node.text);
    println!("\n{}", engine.vitals());
    println!("{}", engine.inventory_text());
    println!("\n1. {}", node.label_a);
    println!("2. {}", node.label_b);
}

fn report<R: RollSource>(outcome: ChoiceOutcome, engine: &Engine<R>) {
    if let ChoiceOutcome::Advanced { moved, granted, .. } = outcome {
        if !moved {
            println!("Nothing lies that way. Time passes.");
        }
        if !granted.is_empty() {
            println!("{}", engine.status_message());
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  1 / 2        Take choice A / B");
    println!("  use <item>   Use an item from your pack");
    println!("  undo         Rewind the last choice");
    println!("  pack         Show your pack");
    println!("  help         Show this help");
    println!("  quit         Exit");
}
