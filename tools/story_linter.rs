//! Story Linter: checks the structure of story files.
//!
//! Usage: story_linter <story.ron | story_dir | builtin name>...
//!
//! Exits non-zero if any story fails to load.

use std::path::{Path, PathBuf};
use std::process;

use wolf_trail::core::story_graph::{BuiltinStory, StoryGraph};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        println!("Usage: story_linter <story.ron | story_dir | frozen_pack | blizzard_fork>...");
        process::exit(0);
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;

    for arg in &args {
        if let Some(builtin) = BuiltinStory::from_name(arg) {
            let (e, w) = report(arg, StoryGraph::builtin(builtin));
            errors += e;
            warnings += w;
            continue;
        }

        let path = Path::new(arg);
        let files = if path.is_dir() {
            collect_ron_files(path)
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            eprintln!("ERROR: Path '{}' does not exist", arg);
            errors += 1;
            continue;
        };

        for file in files {
            let (e, w) = report(&file.display().to_string(), StoryGraph::load_from_ron(&file));
            errors += e;
            warnings += w;
        }
    }

    println!("\nSummary: {} errors, {} warnings", errors, warnings);

    if errors > 0 {
        process::exit(1);
    }
}

fn report(
    name: &str,
    loaded: Result<StoryGraph, wolf_trail::core::story_graph::StoryError>,
) -> (usize, usize) {
    println!("\n=== {} ===", name);
    let graph = match loaded {
        Ok(graph) => graph,
        Err(e) => {
            println!("ERROR: {}", e);
            return (1, 0);
        }
    };

    let endings = graph.endings().count();
    let converging = graph.converging();
    println!(
        "{} nodes, {} endings, {} reachable",
        graph.len(),
        endings,
        graph.reachable().len()
    );
    if !converging.is_empty() {
        let ids: Vec<String> = converging.iter().map(|id| id.to_string()).collect();
        println!("Converging nodes: {}", ids.join(", "));
    }

    let warnings = graph.lint();
    if warnings.is_empty() {
        println!("All checks passed!");
    }
    for warning in &warnings {
        println!("WARNING: {}", warning);
    }
    (0, warnings.len())
}

fn collect_ron_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_ron_files(&path));
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}
