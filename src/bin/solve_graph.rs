use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use searchlab::context::SearchContext;
use searchlab::run::{run, Request};

#[derive(Debug, Clone, Deserialize, Serialize)]
struct GraphNodeSpec {
    name: String,
    #[serde(default)]
    heuristic: Option<f64>,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct GraphEdgeSpec {
    a: String,
    b: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct GraphSpec {
    #[serde(default)]
    nodes: Vec<GraphNodeSpec>,
    #[serde(default)]
    edges: Vec<GraphEdgeSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct GameNodeSpec {
    name: String,
    #[serde(default)]
    score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct GameEdgeSpec {
    parent: String,
    child: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct GameSpec {
    #[serde(default)]
    nodes: Vec<GameNodeSpec>,
    #[serde(default)]
    edges: Vec<GameEdgeSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct InputFile {
    #[serde(default)]
    graph: GraphSpec,
    #[serde(default)]
    game: GameSpec,
    request: Request,
}

fn build_context(input: &InputFile) -> Result<SearchContext, String> {
    let mut cx = SearchContext::new();

    for n in &input.graph.nodes {
        match n.heuristic {
            Some(h) => {
                cx.graph
                    .add_node_with_heuristic(&n.name, h)
                    .map_err(|e| e.to_string())?;
            }
            None => {
                cx.graph.add_node(&n.name);
            }
        }
    }
    for e in &input.graph.edges {
        cx.graph
            .add_edge(&e.a, &e.b, e.weight)
            .map_err(|err| err.to_string())?;
    }

    for n in &input.game.nodes {
        match n.score {
            Some(s) => {
                cx.game.add_leaf(&n.name, s).map_err(|e| e.to_string())?;
            }
            None => {
                cx.game.add_node(&n.name);
            }
        }
    }
    for e in &input.game.edges {
        cx.game.add_edge(&e.parent, &e.child);
    }

    Ok(cx)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: solve_graph <problem.json>");
        std::process::exit(2);
    }

    let path = PathBuf::from(&args[1]);
    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Failed to read {}: {e}", path.display());
            std::process::exit(1);
        }
    };

    let input: InputFile = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON in {}: {e}", path.display());
            std::process::exit(2);
        }
    };

    let cx = match build_context(&input) {
        Ok(cx) => cx,
        Err(e) => {
            eprintln!("Invalid problem description: {e}");
            std::process::exit(2);
        }
    };

    let outcome = match run(&cx, &input.request) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let out = serde_json::json!({
        "request": input.request,
        "outcome": outcome,
    });
    match serde_json::to_string_pretty(&out) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to serialize result: {e}");
            std::process::exit(1);
        }
    }
}
