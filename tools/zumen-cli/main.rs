use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use zumen::prelude::*;
use zumen::schema::TEMPLATE_NAMES;

/// Command-line front end of the zumen graph editor engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a built-in template as schema JSON
    Template {
        /// Template name; omit to list the available ones
        name: Option<String>,
    },
    /// Project a graph into a scene and print it as JSON
    Render {
        /// Path to the graph schema JSON file
        graph_path: String,
        /// Optional render configuration JSON file
        #[arg(short, long)]
        config: Option<String>,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long, default_value_t = 720.0)]
        height: f32,
        /// Fit the graph into the container before projecting
        #[arg(long)]
        fit: bool,
    },
    /// Apply a script of input events to a graph and print the outcome
    Replay {
        /// Path to the graph schema JSON file
        graph_path: String,
        /// Path to a JSON array of input events
        events_path: String,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long, default_value_t = 720.0)]
        height: f32,
    },
}

#[derive(Serialize)]
struct ReplayReport {
    events: Vec<EditorEvent>,
    selected: Option<NodeId>,
    viewport: Viewport,
    graph: GraphDocument,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Template { name } => run_template(name),
        Command::Render {
            graph_path,
            config,
            width,
            height,
            fit,
        } => run_render(&graph_path, config.as_deref(), width, height, fit),
        Command::Replay {
            graph_path,
            events_path,
            width,
            height,
        } => run_replay(&graph_path, &events_path, width, height),
    }
}

fn run_template(name: Option<String>) {
    let Some(name) = name else {
        println!("Available templates:");
        for name in TEMPLATE_NAMES {
            println!("  - {}", name);
        }
        return;
    };
    let graph = template(&name).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    print_json(&graph.to_document());
}

fn run_render(graph_path: &str, config_path: Option<&str>, width: f32, height: f32, fit: bool) {
    let start = Instant::now();
    let config = match config_path {
        Some(path) => RenderConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load render config: {}", e))),
        None => RenderConfig::default(),
    };
    let graph = load_graph(graph_path);

    let mut editor = Editor::with_config(config, InteractionConfig::default());
    editor.load_graph(graph);
    if fit {
        editor.set_container(width, height);
        editor.fit_to_content();
    }
    let scene = editor.scene();
    tracing::info!(
        primitives = scene.primitives().len(),
        elapsed = ?start.elapsed(),
        "scene projected"
    );
    print_json(&scene);
}

fn run_replay(graph_path: &str, events_path: &str, width: f32, height: f32) {
    let graph = load_graph(graph_path);
    let script = fs::read_to_string(events_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read events file '{}': {}",
            events_path, e
        ))
    });
    let inputs: Vec<InputEvent> = serde_json::from_str(&script)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse events JSON: {}", e)));

    let mut editor = Editor::new();
    editor.set_container(width, height);
    editor.load_graph(graph);

    let events = inputs
        .into_iter()
        .flat_map(|input| editor.handle_event(input))
        .collect();

    print_json(&ReplayReport {
        events,
        selected: editor.selected().cloned(),
        viewport: *editor.viewport(),
        graph: editor.graph().to_document(),
    });
}

fn load_graph(path: &str) -> Graph {
    let json = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read graph file '{}': {}", path, e)));
    Graph::from_json(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn print_json(value: &impl Serialize) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize output: {}", e)));
    println!("{}", json);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
