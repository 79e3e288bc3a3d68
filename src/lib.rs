//! # Zumen - Blueprint Graph Viewer and Editor Engine
//!
//! **Zumen** is the core of an interactive node-graph editor for blueprint-style
//! visual scripts: event, function, flow-control, variable and literal nodes
//! wired together through typed pins. It owns the graph model, lays nodes out,
//! maps between graph space and screen space, turns raw pointer input into
//! editing operations and projects everything into a flat list of screen-space
//! draw primitives. Painting those primitives is left to the host UI.
//!
//! ## Core Workflow
//!
//! 1.  **Get a Graph**: Start from a built-in template, parse a schema document
//!     produced by a generative backend, or implement [`schema::IntoGraph`] for
//!     your own format.
//! 2.  **Load it into an Editor**: The [`editor::Editor`] owns the graph along
//!     with the viewport, the interaction state and the render configuration.
//! 3.  **Forward Input**: Feed normalized pointer, wheel and key events into
//!     `handle_event`. Each call reports what changed as `EditorEvent`s.
//! 4.  **Paint**: Call `scene()` after each change and draw the primitives.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zumen::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut editor = Editor::new();
//!     editor.set_container(1280.0, 720.0);
//!
//!     // Loading a graph fits it into the container.
//!     editor.load(template("hello_world")?)?;
//!
//!     // Press on the PrintString node and release without moving: a click.
//!     let at = editor.viewport().to_screen_space(Point::new(310.0, 10.0));
//!     editor.handle_event(InputEvent::down(at.x, at.y));
//!     let events = editor.handle_event(InputEvent::up(at.x, at.y));
//!     println!("{events:?}");
//!
//!     if let Some(detail) = editor.detail() {
//!         println!("Selected {} ({})", detail.node_name, detail.node_type);
//!     }
//!
//!     let scene = editor.scene();
//!     println!("{}", serde_json::to_string_pretty(&scene)?);
//!     Ok(())
//! }
//! ```

pub mod editor;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod interaction;
pub mod prelude;
pub mod render;
pub mod schema;
pub mod session;
pub mod viewport;
