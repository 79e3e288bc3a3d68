//! Prelude module for convenient imports
//!
//! Re-exports the types a host needs to drive an editor, build graphs and
//! consume scenes.
//!
//! # Example
//!
//! ```rust,no_run
//! use zumen::prelude::*;
//!
//! # fn run_example() -> Result<(), Box<dyn std::error::Error>> {
//! let json = std::fs::read_to_string("path/to/graph.json")?;
//! let graph = Graph::from_json(&json)?;
//!
//! let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);
//! println!("{} primitives", scene.primitives().len());
//! # Ok(())
//! # }
//! ```

// Editing
pub use crate::editor::Editor;
pub use crate::interaction::{
    DetailView, EditorEvent, InputEvent, InteractionConfig, InteractionState, Key, PointerButton,
};
pub use crate::session::{Generation, RequestId};

// Graph model
pub use crate::graph::{
    Connection, DataType, Graph, IdGenerator, Node, NodeId, NodeKind, Pin, PinDirection, PinId,
    PinKind, Variable, VariableAccess,
};

// Geometry and camera
pub use crate::geometry::{LayoutMetrics, Point, Rect, Size};
pub use crate::viewport::Viewport;

// Rendering
pub use crate::render::{Color, Primitive, RenderConfig, Scene, project};

// Schema
pub use crate::schema::{GraphDocument, IntoGraph, template};

// Error types
pub use crate::error::{ConfigError, GraphError, SchemaError};
