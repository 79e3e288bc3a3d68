//! The structural JSON schema graphs are exchanged in.
//!
//! A generative backend produces a [`GraphDocument`]; the editor turns it into
//! a [`Graph`] and can serialize the edited graph back. Field names are
//! camelCase on the wire.

use crate::error::SchemaError;
use crate::geometry::Point;
use crate::graph::{Connection, DataType, Graph, Node, NodeKind, Pin, PinDirection, PinKind, Variable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub mod template;

pub use template::{TEMPLATE_NAMES, template, template_document};

/// A whole graph as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub connections: Vec<ConnectionDocument>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub position: Point,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default)]
    pub pins: Vec<PinDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDocument {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub kind: PinKind,
    pub direction: PinDirection,
    pub data_type: DataType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionDocument {
    pub from_pin_id: String,
    pub to_pin_id: String,
}

/// A trait for foreign graph formats that can be converted into a [`Graph`].
///
/// Implement it on your own parsed structs to feed graphs from another tool
/// into the editor.
///
/// # Example
///
/// ```rust,no_run
/// use zumen::prelude::*;
///
/// struct Script {
///     steps: Vec<String>,
/// }
///
/// impl IntoGraph for Script {
///     fn into_graph(self) -> Result<Graph, SchemaError> {
///         let mut graph = Graph::new();
///         for (i, step) in self.steps.iter().enumerate() {
///             let node = Node::builder(format!("step_{i}"), step.as_str(), NodeKind::Function)
///                 .at(i as f32 * 300.0, 0.0)
///                 .pin(Pin::exec_in(format!("step_{i}_in")))
///                 .pin(Pin::exec_out(format!("step_{i}_out")))
///                 .build();
///             graph.add_node(node)?;
///             if i > 0 {
///                 graph.add_connection(format!("step_{}_out", i - 1), format!("step_{i}_in"))?;
///             }
///         }
///         Ok(graph)
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the value and converts it into an editor graph.
    fn into_graph(self) -> Result<Graph, SchemaError>;
}

impl IntoGraph for GraphDocument {
    fn into_graph(self) -> Result<Graph, SchemaError> {
        Graph::from_document(self)
    }
}

impl IntoGraph for Graph {
    fn into_graph(self) -> Result<Graph, SchemaError> {
        Ok(self)
    }
}

impl From<&Node> for NodeDocument {
    fn from(node: &Node) -> Self {
        NodeDocument {
            id: node.id.to_string(),
            name: node.name.clone(),
            kind: node.kind.clone(),
            position: node.position,
            properties: node.properties.clone(),
            code_snippet: node.code_snippet.clone(),
            pins: node.pins.iter().map(PinDocument::from).collect(),
        }
    }
}

impl From<NodeDocument> for Node {
    fn from(doc: NodeDocument) -> Self {
        Node {
            id: doc.id.into(),
            name: doc.name,
            kind: doc.kind,
            position: doc.position,
            properties: doc.properties,
            code_snippet: doc.code_snippet,
            pins: doc.pins.into_iter().map(Pin::from).collect(),
        }
    }
}

impl From<&Pin> for PinDocument {
    fn from(pin: &Pin) -> Self {
        PinDocument {
            id: pin.id.to_string(),
            name: pin.name.clone(),
            kind: pin.kind,
            direction: pin.direction,
            data_type: pin.data_type.clone(),
        }
    }
}

impl From<PinDocument> for Pin {
    fn from(doc: PinDocument) -> Self {
        Pin::new(doc.id, doc.name, doc.kind, doc.direction, doc.data_type)
    }
}

impl Graph {
    /// Builds a graph from a parsed document.
    ///
    /// Id collisions are rejected. Self-loop edges are dropped with a warning
    /// so one bad edge does not cost the whole graph.
    pub fn from_document(doc: GraphDocument) -> Result<Graph, SchemaError> {
        let nodes = doc.nodes.into_iter().map(Node::from);
        let connections = doc
            .connections
            .into_iter()
            .filter(|c| {
                let self_loop = c.from_pin_id == c.to_pin_id;
                if self_loop {
                    warn!(pin = %c.from_pin_id, "skipping self-loop connection in document");
                }
                !self_loop
            })
            .map(|c| Connection::new(c.from_pin_id, c.to_pin_id));
        Ok(Graph::from_parts(nodes, connections, doc.variables)?)
    }

    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            nodes: self.nodes().iter().map(NodeDocument::from).collect(),
            connections: self
                .connections()
                .iter()
                .map(|c| ConnectionDocument {
                    from_pin_id: c.from.to_string(),
                    to_pin_id: c.to.to_string(),
                })
                .collect(),
            variables: self.variables().to_vec(),
        }
    }

    pub fn from_json(json: &str) -> Result<Graph, SchemaError> {
        let doc: GraphDocument =
            serde_json::from_str(json).map_err(|e| SchemaError::JsonParseError(e.to_string()))?;
        Graph::from_document(doc)
    }

    /// Pretty-printed schema JSON.
    pub fn to_json(&self) -> Result<String, SchemaError> {
        serde_json::to_string_pretty(&self.to_document())
            .map_err(|e| SchemaError::ConversionError(e.to_string()))
    }
}
