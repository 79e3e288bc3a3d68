use super::ids::{NodeId, PinId};
use super::pin::{Pin, PinDirection};
use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Property holding a node's literal value.
pub const VALUE_PROPERTY: &str = "value";
/// Property naming the variable a getter/setter node was created from.
pub const VARIABLE_PROPERTY: &str = "variable";

/// The category of a node. Only affects header styling, never behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Event,
    Function,
    FlowControl,
    VariableGet,
    VariableSet,
    Literal,
    Custom(String),
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "event" => NodeKind::Event,
            "function" | "call" => NodeKind::Function,
            "flow_control" | "flowcontrol" | "flow" => NodeKind::FlowControl,
            "variable_get" | "variableget" | "get" => NodeKind::VariableGet,
            "variable_set" | "variableset" | "set" => NodeKind::VariableSet,
            "literal" => NodeKind::Literal,
            _ => NodeKind::Custom(tag.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Event => "event",
            NodeKind::Function => "function",
            NodeKind::FlowControl => "flow_control",
            NodeKind::VariableGet => "variable_get",
            NodeKind::VariableSet => "variable_set",
            NodeKind::Literal => "literal",
            NodeKind::Custom(raw) => raw,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        NodeKind::from_tag(&tag)
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::from_tag(tag)
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the graph. Owns its pins; their order sets the vertical stacking.
///
/// Height and pin positions are not stored here, see [`crate::geometry::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    /// Top-left corner in graph space.
    pub position: Point,
    pub properties: BTreeMap<String, serde_json::Value>,
    /// Opaque provenance of the node, e.g. the source line it was generated from.
    pub code_snippet: Option<String>,
    pub pins: Vec<Pin>,
}

impl Node {
    pub fn builder(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        kind: impl Into<NodeKind>,
    ) -> NodeBuilder {
        NodeBuilder::new(id, name, kind)
    }

    pub fn pin(&self, pin_id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == pin_id)
    }

    pub fn has_pin(&self, pin_id: &PinId) -> bool {
        self.pins.iter().any(|p| &p.id == pin_id)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == PinDirection::In)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter().filter(|p| p.direction == PinDirection::Out)
    }

    /// The literal value as display text. Strings are shown without quotes.
    pub fn literal_value(&self) -> Option<String> {
        self.properties.get(VALUE_PROPERTY).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Name of the variable this node was derived from, if it is a getter or setter.
    ///
    /// The `variable` property wins; otherwise a `Get <name>` or `Set <name>`
    /// display name (any case, any kind) identifies the variable.
    pub fn derived_variable(&self) -> Option<&str> {
        if let Some(name) = self
            .properties
            .get(VARIABLE_PROPERTY)
            .and_then(|v| v.as_str())
        {
            return Some(name);
        }
        let (prefix, rest) = self.name.split_at_checked(4)?;
        let accessor = prefix.eq_ignore_ascii_case("get ") || prefix.eq_ignore_ascii_case("set ");
        let rest = rest.trim();
        (accessor && !rest.is_empty()).then_some(rest)
    }
}

pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, kind: impl Into<NodeKind>) -> Self {
        Self {
            node: Node {
                id: id.into(),
                name: name.into(),
                kind: kind.into(),
                position: Point::ZERO,
                properties: BTreeMap::new(),
                code_snippet: None,
                pins: Vec::new(),
            },
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.node.position = Point::new(x, y);
        self
    }

    pub fn pin(mut self, pin: Pin) -> Self {
        self.node.pins.push(pin);
        self
    }

    pub fn pins(mut self, pins: impl IntoIterator<Item = Pin>) -> Self {
        self.node.pins.extend(pins);
        self
    }

    pub fn property(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.node.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn code_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.node.code_snippet = Some(snippet.into());
        self
    }

    pub fn build(self) -> Node {
        self.node
    }
}
