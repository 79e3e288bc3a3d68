//! The canonical in-memory graph: nodes owning pins, connections between pins,
//! and declared variables.
//!
//! All mutation goes through [`Graph`] so the id invariants hold at all times:
//! node ids are unique, and no two pins anywhere in the graph share an id.
//! Connections reference pins by id only and may dangle; consumers tolerate that.

use crate::error::GraphError;
use crate::geometry::Point;
use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use tracing::{debug, warn};

mod ids;
mod node;
mod pin;
mod variable;

pub use ids::{IdGenerator, NodeId, PinId};
pub use node::{Node, NodeBuilder, NodeKind, VALUE_PROPERTY, VARIABLE_PROPERTY};
pub use pin::{DataType, Pin, PinDirection, PinKind};
pub use variable::{Variable, VariableAccess};

/// A directed edge from an output pin to an input pin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub from: PinId,
    pub to: PinId,
}

impl Connection {
    pub fn new(from: impl Into<PinId>, to: impl Into<PinId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True if either end of the edge is `pin`.
    pub fn touches(&self, pin: &str) -> bool {
        self.from.as_str() == pin || self.to.as_str() == pin
    }
}

/// What `remove_node` took out of the graph.
#[derive(Debug, Clone)]
pub struct RemovedNode {
    pub node: Node,
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    variables: Vec<Variable>,
    /// pin id -> owning node id
    pin_owners: AHashMap<PinId, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph wholesale, applying the same checks as the incremental operations.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node>,
        connections: impl IntoIterator<Item = Connection>,
        variables: impl IntoIterator<Item = Variable>,
    ) -> Result<Self, GraphError> {
        let mut graph = Graph::new();
        for variable in variables {
            graph.add_variable(&variable.name, variable.var_type)?;
        }
        for node in nodes {
            graph.add_node(node)?;
        }
        for connection in connections {
            graph.add_connection(connection.from, connection.to)?;
        }
        Ok(graph)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Resolves a pin id to its owning node and the pin itself.
    pub fn pin(&self, pin_id: &str) -> Option<(&Node, &Pin)> {
        let owner = self.pin_owners.get(pin_id)?;
        let node = self.node(owner.as_str())?;
        node.pin(pin_id).map(|pin| (node, pin))
    }

    pub fn owner_of(&self, pin_id: &str) -> Option<&NodeId> {
        self.pin_owners.get(pin_id)
    }

    /// Case-insensitive variable lookup.
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.has_name(name))
    }

    /// Connections whose target pin belongs to `node_id`.
    pub fn incoming<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .iter()
            .filter(move |c| self.owner_of(c.to.as_str()).is_some_and(|o| o == node_id))
    }

    /// Connections whose source pin belongs to `node_id`.
    pub fn outgoing<'a>(&'a self, node_id: &'a str) -> impl Iterator<Item = &'a Connection> + 'a {
        self.connections
            .iter()
            .filter(move |c| self.owner_of(c.from.as_str()).is_some_and(|o| o == node_id))
    }

    /// Appends a node. Its id and every one of its pin ids must be new to the graph.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.node(node.id.as_str()).is_some() {
            warn!(node = %node.id, "rejected node with duplicate id");
            return Err(GraphError::DuplicateId(node.id.to_string()));
        }
        if let Some(dup) = node.pins.iter().map(|p| &p.id).duplicates().next() {
            return Err(GraphError::DuplicateId(dup.to_string()));
        }
        if let Some(taken) = node.pins.iter().find(|p| self.pin_owners.contains_key(&p.id)) {
            warn!(pin = %taken.id, "rejected node reusing an existing pin id");
            return Err(GraphError::DuplicateId(taken.id.to_string()));
        }

        for pin in &node.pins {
            self.pin_owners.insert(pin.id.clone(), node.id.clone());
        }
        debug!(node = %node.id, name = %node.name, pins = node.pins.len(), "node added");
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node together with every connection touching one of its pins.
    pub fn remove_node(&mut self, id: &str) -> Result<RemovedNode, GraphError> {
        let index = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;

        let node = self.nodes.remove(index);
        let pins: AHashSet<&str> = node.pins.iter().map(|p| p.id.as_str()).collect();
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.connections)
            .into_iter()
            .partition(|c| pins.iter().any(|pin| c.touches(pin)));
        self.connections = kept;
        for pin in &node.pins {
            self.pin_owners.remove(&pin.id);
        }

        debug!(node = %node.id, connections = removed.len(), "node removed");
        Ok(RemovedNode {
            node,
            connections: removed,
        })
    }

    /// Moves a node's top-left corner. Connections follow on the next render.
    pub fn move_node(&mut self, id: &str, x: f32, y: f32) -> Result<(), GraphError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        node.position = Point::new(x, y);
        Ok(())
    }

    /// Appends an edge. Duplicates and kind mismatches are accepted; only self-loops are not.
    pub fn add_connection(
        &mut self,
        from: impl Into<PinId>,
        to: impl Into<PinId>,
    ) -> Result<(), GraphError> {
        let connection = Connection::new(from, to);
        if connection.from == connection.to {
            warn!(pin = %connection.from, "rejected self-loop connection");
            return Err(GraphError::SelfLoop(connection.from.to_string()));
        }
        debug!(from = %connection.from, to = %connection.to, "connection added");
        self.connections.push(connection);
        Ok(())
    }

    /// Removes every edge `from -> to`. Returns how many were removed.
    pub fn remove_connection(&mut self, from: &str, to: &str) -> usize {
        let before = self.connections.len();
        self.connections.retain(|c| !(c.from == from && c.to == to));
        before - self.connections.len()
    }

    /// Removes every edge touching `pin_id`. Returns how many were removed.
    pub fn disconnect_pin(&mut self, pin_id: &str) -> usize {
        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(pin_id));
        before - self.connections.len()
    }

    /// Declares a variable. Empty names and case-insensitive duplicates are rejected.
    pub fn add_variable(
        &mut self,
        name: &str,
        var_type: impl Into<DataType>,
    ) -> Result<(), GraphError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.variable(name).is_some() {
            warn!(variable = name, "rejected duplicate variable");
            return Err(GraphError::DuplicateVariable(name.to_string()));
        }
        self.variables.push(Variable::new(name, var_type));
        debug!(variable = name, "variable added");
        Ok(())
    }

    /// Removes a variable, its getter/setter nodes and all of their connections.
    ///
    /// Returns the ids of the removed nodes.
    pub fn remove_variable(&mut self, name: &str) -> Result<Vec<NodeId>, GraphError> {
        let index = self
            .variables
            .iter()
            .position(|v| v.has_name(name))
            .ok_or_else(|| GraphError::VariableNotFound(name.to_string()))?;
        let variable = self.variables.remove(index);

        let derived: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|n| n.derived_variable().is_some_and(|v| variable.has_name(v)))
            .map(|n| n.id.clone())
            .collect();

        for id in &derived {
            self.remove_node(id.as_str())?;
        }
        debug!(variable = %variable.name, nodes = derived.len(), "variable removed");
        Ok(derived)
    }
}
