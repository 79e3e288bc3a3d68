use super::{DataType, Graph, IdGenerator, Node, NodeId, NodeKind, Pin, VARIABLE_PROPERTY};
use crate::error::GraphError;
use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// A declared graph variable. Declarative only, it carries no runtime value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    #[serde(rename = "type")]
    pub var_type: DataType,
}

impl Variable {
    pub fn new(name: impl Into<String>, var_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            var_type: var_type.into(),
        }
    }

    /// Variable names compare case-insensitively.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableAccess {
    Get,
    Set,
}

impl Graph {
    /// Adds a "Get <name>" or "Set <name>" node for a declared variable.
    ///
    /// A getter exposes one data output of the variable's type. A setter has
    /// an execution input and output, the value input, and passes the new
    /// value through on a data output.
    pub fn spawn_variable_node(
        &mut self,
        ids: &mut IdGenerator,
        name: &str,
        access: VariableAccess,
        position: Point,
    ) -> Result<NodeId, GraphError> {
        let variable = self
            .variable(name)
            .cloned()
            .ok_or_else(|| GraphError::VariableNotFound(name.to_string()))?;

        let id = ids.node_id();
        let builder = match access {
            VariableAccess::Get => Node::builder(
                id.clone(),
                format!("Get {}", variable.name),
                NodeKind::VariableGet,
            )
            .pin(Pin::data_out(ids.pin_id(), &variable.name, variable.var_type.clone())),
            VariableAccess::Set => Node::builder(
                id.clone(),
                format!("Set {}", variable.name),
                NodeKind::VariableSet,
            )
            .pin(Pin::exec_in(ids.pin_id()))
            .pin(Pin::data_in(ids.pin_id(), &variable.name, variable.var_type.clone()))
            .pin(Pin::exec_out(ids.pin_id()))
            .pin(Pin::data_out(ids.pin_id(), "", variable.var_type.clone())),
        };

        let node = builder
            .at(position.x, position.y)
            .property(VARIABLE_PROPERTY, variable.name.clone())
            .build();
        self.add_node(node)?;
        Ok(id)
    }
}
