use crate::graph::{Graph, Pin, PinDirection};
use serde::Serialize;

/// Read-only view model for a detail panel about one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub node_id: String,
    pub node_name: String,
    pub node_type: String,
    pub literal_value: Option<String>,
    pub pins: Vec<PinSummary>,
    pub incoming_connections: Vec<ConnectionSummary>,
    pub outgoing_connections: Vec<ConnectionSummary>,
    pub code_snippet: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinSummary {
    pub direction: PinDirection,
    pub data_type: String,
    pub name: String,
}

/// One edge seen from the inspected node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSummary {
    /// Label of the inspected node's pin.
    pub pin: String,
    /// Name of the node at the other end.
    pub peer_node: String,
    /// Label of the pin at the other end.
    pub peer_pin: String,
}

impl DetailView {
    /// Builds the view for `node_id`. Edges whose far end does not resolve are left out.
    pub fn for_node(graph: &Graph, node_id: &str) -> Option<DetailView> {
        let node = graph.node(node_id)?;
        let summarize = |local: &str, peer: &str| {
            let (_, local_pin) = graph.pin(local)?;
            let (peer_node, peer_pin) = graph.pin(peer)?;
            Some(ConnectionSummary {
                pin: pin_label(local_pin),
                peer_node: peer_node.name.clone(),
                peer_pin: pin_label(peer_pin),
            })
        };

        let incoming_connections = graph
            .incoming(node_id)
            .filter_map(|c| summarize(c.to.as_str(), c.from.as_str()))
            .collect();
        let outgoing_connections = graph
            .outgoing(node_id)
            .filter_map(|c| summarize(c.from.as_str(), c.to.as_str()))
            .collect();

        Some(DetailView {
            node_id: node.id.to_string(),
            node_name: node.name.clone(),
            node_type: node.kind.to_string(),
            literal_value: node.literal_value(),
            pins: node
                .pins
                .iter()
                .map(|pin| PinSummary {
                    direction: pin.direction,
                    data_type: pin.data_type.to_string(),
                    name: pin.name.clone(),
                })
                .collect(),
            incoming_connections,
            outgoing_connections,
            code_snippet: node.code_snippet.clone(),
        })
    }
}

/// A pin's name, or its data type for unnamed pins.
fn pin_label(pin: &Pin) -> String {
    if pin.name.is_empty() {
        pin.data_type.to_string()
    } else {
        pin.name.clone()
    }
}
