//! Per-pin-row node layout.
//!
//! A node is a fixed-width box: a header band, then one row per pin. Inputs
//! stack down the left edge and outputs down the right edge, each in the
//! order they appear in the node's pin list.

use super::{Point, Rect};
use crate::graph::{Node, PinDirection};
use serde::{Deserialize, Serialize};

/// Sizes that drive the node layout, all in graph units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    pub node_width: f32,
    pub header_height: f32,
    /// Distance from the bottom of the header to the first pin row's anchor.
    pub pin_top_padding: f32,
    pub pin_row_height: f32,
    /// Vertical space added below the header on top of the pin rows.
    pub body_padding: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            node_width: 220.0,
            header_height: 36.0,
            pin_top_padding: 14.0,
            pin_row_height: 24.0,
            body_padding: 20.0,
        }
    }
}

/// `header + body padding + max(#inputs, #outputs) * row height`.
pub fn node_height(node: &Node, metrics: &LayoutMetrics) -> f32 {
    let rows = node.inputs().count().max(node.outputs().count());
    metrics.header_height + metrics.body_padding + rows as f32 * metrics.pin_row_height
}

/// The node's full rectangle in graph space.
pub fn node_rect(node: &Node, metrics: &LayoutMetrics) -> Rect {
    Rect::new(
        node.position.x,
        node.position.y,
        metrics.node_width,
        node_height(node, metrics),
    )
}

/// Offset of a pin's anchor relative to the node's top-left corner.
///
/// Returns `None` when the node has no pin with that id.
pub fn pin_offset(node: &Node, pin_id: &str, metrics: &LayoutMetrics) -> Option<Point> {
    let pin = node.pin(pin_id)?;
    let row = node
        .pins
        .iter()
        .filter(|p| p.direction == pin.direction)
        .position(|p| p.id == pin_id)?;

    let x = match pin.direction {
        PinDirection::In => 0.0,
        PinDirection::Out => metrics.node_width,
    };
    let y = metrics.header_height + metrics.pin_top_padding + row as f32 * metrics.pin_row_height;
    Some(Point::new(x, y))
}

/// A pin's anchor in graph space.
pub fn pin_position(node: &Node, pin_id: &str, metrics: &LayoutMetrics) -> Option<Point> {
    pin_offset(node, pin_id, metrics).map(|offset| node.position + offset)
}

/// Bounding box of every node's full rectangle. `None` for no nodes.
pub fn compute_bounds<'a>(
    nodes: impl IntoIterator<Item = &'a Node>,
    metrics: &LayoutMetrics,
) -> Option<Rect> {
    nodes
        .into_iter()
        .map(|node| node_rect(node, metrics))
        .reduce(|acc, rect| acc.union(&rect))
}
