use super::config::Color;
use crate::geometry::{CubicBezier, Point, Rect};
use crate::graph::{NodeId, PinId};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// Horizontal alignment of a text run. Text is always centered vertically on its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    /// Data pins.
    Circle,
    /// Control-flow pins, pointing right.
    Arrow,
}

/// The graph entity a primitive was derived from, for host-side hit testing and styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Element {
    NodeBody { node: NodeId },
    NodeHeader { node: NodeId },
    NodeTitle { node: NodeId },
    Pin { node: NodeId, pin: PinId },
    PinLabel { node: NodeId, pin: PinId },
    Connection { from: PinId, to: PinId },
    Placeholder,
}

/// A screen-space draw command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    Rect {
        rect: Rect,
        fill: Color,
        stroke: Option<Stroke>,
        corner_radius: f32,
        element: Element,
    },
    Path {
        curve: CubicBezier,
        stroke: Stroke,
        element: Element,
    },
    Text {
        position: Point,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
        element: Element,
    },
    Marker {
        center: Point,
        radius: f32,
        shape: MarkerShape,
        color: Color,
        filled: bool,
        element: Element,
    },
}

impl Primitive {
    pub fn element(&self) -> &Element {
        match self {
            Primitive::Rect { element, .. }
            | Primitive::Path { element, .. }
            | Primitive::Text { element, .. }
            | Primitive::Marker { element, .. } => element,
        }
    }
}
