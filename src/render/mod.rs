//! Stateless projection of a graph through a viewport into screen-space draw primitives.
//!
//! The host paints whatever [`Scene`] comes out of here and forwards pointer
//! input back into the editor; nothing in this module mutates the graph or the
//! viewport.

use crate::geometry::{Point, Rect, connection_path, node_rect, pin_position};
use crate::graph::{Graph, Node, PinId, PinKind};
use crate::viewport::Viewport;
use ahash::AHashSet;
use serde::Serialize;
use tracing::debug;

pub mod config;
pub mod primitive;

pub use config::{Color, Palette, RenderConfig};
pub use primitive::{Element, MarkerShape, Primitive, Stroke, TextAnchor};

/// Graph-space x positions of the skeleton boxes shown while a graph is loading.
const PLACEHOLDER_COLUMNS: [f32; 3] = [0.0, 300.0, 600.0];

/// What the host should paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Scene {
    /// A request for a new graph is in flight.
    Loading { placeholders: Vec<Primitive> },
    /// The latest request failed.
    Failed { message: String },
    /// The graph has no nodes.
    Empty { message: String },
    Graph {
        background: Color,
        primitives: Vec<Primitive>,
    },
}

impl Scene {
    pub fn primitives(&self) -> &[Primitive] {
        match self {
            Scene::Graph { primitives, .. } => primitives,
            Scene::Loading { placeholders } => placeholders,
            Scene::Failed { .. } | Scene::Empty { .. } => &[],
        }
    }

    /// Connection primitives only.
    pub fn paths(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives()
            .iter()
            .filter(|p| matches!(p, Primitive::Path { .. }))
    }
}

/// Projects `graph` through `viewport`.
///
/// Connections are emitted first so nodes paint over them. Connections with an
/// endpoint that does not resolve to a pin are skipped.
pub fn project(
    graph: &Graph,
    viewport: &Viewport,
    config: &RenderConfig,
    selected: Option<&str>,
) -> Scene {
    if graph.is_empty() {
        return Scene::Empty {
            message: config.empty_message.clone(),
        };
    }

    let scale = viewport.scale();
    let palette = &config.palette;
    let mut primitives = Vec::new();
    let mut connected: AHashSet<&PinId> = AHashSet::new();

    for connection in graph.connections() {
        let (Some((from_node, from_pin)), Some((to_node, to_pin))) = (
            graph.pin(connection.from.as_str()),
            graph.pin(connection.to.as_str()),
        ) else {
            debug!(from = %connection.from, to = %connection.to, "skipping dangling connection");
            continue;
        };
        let (Some(start), Some(end)) = (
            pin_position(from_node, from_pin.id.as_str(), &config.layout),
            pin_position(to_node, to_pin.id.as_str(), &config.layout),
        ) else {
            continue;
        };

        let color = match from_pin.kind {
            PinKind::Control => palette.exec_wire,
            PinKind::Data => palette.pin_color(&from_pin.data_type),
        };
        connected.insert(&from_pin.id);
        connected.insert(&to_pin.id);
        primitives.push(Primitive::Path {
            curve: connection_path(start, end).map(|p| viewport.to_screen_space(p)),
            stroke: Stroke {
                color,
                width: (config.wire_width * scale).max(1.0),
            },
            element: Element::Connection {
                from: connection.from.clone(),
                to: connection.to.clone(),
            },
        });
    }

    for node in graph.nodes() {
        let is_selected = selected.is_some_and(|id| node.id == id);
        project_node(node, viewport, config, is_selected, &connected, &mut primitives);
    }

    Scene::Graph {
        background: palette.background,
        primitives,
    }
}

fn project_node(
    node: &Node,
    viewport: &Viewport,
    config: &RenderConfig,
    is_selected: bool,
    connected: &AHashSet<&PinId>,
    out: &mut Vec<Primitive>,
) {
    let scale = viewport.scale();
    let palette = &config.palette;
    let rect = viewport.rect_to_screen(node_rect(node, &config.layout));
    let header_height = config.layout.header_height * scale;
    let inset = config.text_inset * scale;

    let (color, width) = if is_selected {
        (palette.selection, config.selection_width)
    } else {
        (palette.node_border, config.border_width)
    };
    let border = Stroke {
        color,
        width: (width * scale).max(1.0),
    };
    out.push(Primitive::Rect {
        rect,
        fill: palette.node_body,
        stroke: Some(border),
        corner_radius: config.corner_radius * scale,
        element: Element::NodeBody {
            node: node.id.clone(),
        },
    });
    out.push(Primitive::Rect {
        rect: Rect::new(rect.left(), rect.top(), rect.width(), header_height),
        fill: palette.header_color(&node.kind),
        stroke: None,
        corner_radius: config.corner_radius * scale,
        element: Element::NodeHeader {
            node: node.id.clone(),
        },
    });
    out.push(Primitive::Text {
        position: Point::new(rect.left() + inset, rect.top() + header_height / 2.0),
        text: node.name.clone(),
        size: config.title_size * scale,
        color: palette.text,
        anchor: TextAnchor::Start,
        element: Element::NodeTitle {
            node: node.id.clone(),
        },
    });

    let radius = config.pin_radius * scale;
    for pin in &node.pins {
        let Some(anchor) = pin_position(node, pin.id.as_str(), &config.layout) else {
            continue;
        };
        let center = viewport.to_screen_space(anchor);
        let (shape, color) = match pin.kind {
            PinKind::Control => (MarkerShape::Arrow, palette.exec_wire),
            PinKind::Data => (MarkerShape::Circle, palette.pin_color(&pin.data_type)),
        };
        out.push(Primitive::Marker {
            center,
            radius,
            shape,
            color,
            filled: connected.contains(&pin.id),
            element: Element::Pin {
                node: node.id.clone(),
                pin: pin.id.clone(),
            },
        });

        if pin.name.is_empty() {
            continue;
        }
        let (position, anchor) = if pin.is_input() {
            (Point::new(center.x + radius + inset, center.y), TextAnchor::Start)
        } else {
            (Point::new(center.x - radius - inset, center.y), TextAnchor::End)
        };
        out.push(Primitive::Text {
            position,
            text: pin.name.clone(),
            size: config.label_size * scale,
            color: palette.muted_text,
            anchor,
            element: Element::PinLabel {
                node: node.id.clone(),
                pin: pin.id.clone(),
            },
        });
    }
}

/// Skeleton boxes standing in for nodes while a graph is being generated.
pub fn loading_scene(viewport: &Viewport, config: &RenderConfig) -> Scene {
    let layout = &config.layout;
    let height = layout.header_height + layout.body_padding + 2.0 * layout.pin_row_height;
    let placeholders = PLACEHOLDER_COLUMNS
        .iter()
        .map(|&x| Primitive::Rect {
            rect: viewport.rect_to_screen(Rect::new(x, 0.0, layout.node_width, height)),
            fill: config.palette.placeholder,
            stroke: None,
            corner_radius: config.corner_radius * viewport.scale(),
            element: Element::Placeholder,
        })
        .collect();
    Scene::Loading { placeholders }
}
