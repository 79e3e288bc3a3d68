//! Pointer and keyboard handling for one graph view.
//!
//! [`Interaction`] is a small state machine. Every input event is resolved
//! against the current [`InteractionState`] into at most a handful of semantic
//! operations (pan, zoom, drag a node, select, open the node picker) which are
//! applied to the graph and viewport immediately and reported back as
//! [`EditorEvent`]s.

use crate::geometry::{LayoutMetrics, Point};
use crate::graph::{Graph, NodeId};
use crate::viewport::{DEFAULT_ZOOM_SENSITIVITY, Viewport};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

mod detail;
mod input;

pub use detail::{ConnectionSummary, DetailView, PinSummary};
pub use hit_test::node_at;
pub use input::{InputEvent, Key, PointerButton};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Panning {
        /// Last pointer position in screen space.
        last: Point,
        button: PointerButton,
    },
    DraggingNode {
        node: NodeId,
        button: PointerButton,
        /// Node position when the drag started, graph space.
        origin: Point,
        /// Pointer position when the drag started, screen space.
        anchor: Point,
        /// Largest per-axis screen displacement seen during this drag.
        dragged_distance: f32,
    },
    NodeSelected(NodeId),
}

impl InteractionState {
    pub fn selected(&self) -> Option<&NodeId> {
        match self {
            InteractionState::NodeSelected(id) => Some(id),
            _ => None,
        }
    }

    /// True while a pointer gesture (pan or drag) is in progress.
    pub fn is_gesture(&self) -> bool {
        self.gesture_button().is_some()
    }

    /// The button holding the current gesture. Only its release ends the gesture.
    pub fn gesture_button(&self) -> Option<PointerButton> {
        match self {
            InteractionState::Panning { button, .. }
            | InteractionState::DraggingNode { button, .. } => Some(*button),
            InteractionState::Idle | InteractionState::NodeSelected(_) => None,
        }
    }
}

/// Tunables for the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Screen pixels a node must travel before a press counts as a drag rather than a click.
    pub drag_threshold: f32,
    pub zoom_sensitivity: f32,
    /// Margin kept around the content by fit-to-content.
    pub fit_padding: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            fit_padding: 50.0,
        }
    }
}

/// Something observable that happened as the result of an input event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorEvent {
    SelectionChanged {
        selected: Option<NodeId>,
    },
    NodeMoved {
        node: NodeId,
        position: Point,
    },
    NodeRemoved {
        node: NodeId,
    },
    ViewportChanged {
        offset: Point,
        scale: f32,
    },
    /// The host should show its node creation menu; new nodes go at `graph_point`.
    OpenPicker {
        graph_point: Point,
        screen_point: Point,
    },
}

impl EditorEvent {
    fn viewport(viewport: &Viewport) -> Self {
        EditorEvent::ViewportChanged {
            offset: viewport.offset,
            scale: viewport.scale(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    state: InteractionState,
    config: InteractionConfig,
}

impl Interaction {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            config,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.state.selected()
    }

    /// Drops any gesture or selection without emitting events.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Selects `node` programmatically. Returns false if it does not exist.
    pub fn select(&mut self, graph: &Graph, node: &str) -> bool {
        match graph.node(node) {
            Some(node) => {
                self.state = InteractionState::NodeSelected(node.id.clone());
                true
            }
            None => false,
        }
    }

    /// Leaves any state that refers to a node no longer in `graph`.
    ///
    /// Returns true if the selection was dropped.
    pub fn forget_missing(&mut self, graph: &Graph) -> bool {
        let node = match &self.state {
            InteractionState::NodeSelected(id) | InteractionState::DraggingNode { node: id, .. } => id,
            _ => return false,
        };
        if graph.node(node.as_str()).is_some() {
            return false;
        }
        let was_selected = matches!(self.state, InteractionState::NodeSelected(_));
        self.state = InteractionState::Idle;
        was_selected
    }

    /// Applies one input event and reports what it caused.
    pub fn handle(
        &mut self,
        event: InputEvent,
        graph: &mut Graph,
        viewport: &mut Viewport,
        layout: &LayoutMetrics,
    ) -> Vec<EditorEvent> {
        trace!(?event, state = ?self.state, "input");
        let mut events = Vec::new();
        match event {
            InputEvent::PointerDown { x, y, button } => {
                self.pointer_down(Point::new(x, y), button, graph, viewport, layout, &mut events)
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(Point::new(x, y), graph, viewport, &mut events)
            }
            InputEvent::PointerUp { x, y, button } => match self.state.gesture_button() {
                Some(active) if active != button => {
                    debug!(?button, ?active, "ignoring release of a button not holding the gesture");
                }
                _ => self.pointer_up(Point::new(x, y), graph, viewport, &mut events),
            },
            InputEvent::Wheel { x, y, delta } => {
                if !matches!(self.state, InteractionState::DraggingNode { .. }) {
                    viewport.zoom_at_with(Point::new(x, y), delta, self.config.zoom_sensitivity);
                    events.push(EditorEvent::viewport(viewport));
                }
            }
            InputEvent::Key { key } => self.key(key, graph, &mut events),
        }
        events
    }

    fn pointer_down(
        &mut self,
        screen: Point,
        button: PointerButton,
        graph: &Graph,
        viewport: &Viewport,
        layout: &LayoutMetrics,
        events: &mut Vec<EditorEvent>,
    ) {
        let previous = std::mem::take(&mut self.state);
        if previous.is_gesture() {
            debug!(state = ?previous, "gesture abandoned by a new press");
        }
        let had_selection = previous.selected().is_some();
        let graph_point = viewport.to_graph_space(screen);
        let hit = node_at(graph, graph_point, layout);

        match button {
            PointerButton::Primary => {
                self.state = match hit {
                    Some(node) => InteractionState::DraggingNode {
                        node: node.id.clone(),
                        button,
                        origin: node.position,
                        anchor: screen,
                        dragged_distance: 0.0,
                    },
                    None => InteractionState::Panning {
                        last: screen,
                        button,
                    },
                };
            }
            PointerButton::Middle => {
                self.state = InteractionState::Panning {
                    last: screen,
                    button,
                };
            }
            PointerButton::Secondary if hit.is_none() => {
                events.push(EditorEvent::OpenPicker {
                    graph_point,
                    screen_point: screen,
                });
            }
            PointerButton::Secondary => {
                if let InteractionState::NodeSelected(id) = previous {
                    self.state = InteractionState::NodeSelected(id);
                    return;
                }
            }
        }

        if had_selection {
            events.insert(0, EditorEvent::SelectionChanged { selected: None });
        }
    }

    fn pointer_move(
        &mut self,
        screen: Point,
        graph: &mut Graph,
        viewport: &mut Viewport,
        events: &mut Vec<EditorEvent>,
    ) {
        match &mut self.state {
            InteractionState::Panning { last, .. } => {
                let delta = screen - *last;
                *last = screen;
                if delta != Point::ZERO {
                    viewport.pan_by(delta.x, delta.y);
                    events.push(EditorEvent::viewport(viewport));
                }
            }
            InteractionState::DraggingNode {
                node,
                origin,
                anchor,
                dragged_distance,
                ..
            } => {
                let moved = screen - *anchor;
                *dragged_distance = dragged_distance.max(moved.max_axis());
                let position = *origin + moved * (1.0 / viewport.scale());
                match graph.move_node(node.as_str(), position.x, position.y) {
                    Ok(()) => events.push(EditorEvent::NodeMoved {
                        node: node.clone(),
                        position,
                    }),
                    Err(err) => {
                        warn!(%err, "dragged node vanished");
                        self.state = InteractionState::Idle;
                    }
                }
            }
            InteractionState::Idle | InteractionState::NodeSelected(_) => {}
        }
    }

    fn pointer_up(
        &mut self,
        screen: Point,
        graph: &mut Graph,
        viewport: &mut Viewport,
        events: &mut Vec<EditorEvent>,
    ) {
        self.pointer_move(screen, graph, viewport, events);

        match std::mem::take(&mut self.state) {
            InteractionState::DraggingNode {
                node,
                origin,
                dragged_distance,
                ..
            } => {
                if dragged_distance < self.config.drag_threshold {
                    let moved_back = graph
                        .node(node.as_str())
                        .is_some_and(|n| n.position != origin);
                    if moved_back && graph.move_node(node.as_str(), origin.x, origin.y).is_ok() {
                        events.push(EditorEvent::NodeMoved {
                            node: node.clone(),
                            position: origin,
                        });
                    }
                    debug!(node = %node, "node selected");
                    events.push(EditorEvent::SelectionChanged {
                        selected: Some(node.clone()),
                    });
                    self.state = InteractionState::NodeSelected(node);
                } else {
                    debug!(node = %node, distance = dragged_distance, "drag finished");
                }
            }
            // Releasing outside a gesture leaves the selection alone.
            InteractionState::NodeSelected(id) => self.state = InteractionState::NodeSelected(id),
            InteractionState::Panning { .. } | InteractionState::Idle => {}
        }
    }

    fn key(&mut self, key: Key, graph: &mut Graph, events: &mut Vec<EditorEvent>) {
        let InteractionState::NodeSelected(selected) = &self.state else {
            return;
        };
        let selected = selected.clone();

        if key == Key::Delete {
            match graph.remove_node(selected.as_str()) {
                Ok(removed) => events.push(EditorEvent::NodeRemoved {
                    node: removed.node.id,
                }),
                Err(err) => warn!(%err, "selected node already gone"),
            }
        }
        self.state = InteractionState::Idle;
        events.push(EditorEvent::SelectionChanged { selected: None });
    }
}
