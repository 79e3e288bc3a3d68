//! Property-based invariant tests for layout, graph mutation, camera and input.
//!
//! 1. Pin offsets are a pure function of the node.
//! 2. A node placed outside the current bounds strictly enlarges them.
//! 3. Removing a node leaves no connection touching its pins.
//! 4. Zooming keeps the graph point under the cursor fixed.
//! 5. Zoom never leaves the scale range.
//! 6. Press/release on a node is a click below the drag threshold and a drag from it on.

mod common;
use proptest::prelude::*;
use zumen::geometry::{compute_bounds, pin_offset};
use zumen::interaction::Interaction;
use zumen::prelude::*;
use zumen::viewport::{MAX_SCALE, MIN_SCALE};

// ── Helpers ─────────────────────────────────────────────────────────────

fn node_strategy() -> impl Strategy<Value = Node> {
    (
        -2000.0f32..2000.0,
        -2000.0f32..2000.0,
        0usize..6,
        0usize..6,
    )
        .prop_map(|(x, y, ins, outs)| common::function_node("n", x, y, ins, outs))
}

/// A chain-shaped graph of `count` nodes with random extra edges.
fn graph_strategy() -> impl Strategy<Value = Graph> {
    (2usize..8).prop_flat_map(|count| {
        proptest::collection::vec((0..count, 0..count), 1..20).prop_map(move |edges| {
            let mut graph = Graph::new();
            for i in 0..count {
                let id = format!("n{i}");
                graph
                    .add_node(common::function_node(&id, i as f32 * 300.0, 0.0, 1, 1))
                    .unwrap();
            }
            for (from, to) in edges {
                // Distinct pins by construction: an output never equals an input.
                graph
                    .add_connection(format!("n{from}_out0"), format!("n{to}_in0"))
                    .unwrap();
            }
            graph
        })
    })
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1–2. Layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pin_offset_is_deterministic(node in node_strategy()) {
        let layout = LayoutMetrics::default();
        for pin in &node.pins {
            let first = pin_offset(&node, pin.id.as_str(), &layout);
            let second = pin_offset(&node, pin.id.as_str(), &layout);
            prop_assert!(first.is_some());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn bounds_grow_with_outside_node(
        nodes in proptest::collection::vec(node_strategy(), 1..6),
        gap in 1.0f32..500.0,
        dy in -500.0f32..500.0,
    ) {
        let layout = LayoutMetrics::default();
        let before = compute_bounds(&nodes, &layout).unwrap();

        let outside = common::function_node("o", before.right() + gap, before.top() + dy, 1, 0);
        let mut all = nodes.clone();
        all.push(outside);
        let after = compute_bounds(&all, &layout).unwrap();

        prop_assert!(after.right() > before.right());
        prop_assert!(after.width() > before.width());
        prop_assert!(after.left() <= before.left() && after.top() <= before.top());
        prop_assert!(after.bottom() >= before.bottom());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Graph mutation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_node_leaves_no_incident_connections(
        graph in graph_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut graph = graph;
        let connected: Vec<NodeId> = graph
            .nodes()
            .iter()
            .filter(|n| graph.connections().iter().any(|c| n.has_pin(&c.from) || n.has_pin(&c.to)))
            .map(|n| n.id.clone())
            .collect();
        prop_assume!(!connected.is_empty());
        let target = pick.get(&connected).clone();

        let removed = graph.remove_node(target.as_str()).unwrap();
        prop_assert!(!removed.connections.is_empty());
        for connection in graph.connections() {
            prop_assert!(!removed.node.has_pin(&connection.from));
            prop_assert!(!removed.node.has_pin(&connection.to));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4–5. Camera
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zoom_keeps_anchor_fixed(
        ox in -1000.0f32..1000.0,
        oy in -1000.0f32..1000.0,
        scale in MIN_SCALE..MAX_SCALE,
        px in 0.0f32..2000.0,
        py in 0.0f32..2000.0,
        delta in -1000.0f32..1000.0,
    ) {
        let mut viewport = Viewport::new(ox, oy, scale);
        let cursor = Point::new(px, py);
        let before = viewport.to_graph_space(cursor);

        viewport.zoom_at(cursor, delta);
        let after = viewport.to_graph_space(cursor);

        prop_assert!(close(before.x, after.x), "x drifted: {} -> {}", before.x, after.x);
        prop_assert!(close(before.y, after.y), "y drifted: {} -> {}", before.y, after.y);
    }

    #[test]
    fn zoom_stays_within_limits(
        deltas in proptest::collection::vec(1.0f32..2000.0, 1..40),
        zoom_in in any::<bool>(),
    ) {
        let mut viewport = Viewport::default();
        for delta in deltas {
            let delta = if zoom_in { -delta } else { delta };
            viewport.zoom_at(Point::new(300.0, 200.0), delta);
            prop_assert!(viewport.scale() <= MAX_SCALE);
            prop_assert!(viewport.scale() >= MIN_SCALE);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Click versus drag
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn press_release_is_click_or_drag(
        dx in -40i32..40,
        dy in -40i32..40,
        scale in 0.5f32..2.0,
    ) {
        let mut graph = common::begin_play_print();
        let mut viewport = Viewport::new(0.0, 0.0, scale);
        let mut interaction = Interaction::default();
        let layout = LayoutMetrics::default();

        // Near the centre of PrintString's body, on whole pixels.
        let centre = viewport.to_screen_space(Point::new(410.0, 52.0));
        let start = Point::new(centre.x.round(), centre.y.round());
        let end = Point::new(start.x + dx as f32, start.y + dy as f32);

        interaction.handle(InputEvent::down(start.x, start.y), &mut graph, &mut viewport, &layout);
        interaction.handle(InputEvent::up(end.x, end.y), &mut graph, &mut viewport, &layout);

        let position = graph.node("print").unwrap().position;
        if dx.abs().max(dy.abs()) < 5 {
            prop_assert_eq!(
                interaction.state(),
                &InteractionState::NodeSelected(NodeId::new("print"))
            );
            prop_assert_eq!(position, Point::new(300.0, 0.0));
        } else {
            prop_assert_eq!(interaction.state(), &InteractionState::Idle);
            prop_assert!(close(position.x, 300.0 + dx as f32 / scale));
            prop_assert!(close(position.y, dy as f32 / scale));
        }
    }
}
