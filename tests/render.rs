//! Tests for the render projection and its configuration.
mod common;
use common::assert_point_eq;
use zumen::render::{Element, MarkerShape, Palette, TextAnchor, loading_scene};
use zumen::prelude::*;

fn body_of(scene: &Scene, node: &str) -> Rect {
    scene
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Rect {
                rect,
                element: Element::NodeBody { node: id },
                ..
            } if id == node => Some(*rect),
            _ => None,
        })
        .expect("node body present")
}

fn marker_of<'a>(scene: &'a Scene, pin: &str) -> (&'a MarkerShape, bool) {
    scene
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Marker {
                shape,
                filled,
                element: Element::Pin { pin: id, .. },
                ..
            } if id == pin => Some((shape, *filled)),
            _ => None,
        })
        .expect("pin marker present")
}

#[test]
fn test_single_connection_between_pin_anchors() {
    let graph = common::begin_play_print();
    let viewport = Viewport::new(10.0, 20.0, 0.5);
    let scene = project(&graph, &viewport, &RenderConfig::default(), None);

    let paths: Vec<_> = scene.paths().collect();
    assert_eq!(paths.len(), 1);
    let Primitive::Path { curve, element, .. } = paths[0] else {
        panic!("expected a path");
    };
    assert_eq!(element, &Element::Connection { from: "P1".into(), to: "P2".into() });

    // P1 sits on the right edge of EventBeginPlay, P2 on the left edge of PrintString.
    assert_point_eq(curve.start, viewport.to_screen_space(Point::new(220.0, 50.0)));
    assert_point_eq(curve.end, viewport.to_screen_space(Point::new(300.0, 50.0)));

    let body = body_of(&scene, "print");
    assert_eq!(body.left(), 300.0 * 0.5 + 10.0);
    assert_eq!(body.top(), 20.0);
    assert_eq!(body.width(), 110.0);
}

#[test]
fn test_connections_are_emitted_before_nodes() {
    let graph = common::begin_play_print();
    let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);
    assert!(matches!(scene.primitives()[0], Primitive::Path { .. }));
    assert_eq!(scene.paths().count(), 1);
}

#[test]
fn test_dangling_connection_is_skipped() {
    let mut graph = common::begin_play_print();
    graph.add_connection("P3", "missing").unwrap();
    graph.add_connection("ghost", "P4").unwrap();

    let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);
    assert_eq!(scene.paths().count(), 1);
    assert!(!marker_of(&scene, "P4").1);
}

#[test]
fn test_pin_markers_reflect_kind_and_connection() {
    let graph = common::begin_play_print();
    let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);

    assert_eq!(marker_of(&scene, "P1"), (&MarkerShape::Arrow, true));
    assert_eq!(marker_of(&scene, "P2"), (&MarkerShape::Arrow, true));
    assert_eq!(marker_of(&scene, "P3"), (&MarkerShape::Arrow, false));
    assert_eq!(marker_of(&scene, "P4"), (&MarkerShape::Circle, false));
}

#[test]
fn test_pin_labels_sit_inside_the_node() {
    let graph = common::begin_play_print();
    let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);

    let labels: Vec<_> = scene
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Text {
                text,
                anchor,
                position,
                element: Element::PinLabel { .. },
                ..
            } => Some((text.as_str(), *anchor, *position)),
            _ => None,
        })
        .collect();

    // Control pins carry no label.
    assert_eq!(labels.len(), 1);
    let (text, anchor, position) = labels[0];
    assert_eq!(text, "In String");
    assert_eq!(anchor, TextAnchor::Start);
    assert!(position.x > 300.0);
}

#[test]
fn test_selected_node_is_outlined() {
    let graph = common::begin_play_print();
    let config = RenderConfig::default();
    let scene = project(&graph, &Viewport::default(), &config, Some("print"));

    let strokes: Vec<_> = scene
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Rect {
                stroke: Some(stroke),
                element: Element::NodeBody { node },
                ..
            } => Some((node.as_str(), stroke.color)),
            _ => None,
        })
        .collect();
    assert_eq!(
        strokes,
        vec![
            ("begin", config.palette.node_border),
            ("print", config.palette.selection)
        ]
    );
}

#[test]
fn test_node_strokes_scale_with_zoom() {
    let graph = common::begin_play_print();
    let config = RenderConfig::default();
    let widths = |viewport: &Viewport| -> Vec<f32> {
        project(&graph, viewport, &config, Some("print"))
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Rect {
                    stroke: Some(stroke),
                    element: Element::NodeBody { .. },
                    ..
                } => Some(stroke.width),
                _ => None,
            })
            .collect()
    };

    assert_eq!(widths(&Viewport::new(0.0, 0.0, 1.0)), vec![1.0, 2.0]);
    assert_eq!(widths(&Viewport::new(0.0, 0.0, 2.0)), vec![2.0, 4.0]);
    // Strokes never get thinner than one pixel.
    assert_eq!(widths(&Viewport::new(0.0, 0.0, 0.25)), vec![1.0, 1.0]);
}

#[test]
fn test_header_colors_follow_node_kind() {
    let graph = common::begin_play_print();
    let config = RenderConfig::default();
    let scene = project(&graph, &Viewport::default(), &config, None);

    let header = scene
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Rect {
                fill,
                element: Element::NodeHeader { node },
                ..
            } if node == "begin" => Some(*fill),
            _ => None,
        })
        .unwrap();
    assert_eq!(header, config.palette.event_header);
    assert_eq!(
        config.palette.header_color(&NodeKind::Custom("Macro".into())),
        config.palette.fallback_header
    );
    assert_eq!(
        config.palette.pin_color(&DataType::Custom("Rotator".into())),
        config.palette.fallback_pin
    );
}

#[test]
fn test_empty_graph_projects_empty_scene() {
    let scene = project(&Graph::new(), &Viewport::default(), &RenderConfig::default(), None);
    assert_eq!(
        scene,
        Scene::Empty {
            message: "Nothing to display yet".to_string()
        }
    );
    assert!(scene.primitives().is_empty());
}

#[test]
fn test_loading_scene_has_placeholders() {
    let scene = loading_scene(&Viewport::new(0.0, 0.0, 0.5), &RenderConfig::default());
    let Scene::Loading { placeholders } = &scene else {
        panic!("expected a loading scene");
    };
    assert_eq!(placeholders.len(), 3);
    assert!(placeholders.iter().all(|p| p.element() == &Element::Placeholder));
}

#[test]
fn test_projection_is_pure() {
    let graph = common::player_health_graph();
    let viewport = Viewport::new(-40.0, 12.0, 1.3);
    let config = RenderConfig::default();
    assert_eq!(
        project(&graph, &viewport, &config, Some("set")),
        project(&graph, &viewport, &config, Some("set"))
    );
}

#[test]
fn test_scene_serializes_with_tags() {
    let graph = common::begin_play_print();
    let scene = project(&graph, &Viewport::default(), &RenderConfig::default(), None);
    let json = serde_json::to_value(&scene).unwrap();

    assert_eq!(json["state"], "graph");
    assert_eq!(json["background"], "#1E1E1E");
    assert_eq!(json["primitives"][0]["type"], "path");
    assert_eq!(json["primitives"][0]["element"]["kind"], "connection");
}

#[test]
fn test_render_config_from_json_keeps_defaults() {
    let config = RenderConfig::from_json(
        r##"{ "wire_width": 3.5, "palette": { "selection": "#00FF0080" }, "layout": { "node_width": 180 } }"##,
    )
    .unwrap();

    assert_eq!(config.wire_width, 3.5);
    assert_eq!(config.palette.selection, Color::rgba(0, 255, 0, 128));
    assert_eq!(config.palette.background, Palette::default().background);
    assert_eq!(config.layout.node_width, 180.0);
    assert_eq!(config.layout.header_height, 36.0);
    assert_eq!(config.pin_radius, 5.0);
}

#[test]
fn test_invalid_colors_are_rejected() {
    assert!(matches!(Color::from_hex("#12345"), Err(ConfigError::InvalidColor(_))));
    assert!(Color::from_hex("#GG0000").is_err());
    assert!(RenderConfig::from_json(r#"{ "palette": { "text": "red" } }"#).is_err());
    assert_eq!(Color::from_hex("#0a0B0c").unwrap().to_string(), "#0A0B0C");
}

#[test]
fn test_render_config_from_missing_file() {
    let err = RenderConfig::from_file("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
