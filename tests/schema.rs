//! Tests for the wire schema, the conversion trait and the built-in templates.
mod common;
use zumen::schema::{TEMPLATE_NAMES, template_document};
use zumen::prelude::*;

const GENERATED: &str = r#"{
    "nodes": [
        {
            "id": "n1",
            "name": "EventBeginPlay",
            "type": "Event",
            "position": { "x": 0, "y": 0 },
            "pins": [
                { "id": "p1", "name": "", "kind": "control", "direction": "out", "dataType": "exec" }
            ]
        },
        {
            "id": "n2",
            "name": "PrintString",
            "type": "Function",
            "position": { "x": 300, "y": 0 },
            "codeSnippet": "print(\"hi\")",
            "pins": [
                { "id": "p2", "name": "", "kind": "control", "direction": "in", "dataType": "exec" },
                { "id": "p3", "name": "In String", "kind": "data", "direction": "in", "dataType": "string" }
            ]
        },
        {
            "id": "n3",
            "name": "Literal",
            "type": "literal",
            "position": { "x": 0, "y": 150 },
            "properties": { "value": "hi" },
            "pins": [
                { "id": "p4", "name": "Value", "kind": "data", "direction": "out", "dataType": "Quaternion" }
            ]
        }
    ],
    "connections": [
        { "fromPinId": "p1", "toPinId": "p2" },
        { "fromPinId": "p4", "toPinId": "p3" }
    ],
    "variables": [ { "name": "Greeting", "type": "String" } ]
}"#;

#[test]
fn test_parse_generated_document() {
    let graph = Graph::from_json(GENERATED).unwrap();

    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.connections().len(), 2);
    assert_eq!(graph.variable("greeting").unwrap().var_type, DataType::String);

    let print = graph.node("n2").unwrap();
    assert_eq!(print.kind, NodeKind::Function);
    assert_eq!(print.position, Point::new(300.0, 0.0));
    assert_eq!(print.code_snippet.as_deref(), Some("print(\"hi\")"));

    let (_, pin) = graph.pin("p4").unwrap();
    assert_eq!(pin.data_type, DataType::Custom("Quaternion".to_string()));
    assert_eq!(pin.kind, PinKind::Data);
    assert_eq!(graph.node("n3").unwrap().literal_value().as_deref(), Some("hi"));
}

#[test]
fn test_document_round_trip_preserves_graph() {
    let graph = Graph::from_json(GENERATED).unwrap();
    let json = graph.to_json().unwrap();
    let again = Graph::from_json(&json).unwrap();

    assert_eq!(graph.to_document(), again.to_document());
    assert_eq!(again.nodes(), graph.nodes());
}

#[test]
fn test_serialized_field_names_are_camel_case() {
    let graph = Graph::from_json(GENERATED).unwrap();
    let value = serde_json::to_value(graph.to_document()).unwrap();

    assert_eq!(value["connections"][0]["fromPinId"], "p1");
    assert_eq!(value["nodes"][1]["codeSnippet"], "print(\"hi\")");
    assert_eq!(value["nodes"][1]["type"], "function");
    assert_eq!(value["nodes"][2]["pins"][0]["dataType"], "Quaternion");
    assert!(value["nodes"][0].get("properties").is_none());
}

#[test]
fn test_dangling_connections_survive_parsing() {
    let json = r#"{ "nodes": [], "connections": [ { "fromPinId": "a", "toPinId": "b" } ] }"#;
    let graph = Graph::from_json(json).unwrap();
    assert_eq!(graph.connections().len(), 1);
    assert!(graph.is_empty());
}

#[test]
fn test_self_loop_edges_are_dropped_while_parsing() {
    let json = r#"{ "nodes": [
        { "id": "n", "name": "Branch", "type": "flow_control", "position": {"x": 0, "y": 0},
          "pins": [
            { "id": "in", "kind": "control", "direction": "in", "dataType": "exec" },
            { "id": "out", "kind": "control", "direction": "out", "dataType": "exec" }
          ] }
    ], "connections": [
        { "fromPinId": "out", "toPinId": "out" },
        { "fromPinId": "out", "toPinId": "in" }
    ] }"#;

    let graph = Graph::from_json(json).unwrap();
    assert_eq!(graph.nodes().len(), 1);
    assert_eq!(graph.connections(), &[Connection::new("out", "in")]);

    let mut editor = Editor::new();
    let id = editor.begin_request();
    assert!(editor.resolve_json(id, Ok(json.to_string())));
    assert!(matches!(editor.generation(), Generation::Idle));
    assert_eq!(editor.graph().nodes().len(), 1);
}

#[test]
fn test_inconsistent_documents_are_rejected() {
    let duplicate_pin = r#"{ "nodes": [
        { "id": "a", "name": "A", "type": "event", "position": {"x": 0, "y": 0},
          "pins": [ { "id": "p", "kind": "control", "direction": "out", "dataType": "exec" } ] },
        { "id": "b", "name": "B", "type": "event", "position": {"x": 0, "y": 0},
          "pins": [ { "id": "p", "kind": "control", "direction": "out", "dataType": "exec" } ] }
    ] }"#;
    assert!(matches!(
        Graph::from_json(duplicate_pin),
        Err(SchemaError::Graph(GraphError::DuplicateId(id))) if id == "p"
    ));

    assert!(matches!(
        Graph::from_json("{ not json"),
        Err(SchemaError::JsonParseError(_))
    ));
}

struct Chain(Vec<&'static str>);

impl IntoGraph for Chain {
    fn into_graph(self) -> Result<Graph, SchemaError> {
        if self.0.is_empty() {
            return Err(SchemaError::ConversionError("empty chain".to_string()));
        }
        let mut graph = Graph::new();
        for (i, name) in self.0.iter().enumerate() {
            let node = Node::builder(format!("n{i}"), *name, NodeKind::Function)
                .at(i as f32 * 300.0, 0.0)
                .pin(Pin::exec_in(format!("n{i}_in")))
                .pin(Pin::exec_out(format!("n{i}_out")))
                .build();
            graph.add_node(node)?;
            if i > 0 {
                graph.add_connection(format!("n{}_out", i - 1), format!("n{i}_in"))?;
            }
        }
        Ok(graph)
    }
}

#[test]
fn test_custom_formats_convert_through_into_graph() {
    let graph = Chain(vec!["A", "B", "C"]).into_graph().unwrap();
    assert_eq!(graph.nodes().len(), 3);
    assert_eq!(graph.connections().len(), 2);

    assert!(matches!(
        Chain(vec![]).into_graph(),
        Err(SchemaError::ConversionError(_))
    ));
}

#[test]
fn test_every_template_builds() {
    for name in TEMPLATE_NAMES {
        let graph = template(name).unwrap();
        assert!(!graph.is_empty(), "{name} is empty");
        let document = template_document(name).unwrap();
        assert_eq!(Graph::from_document(document).unwrap().nodes(), graph.nodes());
    }
    assert!(matches!(
        template("nope"),
        Err(SchemaError::UnknownTemplate(_))
    ));
}

#[test]
fn test_player_health_template_removes_cleanly() {
    let mut graph = template("player_health").unwrap();
    let removed = graph.remove_variable("PlayerHealth").unwrap();
    assert_eq!(removed.len(), 2);
    assert!(graph.connections().iter().all(|c| graph.pin(c.from.as_str()).is_some()));
}
