//! Common fixtures for building graphs in tests.
use zumen::prelude::*;

/// `EventBeginPlay@(0,0)` with exec out `P1`, wired into `PrintString@(300,0)`
/// which has exec in `P2`, exec out `P3` and data in `P4`.
#[allow(dead_code)]
pub fn begin_play_print() -> Graph {
    let begin = Node::builder("begin", "EventBeginPlay", NodeKind::Event)
        .at(0.0, 0.0)
        .pin(Pin::exec_out("P1"))
        .build();
    let print = Node::builder("print", "PrintString", NodeKind::Function)
        .at(300.0, 0.0)
        .pin(Pin::exec_in("P2"))
        .pin(Pin::exec_out("P3"))
        .pin(Pin::data_in("P4", "In String", DataType::String))
        .build();
    Graph::from_parts(
        [begin, print],
        [Connection::new("P1", "P2")],
        Vec::<Variable>::new(),
    )
    .expect("fixture graph is valid")
}

/// A graph with a `PlayerHealth` variable, one getter and one setter for it,
/// and two unrelated nodes that are connected to each other and to both.
///
/// Unrelated edges: `begin_exec -> print_exec_in`, `literal_value -> print_text`.
#[allow(dead_code)]
pub fn player_health_graph() -> Graph {
    let nodes = vec![
        Node::builder("begin", "EventBeginPlay", NodeKind::Event)
            .at(0.0, 0.0)
            .pin(Pin::exec_out("begin_exec"))
            .build(),
        Node::builder("get", "Get PlayerHealth", NodeKind::VariableGet)
            .at(0.0, 200.0)
            .pin(Pin::data_out("get_value", "PlayerHealth", DataType::Integer))
            .build(),
        Node::builder("set", "Set PlayerHealth", NodeKind::VariableSet)
            .at(300.0, 0.0)
            .pin(Pin::exec_in("set_exec_in"))
            .pin(Pin::data_in("set_value", "PlayerHealth", DataType::Integer))
            .pin(Pin::exec_out("set_exec_out"))
            .build(),
        Node::builder("literal", "Literal String", NodeKind::Literal)
            .at(300.0, 200.0)
            .pin(Pin::data_out("literal_value", "Value", DataType::String))
            .property("value", "Hello")
            .build(),
        Node::builder("print", "PrintString", NodeKind::Function)
            .at(600.0, 0.0)
            .pin(Pin::exec_in("print_exec_in"))
            .pin(Pin::data_in("print_text", "In String", DataType::String))
            .build(),
    ];
    let connections = vec![
        Connection::new("begin_exec", "set_exec_in"),
        Connection::new("get_value", "set_value"),
        Connection::new("set_exec_out", "print_exec_in"),
        Connection::new("begin_exec", "print_exec_in"),
        Connection::new("literal_value", "print_text"),
    ];
    Graph::from_parts(
        nodes,
        connections,
        [Variable::new("PlayerHealth", DataType::Integer)],
    )
    .expect("fixture graph is valid")
}

/// A bare function node with `inputs` data inputs and `outputs` data outputs.
#[allow(dead_code)]
pub fn function_node(id: &str, x: f32, y: f32, inputs: usize, outputs: usize) -> Node {
    let ins = (0..inputs).map(|i| Pin::data_in(format!("{id}_in{i}"), format!("In {i}"), DataType::Float));
    let outs =
        (0..outputs).map(|i| Pin::data_out(format!("{id}_out{i}"), format!("Out {i}"), DataType::Float));
    Node::builder(id, id, NodeKind::Function)
        .at(x, y)
        .pins(ins)
        .pins(outs)
        .build()
}

#[allow(dead_code)]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * a.abs().max(b.abs()).max(1.0)
}

#[allow(dead_code)]
pub fn assert_point_eq(actual: Point, expected: Point) {
    assert!(
        approx_eq(actual.x, expected.x) && approx_eq(actual.y, expected.y),
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
