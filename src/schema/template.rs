//! Built-in example graphs, used as starting points and in demos.

use super::GraphDocument;
use crate::error::SchemaError;
use crate::graph::{
    Connection, DataType, Graph, Node, NodeKind, Pin, VALUE_PROPERTY, VARIABLE_PROPERTY, Variable,
};

pub const TEMPLATE_NAMES: &[&str] = &["hello_world", "player_health", "branch"];

/// Builds the named template.
pub fn template(name: &str) -> Result<Graph, SchemaError> {
    match name {
        "hello_world" => hello_world(),
        "player_health" => player_health(),
        "branch" => branch(),
        _ => Err(SchemaError::UnknownTemplate(name.to_string())),
    }
}

pub fn template_document(name: &str) -> Result<GraphDocument, SchemaError> {
    template(name).map(|graph| graph.to_document())
}

fn print_string(id: &str, x: f32, y: f32) -> Node {
    Node::builder(id, "PrintString", NodeKind::Function)
        .at(x, y)
        .pin(Pin::exec_in(format!("{id}_exec_in")))
        .pin(Pin::exec_out(format!("{id}_exec_out")))
        .pin(Pin::data_in(format!("{id}_text"), "In String", DataType::String))
        .code_snippet("print(text)")
        .build()
}

/// BeginPlay -> PrintString("Hello, World!")
fn hello_world() -> Result<Graph, SchemaError> {
    let nodes = vec![
        Node::builder("begin_play", "EventBeginPlay", NodeKind::Event)
            .at(0.0, 0.0)
            .pin(Pin::exec_out("begin_play_exec"))
            .build(),
        print_string("print", 300.0, 0.0),
        Node::builder("greeting", "Literal String", NodeKind::Literal)
            .at(0.0, 150.0)
            .pin(Pin::data_out("greeting_value", "Value", DataType::String))
            .property(VALUE_PROPERTY, "Hello, World!")
            .build(),
    ];
    let connections = vec![
        Connection::new("begin_play_exec", "print_exec_in"),
        Connection::new("greeting_value", "print_text"),
    ];
    Ok(Graph::from_parts(nodes, connections, Vec::<Variable>::new())?)
}

/// Sets a health variable on BeginPlay and prints it back.
fn player_health() -> Result<Graph, SchemaError> {
    let nodes = vec![
        Node::builder("begin_play", "EventBeginPlay", NodeKind::Event)
            .at(0.0, 0.0)
            .pin(Pin::exec_out("begin_play_exec"))
            .build(),
        Node::builder("max_health", "Literal Integer", NodeKind::Literal)
            .at(0.0, 150.0)
            .pin(Pin::data_out("max_health_value", "Value", DataType::Integer))
            .property(VALUE_PROPERTY, 100)
            .build(),
        Node::builder("set_health", "Set PlayerHealth", NodeKind::VariableSet)
            .at(300.0, 0.0)
            .pin(Pin::exec_in("set_health_exec_in"))
            .pin(Pin::exec_out("set_health_exec_out"))
            .pin(Pin::data_in("set_health_value", "PlayerHealth", DataType::Integer))
            .pin(Pin::data_out("set_health_result", "PlayerHealth", DataType::Integer))
            .property(VARIABLE_PROPERTY, "PlayerHealth")
            .build(),
        Node::builder("get_health", "Get PlayerHealth", NodeKind::VariableGet)
            .at(300.0, 200.0)
            .pin(Pin::data_out("get_health_value", "PlayerHealth", DataType::Integer))
            .property(VARIABLE_PROPERTY, "PlayerHealth")
            .build(),
        Node::builder("to_string", "ToString (Integer)", NodeKind::Function)
            .at(600.0, 200.0)
            .pin(Pin::data_in("to_string_in", "In Integer", DataType::Integer))
            .pin(Pin::data_out("to_string_out", "Return Value", DataType::String))
            .build(),
        print_string("print", 900.0, 0.0),
    ];
    let connections = vec![
        Connection::new("begin_play_exec", "set_health_exec_in"),
        Connection::new("max_health_value", "set_health_value"),
        Connection::new("set_health_exec_out", "print_exec_in"),
        Connection::new("get_health_value", "to_string_in"),
        Connection::new("to_string_out", "print_text"),
    ];
    let variables = [Variable::new("PlayerHealth", DataType::Integer)];
    Ok(Graph::from_parts(nodes, connections, variables)?)
}

/// Tick -> Branch(IsAlive) with a print on each side.
fn branch() -> Result<Graph, SchemaError> {
    let nodes = vec![
        Node::builder("tick", "EventTick", NodeKind::Event)
            .at(0.0, 0.0)
            .pin(Pin::exec_out("tick_exec"))
            .pin(Pin::data_out("tick_delta", "Delta Seconds", DataType::Float))
            .build(),
        Node::builder("is_alive", "Get IsAlive", NodeKind::VariableGet)
            .at(0.0, 180.0)
            .pin(Pin::data_out("is_alive_value", "IsAlive", DataType::Boolean))
            .property(VARIABLE_PROPERTY, "IsAlive")
            .build(),
        Node::builder("branch", "Branch", NodeKind::FlowControl)
            .at(300.0, 0.0)
            .pin(Pin::exec_in("branch_exec_in"))
            .pin(Pin::data_in("branch_condition", "Condition", DataType::Boolean))
            .pin(Pin::exec_out("branch_true"))
            .pin(Pin::exec_out("branch_false"))
            .code_snippet("if is_alive { .. } else { .. }")
            .build(),
        print_string("print_alive", 600.0, -100.0),
        print_string("print_dead", 600.0, 150.0),
    ];
    let connections = vec![
        Connection::new("tick_exec", "branch_exec_in"),
        Connection::new("is_alive_value", "branch_condition"),
        Connection::new("branch_true", "print_alive_exec_in"),
        Connection::new("branch_false", "print_dead_exec_in"),
    ];
    let variables = [Variable::new("IsAlive", DataType::Boolean)];
    Ok(Graph::from_parts(nodes, connections, variables)?)
}
