use thiserror::Error;

/// Errors raised by mutations of the graph model.
///
/// Every variant is returned before the graph is touched, so a failed call
/// always leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Identifier '{0}' is already used by another node or pin in this graph")]
    DuplicateId(String),

    #[error("Node '{0}' not found in the graph")]
    NodeNotFound(String),

    #[error("Variable name must not be empty")]
    EmptyName,

    #[error("A variable named '{0}' already exists (names are case-insensitive)")]
    DuplicateVariable(String),

    #[error("Variable '{0}' is not declared in this graph")]
    VariableNotFound(String),

    #[error("Pin '{0}' cannot be connected to itself")]
    SelfLoop(String),
}

/// Errors that can occur while turning a schema document into a graph.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Graph document is inconsistent: {0}")]
    Graph(#[from] GraphError),

    /// Raised by custom `IntoGraph` implementations for foreign formats.
    #[error("Invalid custom graph data: {0}")]
    ConversionError(String),

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
}

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse render config: {0}")]
    Parse(String),

    #[error("Invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}
