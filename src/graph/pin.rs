use super::ids::PinId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a pin carries execution order or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    #[serde(alias = "Control", alias = "exec")]
    Control,
    #[serde(alias = "Data")]
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinDirection {
    #[serde(alias = "In", alias = "input")]
    In,
    #[serde(alias = "Out", alias = "output")]
    Out,
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinDirection::In => write!(f, "in"),
            PinDirection::Out => write!(f, "out"),
        }
    }
}

/// The value type carried by a pin.
///
/// Hosts may use any type tag. The well-known ones get their own variant so
/// styling code can match exhaustively; anything else is kept verbatim in
/// `Custom` and rendered with the fallback style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Exec,
    Boolean,
    Integer,
    Float,
    String,
    Vector,
    Object,
    Custom(String),
}

impl DataType {
    /// Maps a raw type tag onto a known type, case-insensitively.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "exec" | "execution" => DataType::Exec,
            "boolean" | "bool" => DataType::Boolean,
            "integer" | "int" | "i32" | "i64" => DataType::Integer,
            "float" | "double" | "number" | "f32" | "f64" => DataType::Float,
            "string" | "text" | "str" => DataType::String,
            "vector" | "vector3" | "vec3" => DataType::Vector,
            "object" => DataType::Object,
            _ => DataType::Custom(tag.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DataType::Exec => "Exec",
            DataType::Boolean => "Boolean",
            DataType::Integer => "Integer",
            DataType::Float => "Float",
            DataType::String => "String",
            DataType::Vector => "Vector",
            DataType::Object => "Object",
            DataType::Custom(raw) => raw,
        }
    }
}

impl From<String> for DataType {
    fn from(tag: String) -> Self {
        DataType::from_tag(&tag)
    }
}

impl From<&str> for DataType {
    fn from(tag: &str) -> Self {
        DataType::from_tag(tag)
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        data_type.as_str().to_string()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed attachment point on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Pin {
    pub id: PinId,
    /// Display label, usually empty for control-flow pins.
    pub name: String,
    pub kind: PinKind,
    pub direction: PinDirection,
    pub data_type: DataType,
}

impl Pin {
    pub fn new(
        id: impl Into<PinId>,
        name: impl Into<String>,
        kind: PinKind,
        direction: PinDirection,
        data_type: DataType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            direction,
            data_type,
        }
    }

    pub fn exec_in(id: impl Into<PinId>) -> Self {
        Self::new(id, "", PinKind::Control, PinDirection::In, DataType::Exec)
    }

    pub fn exec_out(id: impl Into<PinId>) -> Self {
        Self::new(id, "", PinKind::Control, PinDirection::Out, DataType::Exec)
    }

    pub fn data_in(id: impl Into<PinId>, name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(id, name, PinKind::Data, PinDirection::In, data_type)
    }

    pub fn data_out(id: impl Into<PinId>, name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(id, name, PinKind::Data, PinDirection::Out, data_type)
    }

    pub fn is_input(&self) -> bool {
        self.direction == PinDirection::In
    }
}
