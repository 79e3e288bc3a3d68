//! Styling passed explicitly into the render projection.
//!
//! Every value has a documented default, and a config can be loaded from JSON
//! where any omitted field falls back to that default.

use crate::error::ConfigError;
use crate::geometry::LayoutMetrics;
use crate::graph::{DataType, NodeKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// An sRGB color with alpha, written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;
    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Color::from_hex(&hex)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub node_body: Color,
    pub node_border: Color,
    pub text: Color,
    pub muted_text: Color,
    pub selection: Color,
    pub exec_wire: Color,
    pub placeholder: Color,
    pub event_header: Color,
    pub function_header: Color,
    pub flow_control_header: Color,
    pub variable_header: Color,
    pub literal_header: Color,
    /// Header color for node kinds without a dedicated entry.
    pub fallback_header: Color,
    /// Pin colors keyed by lowercase data type tag.
    pub pin_colors: AHashMap<String, Color>,
    /// Pin color for data types missing from `pin_colors`.
    pub fallback_pin: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let pin_colors = [
            ("exec", Color::rgb(0xFF, 0xFF, 0xFF)),
            ("boolean", Color::rgb(0x8C, 0x1F, 0x1F)),
            ("integer", Color::rgb(0x1F, 0xE0, 0xB0)),
            ("float", Color::rgb(0x9B, 0xE0, 0x4A)),
            ("string", Color::rgb(0xE0, 0x4A, 0xD2)),
            ("vector", Color::rgb(0xF5, 0xC5, 0x2A)),
            ("object", Color::rgb(0x2A, 0x8C, 0xF5)),
        ]
        .into_iter()
        .map(|(tag, color)| (tag.to_string(), color))
        .collect();

        Self {
            background: Color::rgb(0x1E, 0x1E, 0x1E),
            node_body: Color::rgba(0x2B, 0x2B, 0x2B, 0xF0),
            node_border: Color::rgb(0x11, 0x11, 0x11),
            text: Color::rgb(0xF0, 0xF0, 0xF0),
            muted_text: Color::rgb(0xB4, 0xB4, 0xB4),
            selection: Color::rgb(0xF5, 0xA6, 0x23),
            exec_wire: Color::rgb(0xFF, 0xFF, 0xFF),
            placeholder: Color::rgba(0x3A, 0x3A, 0x3A, 0xA0),
            event_header: Color::rgb(0x8B, 0x1A, 0x1A),
            function_header: Color::rgb(0x1F, 0x4E, 0x8C),
            flow_control_header: Color::rgb(0x5A, 0x5A, 0x5A),
            variable_header: Color::rgb(0x2E, 0x7D, 0x32),
            literal_header: Color::rgb(0x6A, 0x1B, 0x9A),
            fallback_header: Color::rgb(0x9B, 0x9B, 0x9B),
            pin_colors,
            fallback_pin: Color::rgb(0xC8, 0xC8, 0xC8),
        }
    }
}

impl Palette {
    pub fn header_color(&self, kind: &NodeKind) -> Color {
        match kind {
            NodeKind::Event => self.event_header,
            NodeKind::Function => self.function_header,
            NodeKind::FlowControl => self.flow_control_header,
            NodeKind::VariableGet | NodeKind::VariableSet => self.variable_header,
            NodeKind::Literal => self.literal_header,
            NodeKind::Custom(_) => self.fallback_header,
        }
    }

    pub fn pin_color(&self, data_type: &DataType) -> Color {
        self.pin_colors
            .get(&data_type.as_str().to_ascii_lowercase())
            .copied()
            .unwrap_or(self.fallback_pin)
    }
}

/// Everything the render projection needs besides the graph and the viewport.
///
/// Sizes are in graph units and scale with the viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Palette,
    pub layout: LayoutMetrics,
    pub pin_radius: f32,
    pub title_size: f32,
    pub label_size: f32,
    pub corner_radius: f32,
    pub wire_width: f32,
    pub border_width: f32,
    pub selection_width: f32,
    /// Horizontal inset of titles and pin labels.
    pub text_inset: f32,
    /// Shown instead of a scene when the graph has no nodes.
    pub empty_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            layout: LayoutMetrics::default(),
            pin_radius: 5.0,
            title_size: 14.0,
            label_size: 12.0,
            corner_radius: 6.0,
            wire_width: 2.0,
            border_width: 1.0,
            selection_width: 2.0,
            text_inset: 10.0,
            empty_message: "Nothing to display yet".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}
