use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Delete,
}

/// A normalized input event, in screen coordinates of the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp {
        x: f32,
        y: f32,
        #[serde(default)]
        button: PointerButton,
    },
    Wheel {
        x: f32,
        y: f32,
        delta: f32,
    },
    Key {
        key: Key,
    },
}

impl InputEvent {
    pub fn down(x: f32, y: f32) -> Self {
        InputEvent::PointerDown {
            x,
            y,
            button: PointerButton::Primary,
        }
    }

    pub fn down_with(x: f32, y: f32, button: PointerButton) -> Self {
        InputEvent::PointerDown { x, y, button }
    }

    pub fn move_to(x: f32, y: f32) -> Self {
        InputEvent::PointerMove { x, y }
    }

    pub fn up(x: f32, y: f32) -> Self {
        InputEvent::PointerUp {
            x,
            y,
            button: PointerButton::Primary,
        }
    }

    pub fn wheel(x: f32, y: f32, delta: f32) -> Self {
        InputEvent::Wheel { x, y, delta }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::Key { key }
    }

    /// Screen position of pointer events.
    pub fn position(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown { x, y, .. }
            | InputEvent::PointerMove { x, y }
            | InputEvent::PointerUp { x, y, .. }
            | InputEvent::Wheel { x, y, .. } => Some(Point::new(x, y)),
            InputEvent::Key { .. } => None,
        }
    }
}
