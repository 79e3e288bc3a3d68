//! Pan/zoom camera over graph space.
//!
//! The viewport is the affine map `screen = graph * scale + offset`. It is
//! presentation state of one view and never part of the graph itself.

use crate::geometry::{Point, Rect, Size};
use serde::Serialize;

pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 2.0;
/// Scale change per unit of wheel delta.
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub offset: Point,
    scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// A viewport with the given offset and a scale clamped to `[MIN_SCALE, MAX_SCALE]`.
    pub fn new(offset_x: f32, offset_y: f32, scale: f32) -> Self {
        Self {
            offset: Point::new(offset_x, offset_y),
            scale: clamp_scale(scale),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen_space(&self, graph_point: Point) -> Point {
        graph_point * self.scale + self.offset
    }

    pub fn to_graph_space(&self, screen_point: Point) -> Point {
        (screen_point - self.offset) * (1.0 / self.scale)
    }

    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        let origin = self.to_screen_space(rect.origin);
        Rect::new(
            origin.x,
            origin.y,
            rect.width() * self.scale,
            rect.height() * self.scale,
        )
    }

    /// Shifts the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.offset = self.offset + Point::new(dx, dy);
    }

    /// Zooms around `screen_point` with the default sensitivity.
    pub fn zoom_at(&mut self, screen_point: Point, wheel_delta: f32) {
        self.zoom_at_with(screen_point, wheel_delta, DEFAULT_ZOOM_SENSITIVITY);
    }

    /// Zooms so the graph point under `screen_point` stays under it.
    ///
    /// Positive deltas (wheel rolled towards the user) zoom out.
    pub fn zoom_at_with(&mut self, screen_point: Point, wheel_delta: f32, sensitivity: f32) {
        let anchor = self.to_graph_space(screen_point);
        let new_scale = clamp_scale(self.scale * (1.0 - wheel_delta * sensitivity));
        self.offset = screen_point - anchor * new_scale;
        self.scale = new_scale;
    }

    /// Scales and centers `bounds` inside a container, never enlarging past 1:1.
    ///
    /// Degenerate bounds (zero width or height) leave the viewport unchanged.
    pub fn fit_to_content(&mut self, bounds: Rect, container: Size, padding: f32) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return;
        }
        let fit_x = (container.width - 2.0 * padding) / bounds.width();
        let fit_y = (container.height - 2.0 * padding) / bounds.height();
        let scale = clamp_scale(fit_x.min(fit_y).min(1.0));

        self.offset = Point::new(
            (container.width - bounds.width() * scale) / 2.0 - bounds.left() * scale,
            (container.height - bounds.height() * scale) / 2.0 - bounds.top() * scale,
        );
        self.scale = scale;
    }
}

fn clamp_scale(scale: f32) -> f32 {
    if scale.is_nan() {
        return MIN_SCALE;
    }
    scale.clamp(MIN_SCALE, MAX_SCALE)
}
