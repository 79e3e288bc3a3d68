use super::Point;
use serde::{Deserialize, Serialize};

/// Fraction of the horizontal span used as the control point offset.
pub const CURVE_TENSION: f32 = 0.5;
/// Lower bound on the control point offset, in graph units.
pub const MIN_CONTROL_OFFSET: f32 = 40.0;

/// A cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicBezier {
    pub fn point_at(&self, t: f32) -> Point {
        let u = 1.0 - t;
        let uu = u * u;
        let tt = t * t;
        self.start * (uu * u)
            + self.control1 * (3.0 * uu * t)
            + self.control2 * (3.0 * u * tt)
            + self.end * (tt * t)
    }

    /// `segments + 1` evenly spaced points along the curve, ends included.
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f32 / segments as f32))
            .collect()
    }

    /// Applies a point mapping to all four points.
    ///
    /// Exact for affine maps, which is how graph-space curves reach the screen.
    pub fn map(&self, f: impl Fn(Point) -> Point) -> CubicBezier {
        CubicBezier {
            start: f(self.start),
            control1: f(self.control1),
            control2: f(self.control2),
            end: f(self.end),
        }
    }
}

/// The left-to-right "S" curve between an output anchor and an input anchor.
///
/// Control points leave `from` to the right and enter `to` from the left, so a
/// backwards link (`to.x < from.x`) loops around instead of folding onto itself.
pub fn connection_path(from: Point, to: Point) -> CubicBezier {
    let offset = ((to.x - from.x).abs() * CURVE_TENSION).max(MIN_CONTROL_OFFSET);
    CubicBezier {
        start: from,
        control1: Point::new(from.x + offset, from.y),
        control2: Point::new(to.x - offset, to.y),
        end: to,
    }
}
