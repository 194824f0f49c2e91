use std::fmt;

use egui::Painter;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::geometry::Point;
use crate::style::ShapeStyle;

mod draw;
mod kind;
pub mod registry;

pub(crate) use kind::Outline;
pub use kind::ShapeKind;
pub use registry::ShapeRegistry;

/// A drawn primitive: two defining corners plus the style it was drawn with.
///
/// For [`ShapeKind::Line`] the corners are the endpoints. For every other kind they
/// are the top-left and bottom-right of the bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    kind: ShapeKind,
    corner1: Point,
    corner2: Point,
    style: ShapeStyle,
}

impl Shape {
    pub(crate) fn new(kind: ShapeKind, corner1: Point, corner2: Point, style: ShapeStyle) -> Self {
        Self {
            kind,
            corner1,
            corner2,
            style,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn corner1(&self) -> Point {
        self.corner1
    }

    pub fn corner2(&self) -> Point {
        self.corner2
    }

    pub fn corners(&self) -> (Point, Point) {
        (self.corner1, self.corner2)
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    /// Translates both corners by the same delta.
    ///
    /// A delta that would push a corner off the i32 plane is cut short on that axis,
    /// so the shape keeps its size. Returns the delta actually applied.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        let dx = rigid_step(dx, self.corner1.x, self.corner2.x);
        let dy = rigid_step(dy, self.corner1.y, self.corner2.y);
        self.corner1 = self.corner1.translate(dx, dy);
        self.corner2 = self.corner2.translate(dx, dy);
        (dx, dy)
    }

    pub fn set_top_left(&mut self, point: Point) {
        self.corner1 = point;
    }

    pub fn set_bottom_right(&mut self, point: Point) {
        self.corner2 = point;
    }

    /// True when both defining points lie in the closed box `[top_left, bottom_right]`
    pub fn contains(&self, top_left: Point, bottom_right: Point) -> bool {
        self.corner1.within(top_left, bottom_right) && self.corner2.within(top_left, bottom_right)
    }

    /// Checks the corner rules of the shape's kind.
    ///
    /// Boxed kinds need `corner1 <= corner2`; square and circle also need equal sides.
    pub fn validate(&self) -> Result<(), FormatError> {
        if !self.kind.is_boxed() {
            return Ok(());
        }

        let ordered = self.corner1 <= self.corner2;
        if !ordered {
            return Err(FormatError::Geometry {
                kind: self.kind.name(),
                detail: format!("{} and {} are not top-left/bottom-right", self.corner1, self.corner2),
            });
        }

        // Corners may span the whole i32 range
        let width = i64::from(self.corner2.x) - i64::from(self.corner1.x);
        let height = i64::from(self.corner2.y) - i64::from(self.corner1.y);
        if self.kind.is_special() && width != height {
            return Err(FormatError::Geometry {
                kind: self.kind.name(),
                detail: format!("span {width}x{height}, which is not square"),
            });
        }

        Ok(())
    }

    /// One line of the document format, without the trailing newline
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn draw(&self, painter: &Painter) {
        painter.extend(self.to_primitives());
    }
}

/// Clamps `step` so that both `a + step` and `b + step` fit in an i32
fn rigid_step(step: i32, a: i32, b: i32) -> i32 {
    let lowest = i64::from(i32::MIN) - i64::from(a.min(b));
    let highest = i64::from(i32::MAX) - i64::from(a.max(b));
    // lowest <= 0 <= highest, so the clamped value lies between 0 and `step`
    i64::from(step).clamp(lowest, highest) as i32
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.kind.name(),
            self.corner1,
            self.corner2,
            self.style
        )
    }
}
