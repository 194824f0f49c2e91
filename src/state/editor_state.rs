//! The gesture state machine of the editor.
//!
//! ```text
//!              pointer down             pointer up
//!          ┌──────────────► Drawing   ───────────────┐
//!          │                                         ▼
//!   ┌──────┴─┐ pointer down            pointer up ┌──────┐
//!   │  Idle  ├──────────────► Selecting ─────────►│ Idle │
//!   └──────┬─┘                                    └──────┘
//!          │   pointer down             pointer up   ▲
//!          └──────────────► Moving    ───────────────┘
//! ```
//!
//! Which gesture a pointer-down starts depends on the armed [`Tool`]. A gesture only
//! ends on pointer-up; there is no cancel transition.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::shape::ShapeKind;

/// What a pointer-down on the canvas will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tool {
    /// Draw a new shape of the given kind
    Draw(ShapeKind),
    /// Drag a rectangle to pick the topmost shape inside it
    Select,
    /// Drag the active shape around
    Move,
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Draw(ShapeKind::Line)
    }
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Draw(ShapeKind::Line),
        Tool::Draw(ShapeKind::Rectangle),
        Tool::Draw(ShapeKind::Square),
        Tool::Draw(ShapeKind::Ellipse),
        Tool::Draw(ShapeKind::Circle),
        Tool::Select,
        Tool::Move,
    ];

    /// Drawing with this tool keeps the bounding box square
    pub fn is_special(self) -> bool {
        match self {
            Tool::Draw(kind) => kind.is_special(),
            Tool::Select | Tool::Move => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Draw(ShapeKind::Line) => "Line",
            Tool::Draw(ShapeKind::Rectangle) => "Rectangle",
            Tool::Draw(ShapeKind::Square) => "Square",
            Tool::Draw(ShapeKind::Ellipse) => "Ellipse",
            Tool::Draw(ShapeKind::Circle) => "Circle",
            Tool::Select => "Select",
            Tool::Move => "Move",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The primary mode of the edit session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Rubber-banding a new shape of `kind`
    Drawing {
        kind: ShapeKind,
        anchor: Point,
        current: Point,
    },
    /// Rubber-banding a selection rectangle
    Selecting { anchor: Point, current: Point },
    /// Dragging; `last` is the previous pointer position
    Moving { last: Point, dx: i32, dy: i32 },
}

impl GestureState {
    /// State entered by a pointer-down at `at` with `tool` armed
    pub fn begin(tool: Tool, at: Point) -> Self {
        match tool {
            Tool::Draw(kind) => GestureState::Drawing {
                kind,
                anchor: at,
                current: at,
            },
            Tool::Select => GestureState::Selecting {
                anchor: at,
                current: at,
            },
            Tool::Move => GestureState::Moving {
                last: at,
                dx: 0,
                dy: 0,
            },
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}
