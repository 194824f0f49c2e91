use std::fmt;

use serde::{Deserialize, Serialize};

/// How a kind's two corners are turned into an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outline {
    /// Straight segment between the two corners
    Segment,
    /// Axis-aligned box spanned by the corners
    Box,
    /// Ellipse inscribed in the box spanned by the corners
    Oval,
}

/// The five drawable shape variants, in type-id order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    Rectangle,
    Square,
    Ellipse,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Line,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Ellipse,
        ShapeKind::Circle,
    ];

    /// Type tag used by the text format
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Circle => "circle",
        }
    }

    pub fn index(self) -> usize {
        match self {
            ShapeKind::Line => 0,
            ShapeKind::Rectangle => 1,
            ShapeKind::Square => 2,
            ShapeKind::Ellipse => 3,
            ShapeKind::Circle => 4,
        }
    }

    pub(crate) fn outline(self) -> Outline {
        match self {
            ShapeKind::Line => Outline::Segment,
            ShapeKind::Rectangle | ShapeKind::Square => Outline::Box,
            ShapeKind::Ellipse | ShapeKind::Circle => Outline::Oval,
        }
    }

    /// Corners describe a bounding box rather than endpoints
    pub fn is_boxed(self) -> bool {
        self.outline() != Outline::Segment
    }

    /// Square and circle: the bounding box must stay square
    pub fn is_special(self) -> bool {
        matches!(self, ShapeKind::Square | ShapeKind::Circle)
    }

    pub fn is_closed(self) -> bool {
        self.is_boxed()
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
