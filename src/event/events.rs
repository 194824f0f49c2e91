use std::path::PathBuf;

use crate::document::ShapeId;
use crate::geometry::Point;
use crate::shape::ShapeKind;
use crate::state::Tool;
use crate::style::ShapeStyle;

/// Notifications broadcast by the edit session after each handled input.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ShapeCreated {
        id: ShapeId,
        kind: ShapeKind,
        top_left: Point,
        bottom_right: Point,
    },
    ShapeSelected {
        id: ShapeId,
        kind: ShapeKind,
    },
    ShapeMoved {
        id: ShapeId,
        kind: ShapeKind,
        dx: i32,
        dy: i32,
    },
    ShapeDeleted {
        kind: ShapeKind,
    },
    ShapeCopied {
        id: ShapeId,
        kind: ShapeKind,
    },
    ShapeCut {
        kind: ShapeKind,
    },
    ShapePasted {
        id: ShapeId,
        kind: ShapeKind,
    },
    DocumentCleared,
    DocumentLoaded {
        shapes: usize,
    },
    DocumentSaved {
        path: PathBuf,
        shapes: usize,
    },
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    StyleChanged {
        style: ShapeStyle,
    },
    /// A command was declined by the user or could not be carried out
    Rejected {
        reason: String,
    },
}

impl EditorEvent {
    pub fn rejected(reason: impl Into<String>) -> Self {
        EditorEvent::Rejected {
            reason: reason.into(),
        }
    }

    /// One-line text for the status bar
    pub fn status_text(&self) -> String {
        match self {
            EditorEvent::ShapeCreated {
                kind,
                top_left,
                bottom_right,
                ..
            } => format!("Created {kind} ({top_left}) - ({bottom_right})"),
            EditorEvent::ShapeSelected { kind, .. } => format!("Selected {kind}"),
            EditorEvent::ShapeMoved { kind, dx, dy, .. } => {
                format!("Moved {kind} by {dx},{dy}")
            }
            EditorEvent::ShapeDeleted { kind } => format!("Deleted {kind}"),
            EditorEvent::ShapeCopied { kind, .. } => format!("Copied {kind}"),
            EditorEvent::ShapeCut { kind } => format!("Cut {kind}"),
            EditorEvent::ShapePasted { kind, .. } => format!("Pasted {kind}"),
            EditorEvent::DocumentCleared => "New drawing".to_owned(),
            EditorEvent::DocumentLoaded { shapes } => format!("Opened {shapes} shape(s)"),
            EditorEvent::DocumentSaved { path, shapes } => {
                format!("Saved {shapes} shape(s) to {}", path.display())
            }
            EditorEvent::ToolChanged { new, .. } => format!("Tool: {new}"),
            EditorEvent::StyleChanged { style } => format!("Style: {style}"),
            EditorEvent::Rejected { reason } => reason.clone(),
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, EditorEvent::Rejected { .. })
    }
}
