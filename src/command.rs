use std::path::PathBuf;

use crate::state::Tool;
use crate::style::StyleChange;

/// Menu and toolbar actions handed to [`crate::state::EditSession::execute`].
#[derive(Clone, PartialEq)]
pub enum Command {
    /// Start an empty drawing
    New,
    /// Replace the drawing with the document encoded in these bytes
    Open(Vec<u8>),
    /// Write the drawing to this path
    Save(PathBuf),
    ChangeTool(Tool),
    /// Remove the topmost shape, after confirmation
    Delete,
    Copy,
    Cut,
    Paste,
    /// Edit the style used for shapes drawn from now on
    ChangeStyle(StyleChange),
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::New => f.write_str("New"),
            Command::Open(bytes) => f
                .debug_struct("Open")
                .field("bytes", &bytes.len())
                .finish(),
            Command::Save(path) => f.debug_tuple("Save").field(path).finish(),
            Command::ChangeTool(tool) => f.debug_tuple("ChangeTool").field(tool).finish(),
            Command::Delete => f.write_str("Delete"),
            Command::Copy => f.write_str("Copy"),
            Command::Cut => f.write_str("Cut"),
            Command::Paste => f.write_str("Paste"),
            Command::ChangeStyle(change) => f.debug_tuple("ChangeStyle").field(change).finish(),
        }
    }
}

/// An action parked until the user answers a yes/no/cancel prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    Delete,
    /// Start an empty drawing once unsaved changes are dealt with
    New,
    /// Open these bytes once unsaved changes are dealt with
    Open(Vec<u8>),
}

impl PendingAction {
    /// Question shown in the confirmation prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingAction::Delete => "Delete the topmost shape?",
            PendingAction::New | PendingAction::Open(_) => {
                "The drawing has unsaved changes. Save them before continuing?"
            }
        }
    }
}

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Cancel,
}

/// What came of executing a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The command ran to completion, successfully or with a rejection notice
    Done,
    /// The command waits for [`crate::state::EditSession::resolve`]
    NeedsConfirmation(PendingAction),
}

impl Outcome {
    pub fn pending(&self) -> Option<&PendingAction> {
        match self {
            Outcome::Done => None,
            Outcome::NeedsConfirmation(action) => Some(action),
        }
    }
}
