use thiserror::Error;

/// A serialized shape body that could not be turned back into a shape.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The type tag before `": "` names no registered shape
    #[error("unknown shape type `{0}`")]
    UnknownType(String),

    /// The line has no `": "` between type tag and body
    #[error("missing `: ` between shape type and body")]
    MissingSeparator,

    /// A whitespace- or comma-separated group has the wrong number of fields
    #[error("expected {expected} {what} fields, found {found}")]
    FieldCount {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A field that should be an integer is not one
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// A numeric field is outside the range its attribute accepts
    #[error("{field} value {value} is out of range")]
    InvalidValue { field: &'static str, value: i64 },

    /// Corners that break the variant's bounding box rules
    #[error("{kind} corners {detail}")]
    Geometry { kind: &'static str, detail: String },
}

/// Failure while reading a whole document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: {source}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },

    #[error("document is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Misuse of the document's removal and reordering operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DocumentError {
    #[error("the document has no shapes")]
    Empty,

    #[error("shape index {index} is out of range for {len} shapes")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Recoverable conditions raised by the edit session.
///
/// These never escape [`crate::state::EditSession::execute`]; they are turned into
/// status notifications there.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("there is nothing on the canvas")]
    EmptyDocument,

    #[error("no shape is selected")]
    NoSelection,

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("could not open document: {0}")]
    Load(#[from] LoadError),

    #[error("could not save document: {0}")]
    Save(#[source] std::io::Error),
}

/// Errors raised while loading or storing [`crate::config::EditorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
