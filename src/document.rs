use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DocumentError;
use crate::shape::Shape;

/// Stable handle to a shape while it lives in a [`Document`].
///
/// Handles stay valid across reordering; they stop resolving once the shape is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A shape together with the handle it was given when it joined the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: ShapeId,
    pub shape: Shape,
}

/// Ordered shape collection. Order is z-order: index 0 is drawn first (bottom),
/// the last entry is drawn last (top).
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<Entry>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Puts `shape` on top of everything else
    pub fn append(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId::fresh();
        self.entries.push(Entry { id, shape });
        id
    }

    pub fn remove_top(&mut self) -> Result<Entry, DocumentError> {
        self.entries.pop().ok_or(DocumentError::Empty)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Entry, DocumentError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Moves the entry at `index` to the top, keeping the others in order
    pub fn promote_to_top(&mut self, index: usize) -> Result<ShapeId, DocumentError> {
        let entry = self.remove_at(index)?;
        let id = entry.id;
        self.entries.push(entry);
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Swaps the whole content for `shapes`, bottom to top
    pub fn replace_all(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.entries.clear();
        for shape in shapes {
            self.append(shape);
        }
    }

    /// Read view in paint order, bottom to top
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &Shape> {
        self.entries.iter().map(|entry| &entry.shape)
    }

    /// Entries from the topmost down, with their indices
    pub fn iter_top_down(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries.iter().enumerate().rev()
    }

    pub fn top(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.shape)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.shape)
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        if self.entries.is_empty() {
            return Err(DocumentError::Empty);
        }
        if index >= self.entries.len() {
            return Err(DocumentError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}
