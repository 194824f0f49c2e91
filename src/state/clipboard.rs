use crate::document::{Document, ShapeId};
use crate::shape::Shape;

/// The shape targeted by copy, cut, paste and move.
///
/// An attached reference is only a handle; it never owns the document entry and
/// may stop resolving once that entry is removed. A detached reference owns the
/// shape that was cut out of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveRef {
    Attached(ShapeId),
    Detached(Shape),
}

impl ActiveRef {
    /// The referenced shape, if it can still be reached
    pub fn resolve<'a>(&'a self, document: &'a Document) -> Option<&'a Shape> {
        match self {
            ActiveRef::Attached(id) => document.get(*id),
            ActiveRef::Detached(shape) => Some(shape),
        }
    }

    pub fn attached_id(&self) -> Option<ShapeId> {
        match self {
            ActiveRef::Attached(id) => Some(*id),
            ActiveRef::Detached(_) => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, ActiveRef::Detached(_))
    }
}
