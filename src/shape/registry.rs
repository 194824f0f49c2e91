use std::collections::HashMap;

use log::debug;

use super::{Shape, ShapeKind};
use crate::error::FormatError;
use crate::geometry::Point;
use crate::style::ShapeStyle;

/// Creates, parses and clones shapes by type id or type name.
///
/// Holds one prototype per variant. Build it once at start-up and hand it to
/// whatever needs to mint shapes; it carries no mutable state.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    prototypes: Vec<ShapeKind>,
    by_name: HashMap<&'static str, ShapeKind>,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeRegistry {
    pub fn new() -> Self {
        let prototypes = ShapeKind::ALL.to_vec();
        let by_name = prototypes.iter().map(|kind| (kind.name(), *kind)).collect();
        Self {
            prototypes,
            by_name,
        }
    }

    pub fn kind_at(&self, index: usize) -> Option<ShapeKind> {
        self.prototypes.get(index).copied()
    }

    pub fn kind_named(&self, name: &str) -> Option<ShapeKind> {
        self.by_name.get(name).copied()
    }

    /// Builds a shape of the variant with type id `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a registered type id. Callers only pass ids taken
    /// from [`ShapeKind::index`] or checked with [`Self::kind_at`].
    pub fn create(&self, index: usize, p1: Point, p2: Point, style: ShapeStyle) -> Shape {
        self.create_kind(self.prototypes[index], p1, p2, style)
    }

    pub fn create_kind(&self, kind: ShapeKind, p1: Point, p2: Point, style: ShapeStyle) -> Shape {
        Shape::new(kind, p1, p2, style)
    }

    /// Parses the body that follows `"<type>: "` in a document line.
    ///
    /// The body is `<x1>,<y1> <x2>,<y2> <style>`, separated by whitespace.
    pub fn parse(&self, type_name: &str, body: &str) -> Result<Shape, FormatError> {
        let kind = self
            .kind_named(type_name)
            .ok_or_else(|| FormatError::UnknownType(type_name.to_owned()))?;

        let tokens: Vec<&str> = body.split_whitespace().collect();
        let [p1, p2, style] = tokens.as_slice() else {
            return Err(FormatError::FieldCount {
                what: "shape",
                expected: 3,
                found: tokens.len(),
            });
        };

        let shape = Shape::new(kind, p1.parse()?, p2.parse()?, style.parse()?);
        shape.validate()?;
        debug!("parsed {kind} {} {}", shape.corner1(), shape.corner2());
        Ok(shape)
    }

    /// Independent copy of `shape`; editing either one never affects the other
    pub fn clone_shape(&self, shape: &Shape) -> Shape {
        *shape
    }
}
