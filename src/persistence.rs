//! Flat text format: one shape per line.
//!
//! ```text
//! <type>: <x1>,<y1> <x2>,<y2> <lineStyle>,<lineWidth>,<lineColour>,<backgroundFill>,<backgroundColour>
//! ```
use std::fs;
use std::path::Path;

use log::info;

use crate::document::Document;
use crate::error::{FormatError, LoadError};
use crate::shape::{Shape, ShapeRegistry};

/// Type tag separator
const SEPARATOR: &str = ": ";

/// Encodes the document bottom to top, each line ending in `\n`.
pub fn encode_document(document: &Document) -> String {
    encode_shapes(document.shapes())
}

pub fn encode_shapes<'a>(shapes: impl IntoIterator<Item = &'a Shape>) -> String {
    let mut out = String::new();
    for shape in shapes {
        out.push_str(&shape.serialize());
        out.push('\n');
    }
    out
}

/// Parses one non-blank line of the format
pub fn decode_line(registry: &ShapeRegistry, line: &str) -> Result<Shape, FormatError> {
    let (type_name, body) = line
        .split_once(SEPARATOR)
        .ok_or(FormatError::MissingSeparator)?;
    registry.parse(type_name.trim(), body)
}

/// Decodes a whole document.
///
/// Either every non-blank line parses and all shapes come back in file order, or
/// the first bad line is reported with its 1-based number and nothing is returned.
pub fn decode_document(registry: &ShapeRegistry, text: &str) -> Result<Vec<Shape>, LoadError> {
    let mut shapes = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let shape = decode_line(registry, line).map_err(|source| LoadError::Format {
            line: number + 1,
            source,
        })?;
        shapes.push(shape);
    }
    Ok(shapes)
}

pub fn decode_bytes(registry: &ShapeRegistry, bytes: &[u8]) -> Result<Vec<Shape>, LoadError> {
    let text = std::str::from_utf8(bytes)?;
    decode_document(registry, text)
}

pub fn save_to_path(document: &Document, path: &Path) -> std::io::Result<()> {
    fs::write(path, encode_document(document))?;
    info!("saved {} shapes to {}", document.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::shape::ShapeKind;
    use crate::style::ShapeStyle;

    #[test]
    fn test_encode_in_paint_order() {
        let registry = ShapeRegistry::new();
        let mut doc = Document::new();
        doc.append(registry.create_kind(
            ShapeKind::Line,
            Point::new(0, 0),
            Point::new(10, 10),
            ShapeStyle::default(),
        ));
        doc.append(registry.create_kind(
            ShapeKind::Square,
            Point::new(1, 1),
            Point::new(3, 3),
            ShapeStyle::default(),
        ));

        let text = encode_document(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("line: 0,0 10,10 "));
        assert!(lines[1].starts_with("square: 1,1 3,3 "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_decode_skips_blank_lines_and_carriage_returns() {
        let registry = ShapeRegistry::new();
        let text = "line: 0,0 10,10 0,1,0,0,16777215\r\n\r\n   \nellipse: 0,0 4,2 2,3,255,1,0\n";
        let shapes = decode_document(&registry, text).unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[1].kind(), ShapeKind::Ellipse);
        assert_eq!(shapes[1].style().line_width, 3);
    }

    #[test]
    fn test_decode_reports_line_number() {
        let registry = ShapeRegistry::new();
        let text = "line: 0,0 1,1 0,1,0,0,0\n\nline 0,0 1,1 0,1,0,0,0\n";
        match decode_document(&registry, text) {
            Err(LoadError::Format { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, FormatError::MissingSeparator);
            }
            other => panic!("expected a format error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_bad_geometry() {
        let registry = ShapeRegistry::new();
        let result = decode_document(&registry, "circle: 0,0 10,4 0,1,0,1,0\n");
        assert!(matches!(
            result,
            Err(LoadError::Format {
                line: 1,
                source: FormatError::Geometry { .. }
            })
        ));
    }

    #[test]
    fn test_decode_bytes_rejects_invalid_utf8() {
        let registry = ShapeRegistry::new();
        assert!(matches!(
            decode_bytes(&registry, &[0xff, 0xfe, b'\n']),
            Err(LoadError::Encoding(_))
        ));
    }
}
