use std::f32::consts::TAU;

use egui::{Pos2, Shape as Primitive, Stroke};

use super::{Outline, Shape};
use crate::style::BackgroundFill;

// Segments used to approximate ellipse outlines
const OVAL_SEGMENTS: usize = 64;

impl Shape {
    /// Converts the shape into egui paint primitives, fill first and outline on top.
    pub fn to_primitives(&self) -> Vec<Primitive> {
        let outline = self.outline_points();
        let closed = self.kind.is_closed();
        let mut primitives = Vec::with_capacity(2);

        if closed && self.style.background_fill == BackgroundFill::Solid {
            primitives.push(Primitive::convex_polygon(
                outline.clone(),
                self.style.background_colour.to_color32(),
                Stroke::NONE,
            ));
        }

        let stroke = self.stroke();
        match self.style.line_style.pattern() {
            None if closed => primitives.push(Primitive::closed_line(outline, stroke)),
            None => primitives.push(Primitive::line(outline, stroke)),
            Some((dashes, gaps)) => {
                let mut path = outline;
                if closed {
                    if let Some(&first) = path.first() {
                        path.push(first);
                    }
                }
                let dashes: Vec<f32> = dashes.iter().map(|d| d * stroke.width).collect();
                let gaps: Vec<f32> = gaps.iter().map(|g| g * stroke.width).collect();
                primitives.extend(Primitive::dashed_line_with_offset(
                    &path, stroke, &dashes, &gaps, 0.0,
                ));
            }
        }

        primitives
    }

    fn stroke(&self) -> Stroke {
        // A zero width still draws a one pixel hairline
        let width = self.style.line_width.max(1) as f32;
        Stroke::new(width, self.style.line_colour.to_color32())
    }

    fn outline_points(&self) -> Vec<Pos2> {
        let a = self.corner1.to_pos2();
        let b = self.corner2.to_pos2();

        match self.kind.outline() {
            Outline::Segment => vec![a, b],
            Outline::Box => vec![
                a,
                Pos2::new(b.x, a.y),
                b,
                Pos2::new(a.x, b.y),
            ],
            Outline::Oval => {
                let center = Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
                let rx = (b.x - a.x).abs() / 2.0;
                let ry = (b.y - a.y).abs() / 2.0;
                (0..OVAL_SEGMENTS)
                    .map(|i| {
                        let t = TAU * i as f32 / OVAL_SEGMENTS as f32;
                        Pos2::new(center.x + rx * t.cos(), center.y + ry * t.sin())
                    })
                    .collect()
            }
        }
    }
}
