//! Turns raw pointer coordinates into canonical shape geometry.

use super::Point;
use crate::shape::ShapeKind;

/// Which way the pointer travelled from the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quadrant {
    DownRight,
    DownLeft,
    UpLeft,
    UpRight,
}

impl Quadrant {
    fn of(anchor: Point, current: Point) -> Self {
        match (anchor.x <= current.x, anchor.y <= current.y) {
            (true, true) => Self::DownRight,
            (false, true) => Self::DownLeft,
            (false, false) => Self::UpLeft,
            (true, false) => Self::UpRight,
        }
    }
}

/// Snaps `current` onto the 45° diagonal through `anchor`.
///
/// The result keeps the quadrant `current` is in and sits at Chebyshev distance
/// `max(|dx|, |dy|)` from the anchor, so the box spanned by the two points is square.
///
/// Near the edge of the i32 plane the square shrinks until its far corner fits.
pub fn diagonal_standing(anchor: Point, current: Point) -> Point {
    let span = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs();
    let delta = span(anchor.x, current.x).max(span(anchor.y, current.y));

    let (sign_x, sign_y) = match Quadrant::of(anchor, current) {
        Quadrant::DownRight => (1, 1),
        Quadrant::DownLeft => (-1, 1),
        Quadrant::UpLeft => (-1, -1),
        Quadrant::UpRight => (1, -1),
    };
    let delta = delta
        .min(room(anchor.x, sign_x))
        .min(room(anchor.y, sign_y));

    Point::new(
        offset(anchor.x, sign_x * delta),
        offset(anchor.y, sign_y * delta),
    )
}

/// Distance from `from` to the i32 bound in the direction of `sign`
fn room(from: i32, sign: i64) -> i64 {
    if sign > 0 {
        i64::from(i32::MAX) - i64::from(from)
    } else {
        i64::from(from) - i64::from(i32::MIN)
    }
}

fn offset(from: i32, by: i64) -> i32 {
    (i64::from(from) + by).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Returns the `(corner1, corner2)` pair a shape of `kind` is built from.
///
/// Lines keep their literal endpoints. Every other kind gets `(top_left, bottom_right)`
/// with `top_left <= bottom_right`, whichever direction the pointer was dragged.
pub fn fixing_position(kind: ShapeKind, anchor: Point, current: Point) -> (Point, Point) {
    if !kind.is_boxed() {
        return (anchor, current);
    }

    match Quadrant::of(anchor, current) {
        Quadrant::DownRight => (anchor, current),
        Quadrant::UpLeft => (current, anchor),
        Quadrant::UpRight => (
            Point::new(anchor.x, current.y),
            Point::new(current.x, anchor.y),
        ),
        Quadrant::DownLeft => (
            Point::new(current.x, anchor.y),
            Point::new(anchor.x, current.y),
        ),
    }
}
