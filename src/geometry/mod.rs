use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

pub mod normalize;

pub use normalize::{diagonal_standing, fixing_position};

/// Integer canvas coordinate.
///
/// Points are compared component-wise: `a <= b` holds only when both `a.x <= b.x`
/// and `a.y <= b.y`, so two points in "crossed" positions are unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }

    /// Shifts the point, stopping at the edge of the i32 plane
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// True when the point lies inside the closed box `[top_left, bottom_right]`
    pub fn within(self, top_left: Point, bottom_right: Point) -> bool {
        top_left <= self && self <= bottom_right
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x as f32, self.y as f32)
    }

    /// Rounds an egui position onto the integer canvas grid
    pub fn from_pos2(pos: egui::Pos2) -> Self {
        Self {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
        }
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.x.cmp(&other.x), self.y.cmp(&other.y)) {
            (Ordering::Equal, Ordering::Equal) => Some(Ordering::Equal),
            (Ordering::Less | Ordering::Equal, Ordering::Less | Ordering::Equal) => {
                Some(Ordering::Less)
            }
            (Ordering::Greater | Ordering::Equal, Ordering::Greater | Ordering::Equal) => {
                Some(Ordering::Greater)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = FormatError;

    /// Parses the `x,y` form written by `Display`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [x, y] = fields.as_slice() else {
            return Err(FormatError::FieldCount {
                what: "point",
                expected: 2,
                found: fields.len(),
            });
        };
        Ok(Self {
            x: parse_int(x)?,
            y: parse_int(y)?,
        })
    }
}

pub(crate) fn parse_int<T: FromStr>(token: &str) -> Result<T, FormatError> {
    token
        .trim()
        .parse()
        .map_err(|_| FormatError::NotANumber(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn test_component_wise_order() {
        let a = Point::new(0, 0);
        let b = Point::new(5, 5);
        let crossed = Point::new(10, -1);

        assert!(a <= b);
        assert!(b >= a);
        assert!(a <= a);
        assert!(!(a <= crossed));
        assert!(!(crossed <= a));
        assert_eq!(a.partial_cmp(&crossed), None);
    }

    #[test]
    fn test_within_closed_box() {
        let tl = Point::new(0, 0);
        let br = Point::new(10, 10);

        assert!(Point::new(0, 10).within(tl, br));
        assert!(Point::new(5, 5).within(tl, br));
        assert!(!Point::new(11, 5).within(tl, br));
        assert!(!Point::new(5, -1).within(tl, br));
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
    }

    #[test]
    fn test_parse_point() {
        assert_eq!("12,-7".parse::<Point>(), Ok(Point::new(12, -7)));
        assert!(matches!(
            "12".parse::<Point>(),
            Err(FormatError::FieldCount { expected: 2, found: 1, .. })
        ));
        assert_eq!(
            "1,y".parse::<Point>(),
            Err(FormatError::NotANumber("y".to_owned()))
        );
    }
}
