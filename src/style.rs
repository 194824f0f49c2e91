use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::geometry::parse_int;

/// Outline dash pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
}

impl LineStyle {
    pub const ALL: [LineStyle; 5] = [
        LineStyle::Solid,
        LineStyle::Dash,
        LineStyle::Dot,
        LineStyle::DashDot,
        LineStyle::DashDotDot,
    ];

    pub fn code(self) -> u8 {
        match self {
            LineStyle::Solid => 0,
            LineStyle::Dash => 1,
            LineStyle::Dot => 2,
            LineStyle::DashDot => 3,
            LineStyle::DashDotDot => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|style| i64::from(style.code()) == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            LineStyle::Solid => "Solid",
            LineStyle::Dash => "Dash",
            LineStyle::Dot => "Dot",
            LineStyle::DashDot => "Dash dot",
            LineStyle::DashDotDot => "Dash dot dot",
        }
    }

    /// Alternating dash and gap lengths, in multiples of the line width.
    /// `None` for a continuous line.
    pub fn pattern(self) -> Option<(&'static [f32], &'static [f32])> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dash => Some((&[6.0], &[3.0])),
            LineStyle::Dot => Some((&[1.0], &[2.0])),
            LineStyle::DashDot => Some((&[6.0, 1.0], &[2.0, 2.0])),
            LineStyle::DashDotDot => Some((&[6.0, 1.0, 1.0], &[2.0, 2.0, 2.0])),
        }
    }
}

/// Whether a closed shape paints its interior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackgroundFill {
    None,
    #[default]
    Solid,
}

impl BackgroundFill {
    pub fn code(self) -> u8 {
        match self {
            BackgroundFill::None => 0,
            BackgroundFill::Solid => 1,
        }
    }

    /// Reads a fill code. Besides 0/1 this takes the GDI stock brush ids older
    /// files hold: `NULL_BRUSH` (5) and `DC_BRUSH` (18).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 | 5 => Some(BackgroundFill::None),
            1 | 18 => Some(BackgroundFill::Solid),
            _ => None,
        }
    }
}

/// 8-bit RGB colour, stored on disk as `r | g << 8 | b << 16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn packed(self) -> u32 {
        u32::from(self.r) | u32::from(self.g) << 8 | u32::from(self.b) << 16
    }

    pub fn from_packed(value: i64) -> Option<Self> {
        if !(0..=0x00FF_FFFF).contains(&value) {
            return None;
        }
        Some(Self {
            r: (value & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: ((value >> 16) & 0xFF) as u8,
        })
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn from_color32(color: egui::Color32) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }
}

/// Outline and fill attributes copied into every shape when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub line_style: LineStyle,
    pub line_width: u32,
    pub line_colour: Rgb,
    pub background_fill: BackgroundFill,
    pub background_colour: Rgb,
}

impl Default for ShapeStyle {
    /// Thin black outline on a white fill
    fn default() -> Self {
        Self {
            line_style: LineStyle::Solid,
            line_width: 1,
            line_colour: Rgb::BLACK,
            background_fill: BackgroundFill::Solid,
            background_colour: Rgb::WHITE,
        }
    }
}

impl ShapeStyle {
    /// Dotted, unfilled outline used for the rubber-band selection box
    pub fn selection() -> Self {
        Self {
            line_style: LineStyle::Dot,
            line_width: 1,
            line_colour: Rgb::BLACK,
            background_fill: BackgroundFill::None,
            background_colour: Rgb::WHITE,
        }
    }
}

impl fmt::Display for ShapeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.line_style.code(),
            self.line_width,
            self.line_colour.packed(),
            self.background_fill.code(),
            self.background_colour.packed()
        )
    }
}

impl FromStr for ShapeStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let [line_style, line_width, line_colour, background_fill, background_colour] =
            fields.as_slice()
        else {
            return Err(FormatError::FieldCount {
                what: "style",
                expected: 5,
                found: fields.len(),
            });
        };

        let line_style: i64 = parse_int(line_style)?;
        let line_width: i64 = parse_int(line_width)?;
        let line_colour: i64 = parse_int(line_colour)?;
        let background_fill: i64 = parse_int(background_fill)?;
        let background_colour: i64 = parse_int(background_colour)?;

        Ok(Self {
            line_style: LineStyle::from_code(line_style).ok_or(FormatError::InvalidValue {
                field: "line style",
                value: line_style,
            })?,
            line_width: u32::try_from(line_width).map_err(|_| FormatError::InvalidValue {
                field: "line width",
                value: line_width,
            })?,
            line_colour: Rgb::from_packed(line_colour).ok_or(FormatError::InvalidValue {
                field: "line colour",
                value: line_colour,
            })?,
            background_fill: BackgroundFill::from_code(background_fill).ok_or(
                FormatError::InvalidValue {
                    field: "background brush",
                    value: background_fill,
                },
            )?,
            background_colour: Rgb::from_packed(background_colour).ok_or(
                FormatError::InvalidValue {
                    field: "background colour",
                    value: background_colour,
                },
            )?,
        })
    }
}

/// One edit to the default style, as issued from a style menu or colour picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleChange {
    LineStyle(LineStyle),
    LineWidth(u32),
    LineColour(Rgb),
    BackgroundFill(BackgroundFill),
    BackgroundColour(Rgb),
}

impl ShapeStyle {
    pub fn apply(&mut self, change: StyleChange) {
        match change {
            StyleChange::LineStyle(style) => self.line_style = style,
            StyleChange::LineWidth(width) => self.line_width = width,
            StyleChange::LineColour(colour) => self.line_colour = colour,
            StyleChange::BackgroundFill(fill) => self.background_fill = fill,
            StyleChange::BackgroundColour(colour) => self.background_colour = colour,
        }
    }
}
