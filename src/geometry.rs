//! Integer geometry and color primitives shared by the cursor model, the options and the settings store.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both dimensions are at least one pixel, so the size can divide positions.
    pub const fn is_valid_cursor(self) -> bool {
        self.width >= 1 && self.height >= 1
    }
}

/// Narrow an intermediate `i64` coordinate back to `i32`, saturating at the ends.
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Axis-aligned rectangle stored as top-left corner plus size.
///
/// `right` and `bottom` are inclusive pixel edges, so a 32 wide rectangle at
/// `x = 0` ends at `right() == 31`. Edge and center arithmetic is done in `i64`
/// and saturates at the `i32` limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_parts(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x, top_left.y, size.width, size.height)
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    fn right_wide(self) -> i64 {
        i64::from(self.x) + i64::from(self.width) - 1
    }

    fn bottom_wide(self) -> i64 {
        i64::from(self.y) + i64::from(self.height) - 1
    }

    pub fn right(self) -> i32 {
        saturate(self.right_wide())
    }

    pub fn bottom(self) -> i32 {
        saturate(self.bottom_wide())
    }

    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn set_size(&mut self, size: Size) {
        self.width = size.width;
        self.height = size.height;
    }

    pub fn set_top_left(&mut self, top_left: Point) {
        self.x = top_left.x;
        self.y = top_left.y;
    }

    pub fn center(self) -> Point {
        Point::new(
            saturate((i64::from(self.x) + self.right_wide()).div_euclid(2)),
            saturate((i64::from(self.y) + self.bottom_wide()).div_euclid(2)),
        )
    }

    pub fn move_center(&mut self, center: Point) {
        let half_width = (i64::from(self.width) - 1).div_euclid(2);
        let half_height = (i64::from(self.height) - 1).div_euclid(2);
        self.x = saturate(i64::from(center.x) - half_width);
        self.y = saturate(i64::from(center.y) - half_height);
    }

    pub fn contains(self, point: Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        !self.is_empty()
            && x >= i64::from(self.x)
            && x <= self.right_wide()
            && y >= i64::from(self.y)
            && y <= self.bottom_wide()
    }

    /// Smallest rectangle covering both; an empty side is ignored.
    pub fn united(self, other: Rect) -> Rect {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right_wide().max(other.right_wide());
        let bottom = self.bottom_wide().max(other.bottom_wide());
        Rect::new(
            left,
            top,
            saturate(right - i64::from(left) + 1),
            saturate(bottom - i64::from(top) + 1),
        )
    }

    /// Overlap of both rectangles, or an empty rectangle when they do not meet.
    pub fn intersected(self, other: Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right_wide().min(other.right_wide());
        let bottom = self.bottom_wide().min(other.bottom_wide());
        if self.is_empty()
            || other.is_empty()
            || right < i64::from(left)
            || bottom < i64::from(top)
        {
            return Rect::default();
        }
        Rect::new(
            left,
            top,
            saturate(right - i64::from(left) + 1),
            saturate(bottom - i64::from(top) + 1),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color name: {0:?}")]
pub struct ColorParseError(pub String);

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form used when persisting colors.
    pub fn name(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let error = || ColorParseError(value.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if !hex.is_ascii() {
                return Err(error());
            }
            return match hex.len() {
                3 => {
                    let digit = |index: usize| {
                        u8::from_str_radix(&hex[index..=index], 16)
                            .map(|v| v * 17)
                            .map_err(|_| error())
                    };
                    Ok(Color::new(digit(0)?, digit(1)?, digit(2)?))
                }
                6 => {
                    let byte = |index: usize| {
                        u8::from_str_radix(&hex[index..index + 2], 16).map_err(|_| error())
                    };
                    Ok(Color::new(byte(0)?, byte(2)?, byte(4)?))
                }
                _ => Err(error()),
            };
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "white" => Ok(Color::WHITE),
            "black" => Ok(Color::BLACK),
            "red" => Ok(Color::new(255, 0, 0)),
            "green" => Ok(Color::new(0, 255, 0)),
            "blue" => Ok(Color::new(0, 0, 255)),
            "gray" | "grey" => Ok(Color::new(160, 160, 164)),
            _ => Err(error()),
        }
    }
}
