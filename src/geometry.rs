// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Geometry primitives shared by handle layout and edge routing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in canvas space (y grows downward, as on screen).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height of a node's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One of the four sides of a node's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Displaces `point` by `distance` along this side's outward normal.
    ///
    /// Top/bottom move along y, left/right along x. Offsetting by `d` and
    /// then `-d` returns the original point.
    pub fn offset(self, point: Point, distance: f64) -> Point {
        match self {
            Side::Top => Point::new(point.x, point.y - distance),
            Side::Bottom => Point::new(point.x, point.y + distance),
            Side::Left => Point::new(point.x - distance, point.y),
            Side::Right => Point::new(point.x + distance, point.y),
        }
    }

    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Left/right sides lay their handles out vertically.
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Left | Side::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Parses a side name, returning `None` for anything unrecognized.
    ///
    /// Callers that must stay total (offsetting, arrow orientation) treat
    /// `None` as "leave the input unchanged" / "use the default" so a bad
    /// side string can never make a path unrenderable.
    pub fn parse_lenient(value: &str) -> Option<Side> {
        match value {
            "top" => Some(Side::Top),
            "bottom" => Some(Side::Bottom),
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displaces `point` along the outward normal of the side named by `side`.
///
/// Unknown side names return the point unmodified.
pub fn offset_point_lenient(point: Point, side: &str, distance: f64) -> Point {
    match Side::parse_lenient(side) {
        Some(side) => side.offset(point, distance),
        None => point,
    }
}
