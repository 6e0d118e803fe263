// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Write as _;

use crate::geometry::{Point, Side};


/// Perpendicular distance a path travels before its first turn.
pub const STAND_OFF: f64 = 30.0;
/// Extra stand-off on the source end.
pub const EDGE_START_EXTENSION: f64 = 3.0;
/// Extra stand-off on the target end.
pub const EDGE_END_EXTENSION: f64 = 3.0;

pub const MIN_STEPS: usize = 4;
pub const MAX_STEPS: usize = 8;
/// Requested subdivision count; always clamped into `[MIN_STEPS, MAX_STEPS]`.
pub const DEFAULT_STEPS: usize = 3;

pub const LABEL_TRUNCATE_LEN: usize = 8;
pub const FALLBACK_EDGE_LABEL: &str = "Edge";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOptions {
    /// Interior subdivision points along the primary axis.
    pub steps: usize,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}

/// The rendered geometry of one edge: an orthogonal polyline, the label
/// anchor, and the arrowhead orientation at the target.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedEdge {
    points: Vec<Point>,
    label_point: Point,
    arrow: Side,
}

impl RoutedEdge {
    /// Waypoints in draw order. The first point is always the exact source
    /// anchor and the last the exact target anchor.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Where the label (and its delete affordance) is centered: the discrete
    /// midpoint `points[len / 2]`, not the geometric middle of the path.
    pub fn label_point(&self) -> Point {
        self.label_point
    }

    /// Which way the arrowhead points, named by the side it points toward.
    pub fn arrow(&self) -> Side {
        self.arrow
    }

    /// SVG-style path data: one move-to followed by line-to commands.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let command = if i == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail.
            let _ = write!(out, "{command} {},{}", point.x, point.y);
        }
        out
    }
}

/// Routes an orthogonal path between two boundary anchors.
///
/// The path leaves each node perpendicular to its boundary for the stand-off
/// distance, runs along the primary axis (the larger delta between the two
/// stand-off points; ties go horizontal) in `steps` even subdivisions while
/// holding the cross axis at the start value, then takes a single turn to
/// the end's cross value. Stateless and total: every input produces a
/// renderable path.
pub fn route_edge(
    source_anchor: Point,
    source_side: Side,
    target_anchor: Point,
    target_side: Side,
    options: &RouteOptions,
) -> RoutedEdge {
    let steps = options.steps.clamp(MIN_STEPS, MAX_STEPS);
    let start = source_side.offset(source_anchor, STAND_OFF + EDGE_START_EXTENSION);
    let end = target_side.offset(target_anchor, STAND_OFF + EDGE_END_EXTENSION);

    let mut points = Vec::with_capacity(steps + 5);
    points.push(source_anchor);
    points.push(start);

    let horizontal_first = (end.x - start.x).abs() >= (end.y - start.y).abs();
    if horizontal_first {
        let step = (end.x - start.x) / (steps + 1) as f64;
        for i in 1..=steps {
            points.push(Point::new(start.x + step * i as f64, start.y));
        }
        points.push(Point::new(end.x, start.y));
    } else {
        let step = (end.y - start.y) / (steps + 1) as f64;
        for i in 1..=steps {
            points.push(Point::new(start.x, start.y + step * i as f64));
        }
        points.push(Point::new(start.x, end.y));
    }

    points.push(end);
    points.push(target_anchor);

    let label_point = points[points.len() / 2];
    RoutedEdge {
        points,
        label_point,
        arrow: arrow_orientation(Some(target_side)),
    }
}

/// Arrowheads point opposite the side the edge enters, so they face into
/// the node. An undetermined side (e.g. an unparseable handle id) gets the
/// right-facing default rather than failing.
pub fn arrow_orientation(target_side: Option<Side>) -> Side {
    match target_side {
        Some(side) => side.opposite(),
        None => Side::Right,
    }
}

/// The label text an edge renders right now.
///
/// Unhovered labels longer than [`LABEL_TRUNCATE_LEN`] characters truncate
/// to their first eight characters plus `...`; hover restores the full
/// text. Empty labels fall back to [`FALLBACK_EDGE_LABEL`]. Counts chars,
/// not bytes.
pub fn display_label(label: &str, hovered: bool) -> String {
    let name = if label.is_empty() {
        FALLBACK_EDGE_LABEL
    } else {
        label
    };
    if hovered || name.chars().count() <= LABEL_TRUNCATE_LEN {
        return name.to_owned();
    }
    let mut out: String = name.chars().take(LABEL_TRUNCATE_LEN).collect();
    out.push_str("...");
    out
}
