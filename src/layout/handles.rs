// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::geometry::{Side, Size};
use crate::model::{HandleId, HandleRole};

#[cfg(test)]
mod tests;

/// Source handles render above targets at the same footprint so a new drag
/// can always originate even where both roles overlap.
pub const SOURCE_Z_INDEX: u16 = 101;
pub const TARGET_Z_INDEX: u16 = 100;

/// Handle pairs per side in the reference node.
pub const VERTICAL_PAIR_COUNT: u32 = 3;
pub const HORIZONTAL_PAIR_COUNT: u32 = 10;

/// A handle's rectangle in its node's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// One attachment point on a node boundary.
///
/// Handles are derived, never stored: the generator reruns from node size and
/// pair counts on every render.
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    id: HandleId,
    side: Side,
    role: HandleRole,
    rect: HandleRect,
    z_index: u16,
}

impl Handle {
    pub fn id(&self) -> &HandleId {
        &self.id
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn role(&self) -> HandleRole {
        self.role
    }

    pub fn rect(&self) -> HandleRect {
        self.rect
    }

    pub fn z_index(&self) -> u16 {
        self.z_index
    }
}

/// Knobs for handle sizing. Defaults match the reference node chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleLayoutConfig {
    pub vertical_handle_size: f64,
    pub horizontal_handle_size: f64,
    /// Vertical sides distribute their handles inside a band of this height
    /// centered in the node, not across the full node height.
    pub vertical_band_height: f64,
}

impl Default for HandleLayoutConfig {
    fn default() -> Self {
        Self {
            vertical_handle_size: 10.0,
            horizontal_handle_size: 10.0,
            vertical_band_height: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleLayoutError {
    /// The requested pair count cannot produce a usable layout on this side.
    InvalidPairCount { side: Side, pair_count: u32 },
}

impl fmt::Display for HandleLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPairCount { side, pair_count } => {
                let min = if side.is_vertical() { 1 } else { 2 };
                write!(
                    f,
                    "side {side} requires at least {min} handle pair(s), got {pair_count}"
                )
            }
        }
    }
}

impl std::error::Error for HandleLayoutError {}

/// Generates the ordered handle list for one side of a node.
///
/// Slots interleave roles: even slot indices are targets, odd are sources,
/// and slot `i` belongs to pair `i / 2 + 1`. Vertical sides skip the last
/// slot, horizontal sides skip slot 0 (corner keep-out), so one pair per
/// side is deliberately staggered.
///
/// Pair counts of zero are rejected, as is a single pair on horizontal
/// sides (the slot-0 skip would emit nothing). A single pair on a vertical
/// side is the documented degenerate variant: one enlarged source and one
/// enlarged target stacked over the whole band.
pub fn compute_handle_layout(
    side: Side,
    pair_count: u32,
    node_size: Size,
    config: &HandleLayoutConfig,
) -> Result<Vec<Handle>, HandleLayoutError> {
    if side.is_vertical() {
        vertical_layout(side, pair_count, node_size, config)
    } else {
        horizontal_layout(side, pair_count, node_size, config)
    }
}

/// The full handle set of a reference node: 3 pairs on each vertical side,
/// 10 pairs on each horizontal side.
pub fn node_handle_layout(
    node_size: Size,
    config: &HandleLayoutConfig,
) -> Result<Vec<Handle>, HandleLayoutError> {
    let mut handles = Vec::new();
    for (side, pair_count) in [
        (Side::Left, VERTICAL_PAIR_COUNT),
        (Side::Right, VERTICAL_PAIR_COUNT),
        (Side::Top, HORIZONTAL_PAIR_COUNT),
        (Side::Bottom, HORIZONTAL_PAIR_COUNT),
    ] {
        handles.extend(compute_handle_layout(side, pair_count, node_size, config)?);
    }
    Ok(handles)
}

fn vertical_layout(
    side: Side,
    pair_count: u32,
    node_size: Size,
    config: &HandleLayoutConfig,
) -> Result<Vec<Handle>, HandleLayoutError> {
    if pair_count == 0 {
        return Err(HandleLayoutError::InvalidPairCount { side, pair_count });
    }

    let handle_size = config.vertical_handle_size;
    let band = config.vertical_band_height;
    let band_start = (node_size.height - band) / 2.0;
    let left = match side {
        Side::Left => -1.0,
        _ => node_size.width - handle_size - 10.0,
    };

    if pair_count == 1 {
        // Degenerate variant: a single enlarged pair spanning the whole
        // band, stacked at the same position with the source on top.
        let rect = HandleRect {
            top: band_start,
            left,
            width: handle_size + 10.0,
            height: band,
        };
        return Ok(vec![
            handle(side, HandleRole::Target, 1, rect),
            handle(side, HandleRole::Source, 1, rect),
        ]);
    }

    // Last slot skipped: the bottom-most pair keeps only its target half.
    let slots = pair_count * 2 - 1;
    let pitch = band / (pair_count * 2) as f64;

    let mut handles = Vec::with_capacity(slots as usize);
    for i in 0..slots {
        let rect = HandleRect {
            top: band_start + pitch * i as f64 - 5.0,
            left,
            width: handle_size + 10.0,
            height: handle_size * 2.0,
        };
        handles.push(handle(side, slot_role(i), i / 2 + 1, rect));
    }
    Ok(handles)
}

fn horizontal_layout(
    side: Side,
    pair_count: u32,
    node_size: Size,
    config: &HandleLayoutConfig,
) -> Result<Vec<Handle>, HandleLayoutError> {
    if pair_count < 2 {
        return Err(HandleLayoutError::InvalidPairCount { side, pair_count });
    }

    let handle_size = config.horizontal_handle_size;
    let slots = pair_count * 2;
    let pitch = node_size.width / slots as f64;
    let top = match side {
        Side::Top => -3.0,
        _ => node_size.height / 2.0 - 5.0,
    };

    // Slot 0 skipped to keep clear of the corner.
    let mut handles = Vec::with_capacity(slots as usize - 1);
    for i in 1..slots {
        let nominal_left = pitch * i as f64;
        let overflows = nominal_left + handle_size > node_size.width;
        let (left, width) = if overflows {
            // Narrow the last slot and pull it inside the node bounds.
            (node_size.width - handle_size, handle_size)
        } else {
            (nominal_left, handle_size * 2.0)
        };
        let rect = HandleRect {
            top,
            left,
            width,
            height: handle_size + 10.0,
        };
        handles.push(handle(side, slot_role(i), i / 2 + 1, rect));
    }
    Ok(handles)
}

fn slot_role(slot: u32) -> HandleRole {
    if slot % 2 == 0 {
        HandleRole::Target
    } else {
        HandleRole::Source
    }
}

fn handle(side: Side, role: HandleRole, pair_index: u32, rect: HandleRect) -> Handle {
    let z_index = match role {
        HandleRole::Source => SOURCE_Z_INDEX,
        HandleRole::Target => TARGET_Z_INDEX,
    };
    Handle {
        id: HandleId::new(side, role, pair_index),
        side,
        role,
        rect,
        z_index,
    }
}
