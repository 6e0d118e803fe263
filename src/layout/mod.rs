// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derived geometry: handle layout per node and orthogonal edge routing.
//!
//! Both are pure functions of their inputs and rerun on every render; nothing
//! in this module caches or mutates model state.

pub mod edge;
pub mod handles;

pub use edge::{
    arrow_orientation, display_label, route_edge, RouteOptions, RoutedEdge, DEFAULT_STEPS,
    FALLBACK_EDGE_LABEL, LABEL_TRUNCATE_LEN, MAX_STEPS, MIN_STEPS, STAND_OFF,
};
pub use handles::{
    compute_handle_layout, node_handle_layout, Handle, HandleLayoutConfig, HandleLayoutError,
    HandleRect, HORIZONTAL_PAIR_COUNT, SOURCE_Z_INDEX, TARGET_Z_INDEX, VERTICAL_PAIR_COUNT,
};
