// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Payloom — the core of a payment-routing workflow graph editor.
//!
//! The host canvas owns rendering, pan/zoom, and raw pointer events; this
//! crate owns what those events mean: handle layout on node boundaries,
//! the one-gesture-at-a-time connection state, per-handle visibility, and
//! orthogonal edge routing with label placement.

pub mod connection;
pub mod editor;
pub mod geometry;
pub mod layout;
pub mod model;
