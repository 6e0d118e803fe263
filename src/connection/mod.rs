// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connection-gesture state and per-handle visibility resolution.
//!
//! One gesture may be active per editor session. [`ConnectionState`] has a
//! single writer (the editor's gesture handlers) and many readers (every
//! node's handle set); resolvers read it by shared reference so any mutation
//! is observable before the next pointer event is processed.

use crate::model::{HandleRole, NodeId};


/// Which node, if any, initiated the active connection gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    source_node_id: Option<NodeId>,
    started: bool,
}

impl ConnectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `node_id` as the gesture source. Ignored while a gesture is
    /// already active, so the first writer wins.
    pub fn begin(&mut self, node_id: NodeId) {
        if self.started {
            return;
        }
        self.source_node_id = Some(node_id);
        self.started = true;
    }

    /// Returns to the rest state. Always resets both fields, whether the
    /// gesture succeeded or was cancelled.
    pub fn end(&mut self) {
        self.source_node_id = None;
        self.started = false;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn source_node_id(&self) -> Option<&NodeId> {
        self.source_node_id.as_ref()
    }

    pub fn is_source(&self, node_id: &NodeId) -> bool {
        self.source_node_id.as_ref() == Some(node_id)
    }
}

/// Whether idle source handles (no gesture, node not hovered) stay
/// interactable or require hover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdleSourcePolicy {
    /// Source handles accept drags whenever no gesture is active.
    #[default]
    AlwaysInteractable,
    /// Source handles accept drags only while their node is hovered.
    HoverGated,
}

/// Resolved state for one handle. `interactable` and `visible` are computed
/// independently from the inputs: a handle can sit in the hit-test tree while
/// invisible, and tests assert on each on its own. Handles are never removed
/// from the render tree; only these two outputs toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleVisibility {
    pub interactable: bool,
    pub visible: bool,
}

impl HandleVisibility {
    pub fn opacity(&self) -> f32 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }
}

/// Decides whether one handle accepts pointer interaction right now.
///
/// Hover is suppressed while a gesture is active; during a gesture, source
/// handles respond only on the source node and target handles only on every
/// other node, so a drag can never terminate where it began.
pub fn resolve_visibility(
    role: HandleRole,
    is_source_node: bool,
    state: &ConnectionState,
    hovered: bool,
    policy: IdleSourcePolicy,
) -> HandleVisibility {
    let started = state.is_started();
    let effective_hover = !started && hovered;

    let interactable = match role {
        HandleRole::Source => {
            if started {
                is_source_node
            } else {
                match policy {
                    IdleSourcePolicy::AlwaysInteractable => true,
                    IdleSourcePolicy::HoverGated => effective_hover,
                }
            }
        }
        HandleRole::Target => started && !is_source_node,
    };

    let visible = match role {
        HandleRole::Source => {
            if started {
                is_source_node
            } else {
                effective_hover
                    || matches!(policy, IdleSourcePolicy::AlwaysInteractable)
            }
        }
        HandleRole::Target => started && !is_source_node,
    };

    HandleVisibility {
        interactable,
        visible,
    }
}
