// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use super::ids::{EdgeId, HandleId, NodeId};

/// Rendering tag for an edge. `Routed` is the orthogonal multi-segment edge
/// produced by [`crate::layout::edge::route_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    Routed,
}

/// A committed connection between two nodes.
///
/// Invariant (maintained by the editor, enforced on commit): `source` and
/// `target` name distinct nodes present in the workflow at creation time.
/// The host prunes edges whose endpoints are later removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_handle: Option<HandleId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_handle: Option<HandleId>,
    label: String,
    #[serde(rename = "type")]
    kind: EdgeKind,
    animated: bool,
}

impl Edge {
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            source_handle: None,
            target_handle: None,
            label: String::new(),
            kind: EdgeKind::Routed,
            animated: true,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn source_handle(&self) -> Option<&HandleId> {
        self.source_handle.as_ref()
    }

    pub fn set_source_handle(&mut self, handle: Option<HandleId>) {
        self.source_handle = handle;
    }

    pub fn target_handle(&self) -> Option<&HandleId> {
        self.target_handle.as_ref()
    }

    pub fn set_target_handle(&mut self, handle: Option<HandleId>) {
        self.target_handle = handle;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn kind(&self) -> EdgeKind {
        self.kind
    }

    pub fn animated(&self) -> bool {
        self.animated
    }

    pub fn set_animated(&mut self, animated: bool) {
        self.animated = animated;
    }
}
