// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

use super::ids::NodeId;

/// Rendering discriminant for a node. The core never branches on it; the
/// host canvas maps each kind to a visual component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    PaymentInit,
    PaymentCountry,
    PaymentProvider,
    PaymentProviderSelect,
}

/// Display payload owned by the rendering layer (provider name + short code).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDisplay {
    pub name: String,
    pub code: String,
}

impl NodeDisplay {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// A node on the workflow canvas.
///
/// The core reads position and size (for handle layout and edge anchors) and
/// never mutates identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(rename = "type")]
    kind: NodeKind,
    position: Point,
    size: Size,
    #[serde(default)]
    display: NodeDisplay,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind, position: Point, size: Size) -> Self {
        Self {
            id,
            kind,
            position,
            size,
            display: NodeDisplay::default(),
        }
    }

    pub fn new_with_display(
        id: NodeId,
        kind: NodeKind,
        position: Point,
        size: Size,
        display: NodeDisplay,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            size,
            display,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn display(&self) -> &NodeDisplay {
        &self.display
    }
}
