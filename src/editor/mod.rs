// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host-side mutation operations for an editor session.
//!
//! The editor is the single writer of [`ConnectionState`] and of the node and
//! edge lists. The host canvas translates raw pointer events into these calls
//! and renders from the state they leave behind; every mutation is visible to
//! visibility resolvers synchronously, before the next event is processed.

use crate::connection::{
    resolve_visibility, ConnectionState, HandleVisibility, IdleSourcePolicy,
};
use crate::model::{Edge, EdgeId, HandleId, HandleRole, Node, NodeId, Workflow};

#[cfg(test)]
mod tests;

/// Label given to a committed edge when the dialog is confirmed blank.
pub const DEFAULT_EDGE_LABEL: &str = "Connection";

const EDGE_ID_PREFIX: &str = "edge";

/// Where an in-flight connection currently stands.
///
/// `Draft`: a drag is active, no edge exists yet. `PendingLabel`: the drag
/// completed on a valid target and the naming dialog is open; the edge is
/// parked, not yet in the edge list. Derived from editor state, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Draft,
    PendingLabel,
}

/// What the host reports when a drag lands on a target handle.
///
/// Ids are optional because the host forwards whatever the drop resolved to;
/// incomplete requests are dropped silently (see [`WorkflowEditor::request_connection`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub source: Option<NodeId>,
    pub target: Option<NodeId>,
    pub source_handle: Option<HandleId>,
    pub target_handle: Option<HandleId>,
}

/// One editing session: the workflow plus all gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkflowEditor {
    workflow: Workflow,
    connection: ConnectionState,
    pending: Option<Edge>,
    idle_source_policy: IdleSourcePolicy,
    edge_seq: u64,
}

impl WorkflowEditor {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            ..Self::default()
        }
    }

    pub fn with_idle_source_policy(mut self, policy: IdleSourcePolicy) -> Self {
        self.idle_source_policy = policy;
        self
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn idle_source_policy(&self) -> IdleSourcePolicy {
        self.idle_source_policy
    }

    pub fn pending_edge(&self) -> Option<&Edge> {
        self.pending.as_ref()
    }

    pub fn phase(&self) -> GesturePhase {
        if self.pending.is_some() {
            GesturePhase::PendingLabel
        } else if self.connection.is_started() {
            GesturePhase::Draft
        } else {
            GesturePhase::Idle
        }
    }

    /// Drag started from one of `node_id`'s source handles. Ignored unless
    /// the session is idle, so a stray press can never steal an active
    /// gesture or reopen a closed one.
    pub fn begin_connection(&mut self, node_id: NodeId) {
        if self.phase() != GesturePhase::Idle {
            return;
        }
        self.connection.begin(node_id);
    }

    /// Drag ended, wherever it landed. Resets the connection state
    /// unconditionally; a pending edge (already handed to the dialog flow)
    /// survives.
    pub fn end_gesture(&mut self) {
        self.connection.end();
    }

    /// Drag landed on a target handle. Parks the edge for the naming dialog
    /// and returns its id, or `None` when the request is dropped.
    ///
    /// Dropped silently: a missing source or target id, an id naming a node
    /// that no longer exists, a self-loop, or a request arriving while
    /// another edge is already pending. The gesture stays active until the
    /// normal drag-end reset.
    pub fn request_connection(&mut self, request: ConnectionRequest) -> Option<EdgeId> {
        if self.pending.is_some() {
            return None;
        }
        let (Some(source), Some(target)) = (request.source, request.target) else {
            return None;
        };
        if source == target {
            return None;
        }
        if !self.workflow.contains_node(&source) || !self.workflow.contains_node(&target) {
            return None;
        }

        self.edge_seq += 1;
        let id = EdgeId::generated(EDGE_ID_PREFIX, self.edge_seq);
        let mut edge = Edge::new(id.clone(), source, target);
        edge.set_source_handle(request.source_handle);
        edge.set_target_handle(request.target_handle);
        self.pending = Some(edge);
        Some(id)
    }

    /// Dialog confirmed. Commits the pending edge with the trimmed label
    /// (or [`DEFAULT_EDGE_LABEL`] when blank), resets the connection state,
    /// and returns the committed id. No-op outside `PendingLabel`.
    pub fn confirm_label(&mut self, label: &str) -> Option<EdgeId> {
        let mut edge = self.pending.take()?;
        let trimmed = label.trim();
        edge.set_label(if trimmed.is_empty() {
            DEFAULT_EDGE_LABEL
        } else {
            trimmed
        });
        let id = edge.id().clone();
        self.workflow.insert_edge(edge);
        self.connection.end();
        Some(id)
    }

    /// Dialog dismissed. Drops the pending edge without touching the edge
    /// list and resets the connection state.
    pub fn cancel_label(&mut self) {
        self.pending = None;
        self.connection.end();
    }

    /// User clicked an edge's delete affordance.
    pub fn delete_edge(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        self.workflow.remove_edge(edge_id)
    }

    pub fn add_node(&mut self, node: Node) {
        self.workflow.insert_node(node);
    }

    /// Removes a node and prunes every edge that referenced it, so the
    /// router never sees a dangling anchor.
    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        let node = self.workflow.remove_node(node_id)?;
        self.workflow.prune_dangling_edges();
        Some(node)
    }

    /// Visibility for one of `node_id`'s handles, resolved against this
    /// session's connection state and idle-source policy.
    pub fn resolve_handle(
        &self,
        node_id: &NodeId,
        role: HandleRole,
        hovered: bool,
    ) -> HandleVisibility {
        resolve_visibility(
            role,
            self.connection.is_source(node_id),
            &self.connection,
            hovered,
            self.idle_source_policy,
        )
    }
}
