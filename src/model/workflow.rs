// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::{Node, NodeDisplay, NodeKind};

/// Footprint of the reference payment-provider card.
pub const PROVIDER_NODE_SIZE: Size = Size {
    width: 186.0,
    height: 70.0,
};

/// The node and edge lists owned by the host canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial canvas of the reference editor: three payment providers
    /// and a provider-select node, no edges.
    pub fn starter() -> Self {
        let mut workflow = Self::new();
        for (id, name, code, x, y) in [
            ("4", "Google Pay", "Gp", 550.0, -50.0),
            ("5", "Stripe", "St", 550.0, 125.0),
            ("6", "Apple Pay", "Ap", 550.0, 325.0),
        ] {
            // Literal ids are valid segments.
            let id = NodeId::new(id).expect("starter node id");
            workflow.insert_node(Node::new_with_display(
                id,
                NodeKind::PaymentProvider,
                Point::new(x, y),
                PROVIDER_NODE_SIZE,
                NodeDisplay::new(name, code),
            ));
        }
        workflow.insert_node(Node::new(
            NodeId::new("7").expect("starter node id"),
            NodeKind::PaymentProviderSelect,
            Point::new(275.0, -100.0),
            PROVIDER_NODE_SIZE,
        ));
        workflow
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn insert_node(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id().clone(), node)
    }

    pub fn remove_node(&mut self, node_id: &NodeId) -> Option<Node> {
        self.nodes.remove(node_id)
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    pub fn insert_edge(&mut self, edge: Edge) -> Option<Edge> {
        self.edges.insert(edge.id().clone(), edge)
    }

    pub fn remove_edge(&mut self, edge_id: &EdgeId) -> Option<Edge> {
        self.edges.remove(edge_id)
    }

    /// Drops every edge whose source or target node no longer exists and
    /// returns the removed ids.
    ///
    /// The router assumes valid anchors, so the host must call this after
    /// node removal before asking for paths.
    pub fn prune_dangling_edges(&mut self) -> Vec<EdgeId> {
        let dangling: Vec<EdgeId> = self
            .edges
            .values()
            .filter(|edge| {
                !self.nodes.contains_key(edge.source()) || !self.nodes.contains_key(edge.target())
            })
            .map(|edge| edge.id().clone())
            .collect();
        for edge_id in &dangling {
            self.edges.remove(edge_id);
        }
        dangling
    }
}
