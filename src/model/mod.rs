// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core data model: nodes, edges, and the workflow that owns them.
//!
//! Everything here is plain data with serde derives; geometry derivation and
//! gesture state live in their own modules.

pub mod edge;
pub mod ids;
pub mod node;
pub mod workflow;

pub use edge::{Edge, EdgeKind};
pub use ids::{EdgeId, HandleId, HandleRole, Id, IdError, NodeId};
pub use node::{Node, NodeDisplay, NodeKind};
pub use workflow::{Workflow, PROVIDER_NODE_SIZE};
