// SPDX-FileCopyrightText: 2026 Payloom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::geometry::Point;
use crate::model::{
    HandleId, HandleRole, Node, NodeId, NodeKind, Workflow, PROVIDER_NODE_SIZE,
};

use super::{ConnectionRequest, GesturePhase, WorkflowEditor, DEFAULT_EDGE_LABEL};

fn node_id(value: &str) -> NodeId {
    value.parse().expect("node id")
}

fn editor_with_nodes(ids: &[&str]) -> WorkflowEditor {
    let mut workflow = Workflow::new();
    for id in ids {
        workflow.insert_node(Node::new(
            node_id(id),
            NodeKind::PaymentProvider,
            Point::new(0.0, 0.0),
            PROVIDER_NODE_SIZE,
        ));
    }
    WorkflowEditor::new(workflow)
}

fn request(source: &str, target: &str) -> ConnectionRequest {
    ConnectionRequest {
        source: Some(node_id(source)),
        target: Some(node_id(target)),
        source_handle: Some(HandleId::from_raw("right-source-1")),
        target_handle: Some(HandleId::from_raw("left-target-1")),
    }
}

#[test]
fn full_connect_flow_commits_one_labelled_edge() {
    let mut editor = editor_with_nodes(&["A", "B"]);

    editor.begin_connection(node_id("A"));
    assert_eq!(editor.phase(), GesturePhase::Draft);

    let pending_id = editor.request_connection(request("A", "B")).expect("pending");
    assert_eq!(editor.phase(), GesturePhase::PendingLabel);
    assert!(editor.workflow().edges().is_empty());

    editor.end_gesture();
    // Drag-end resets the connection but the parked edge survives.
    assert_eq!(editor.phase(), GesturePhase::PendingLabel);
    assert!(!editor.connection().is_started());

    let committed = editor.confirm_label("Fallback").expect("committed");
    assert_eq!(committed, pending_id);
    assert_eq!(editor.phase(), GesturePhase::Idle);

    let edge = editor.workflow().edge(&committed).expect("edge");
    assert_eq!(edge.source(), &node_id("A"));
    assert_eq!(edge.target(), &node_id("B"));
    assert_eq!(edge.label(), "Fallback");
    assert_eq!(
        edge.source_handle().map(|h| h.as_str()),
        Some("right-source-1")
    );
    assert_eq!(
        edge.target_handle().map(|h| h.as_str()),
        Some("left-target-1")
    );
    assert_eq!(editor.connection().source_node_id(), None);
}

#[test]
fn blank_label_commits_with_the_default_placeholder() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));
    editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();

    let committed = editor.confirm_label("   ").expect("committed");
    let edge = editor.workflow().edge(&committed).expect("edge");
    assert_eq!(edge.label(), DEFAULT_EDGE_LABEL);
    assert_ne!(edge.label(), "");
}

#[test]
fn drop_on_empty_canvas_creates_nothing_and_resets() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));
    editor.end_gesture();

    assert_eq!(editor.phase(), GesturePhase::Idle);
    assert!(editor.workflow().edges().is_empty());
    assert!(!editor.connection().is_started());
    assert!(!editor.connection().is_source(&node_id("A")));

    // Handles are back to their pre-gesture state.
    let source = editor.resolve_handle(&node_id("A"), HandleRole::Source, false);
    let target = editor.resolve_handle(&node_id("B"), HandleRole::Target, false);
    assert!(source.interactable);
    assert!(!target.interactable);
}

#[test]
fn cancelled_dialog_discards_the_pending_edge() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));
    editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();

    editor.cancel_label();
    assert_eq!(editor.phase(), GesturePhase::Idle);
    assert!(editor.workflow().edges().is_empty());
    assert_eq!(editor.pending_edge(), None);
}

#[test]
fn malformed_requests_are_dropped_silently() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));

    let missing_target = ConnectionRequest {
        source: Some(node_id("A")),
        ..ConnectionRequest::default()
    };
    assert_eq!(editor.request_connection(missing_target), None);

    let missing_source = ConnectionRequest {
        target: Some(node_id("B")),
        ..ConnectionRequest::default()
    };
    assert_eq!(editor.request_connection(missing_source), None);

    // Still in the gesture; the normal drag-end path resets.
    assert_eq!(editor.phase(), GesturePhase::Draft);
    assert!(editor.workflow().edges().is_empty());

    editor.end_gesture();
    assert_eq!(editor.phase(), GesturePhase::Idle);
}

#[test]
fn requests_naming_unknown_nodes_are_dropped() {
    let mut editor = editor_with_nodes(&["A"]);
    editor.begin_connection(node_id("A"));
    assert_eq!(editor.request_connection(request("A", "ghost")), None);
    assert_eq!(editor.phase(), GesturePhase::Draft);
}

#[test]
fn self_loops_are_dropped() {
    let mut editor = editor_with_nodes(&["A"]);
    editor.begin_connection(node_id("A"));
    assert_eq!(editor.request_connection(request("A", "A")), None);
}

#[test]
fn begin_is_ignored_while_a_gesture_or_dialog_is_active() {
    let mut editor = editor_with_nodes(&["A", "B", "C"]);
    editor.begin_connection(node_id("A"));
    editor.begin_connection(node_id("B"));
    assert!(editor.connection().is_source(&node_id("A")));

    editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();
    editor.begin_connection(node_id("C"));
    // Dialog still open: no new gesture may start.
    assert!(!editor.connection().is_started());
    assert_eq!(editor.phase(), GesturePhase::PendingLabel);
}

#[test]
fn confirm_outside_pending_label_is_a_no_op() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    assert_eq!(editor.confirm_label("Nope"), None);
    assert!(editor.workflow().edges().is_empty());
}

#[test]
fn committed_edge_ids_are_unique_per_session() {
    let mut editor = editor_with_nodes(&["A", "B", "C"]);

    editor.begin_connection(node_id("A"));
    let first = editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();
    editor.confirm_label("First").expect("committed");

    editor.begin_connection(node_id("A"));
    let second = editor.request_connection(request("A", "C")).expect("pending");
    editor.end_gesture();
    editor.confirm_label("Second").expect("committed");

    assert_ne!(first, second);
    assert_eq!(editor.workflow().edges().len(), 2);
}

#[test]
fn delete_edge_removes_it_from_the_workflow() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));
    let id = editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();
    editor.confirm_label("Doomed").expect("committed");

    let removed = editor.delete_edge(&id).expect("removed");
    assert_eq!(removed.id(), &id);
    assert!(editor.workflow().edges().is_empty());
}

#[test]
fn removing_a_node_prunes_its_edges() {
    let mut editor = editor_with_nodes(&["A", "B"]);
    editor.begin_connection(node_id("A"));
    editor.request_connection(request("A", "B")).expect("pending");
    editor.end_gesture();
    editor.confirm_label("Link").expect("committed");

    editor.remove_node(&node_id("B"));
    assert!(editor.workflow().edges().is_empty());
}

#[test]
fn visibility_tracks_state_changes_synchronously() {
    let mut editor = editor_with_nodes(&["A", "B"]);

    assert!(!editor.resolve_handle(&node_id("B"), HandleRole::Target, false).interactable);

    editor.begin_connection(node_id("A"));
    assert!(editor.resolve_handle(&node_id("B"), HandleRole::Target, false).interactable);
    assert!(!editor.resolve_handle(&node_id("B"), HandleRole::Source, false).interactable);
    assert!(editor.resolve_handle(&node_id("A"), HandleRole::Source, false).interactable);
    assert!(!editor.resolve_handle(&node_id("A"), HandleRole::Target, false).interactable);

    editor.end_gesture();
    assert!(!editor.resolve_handle(&node_id("B"), HandleRole::Target, false).interactable);
}
