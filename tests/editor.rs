//! Editor behavior: chain mutations, rendering contract, no-op semantics.
mod common;
use common::*;
use nagare::prelude::*;

#[test]
fn test_add_start_is_idempotent() {
    let mut editor = editor();

    assert!(editor.add_start().is_some());
    assert!(editor.add_start().is_none());

    assert!(editor.graph().start().is_some());
    assert_eq!(editor.surface().block_count(), 1);
    assert_eq!(editor.surface().connector_count(), 0);
}

#[test]
fn test_append_activity_blank_label_is_noop() {
    let (mut editor, _) = bare_activities(&["Collect order"]);

    assert!(editor.append_activity("").is_none());
    assert!(editor.append_activity("   \t").is_none());

    assert_eq!(editor.graph().activity_count(), 1);
    assert_eq!(editor.surface().block_count(), 1);
    assert_eq!(editor.surface().connector_count(), 0);
}

#[test]
fn test_append_sequence_counts() {
    let (editor, _) = bare_activities(&["A", "B", "C", "D"]);

    // N activities alone carry N-1 connectors.
    assert_eq!(editor.graph().activity_count(), 4);
    assert_eq!(editor.surface().block_count(), 4);
    assert_eq!(editor.surface().connector_count(), 3);
}

#[test]
fn test_start_and_end_each_add_one_connector() {
    let (editor, _) = order_chain();

    // 3 activities: 2 inter-activity connectors, plus start->first and last->end.
    assert_eq!(editor.surface().block_count(), 5);
    assert_eq!(editor.surface().connector_count(), 4);
    assert_eq!(editor.graph().expected_connector_count(), 4);
}

#[test]
fn test_add_end_requires_an_activity() {
    let mut editor = editor();
    editor.add_start();

    assert!(editor.add_end().is_none());
    assert!(editor.graph().end().is_none());
    assert_eq!(editor.surface().block_count(), 1);
}

#[test]
fn test_add_end_only_once() {
    let (mut editor, _) = order_chain();

    assert!(editor.add_end().is_none());

    assert_eq!(editor.surface().block_count(), 5);
    assert_eq!(editor.surface().connector_count(), 4);
}

#[test]
fn test_display_order_full_chain() {
    let (editor, _) = order_chain();

    assert_eq!(
        element_tags(editor.surface()),
        vec![
            "start",
            "->",
            "Collect order",
            "->",
            "Pack items",
            "->",
            "Ship",
            "->",
            "end",
        ]
    );
}

#[test]
fn test_activity_blocks_carry_delete_affordance() {
    let (editor, _) = order_chain();

    for block in editor.surface().blocks() {
        assert_eq!(block.deletable, block.kind.is_activity());
    }
}

#[test]
fn test_remove_middle_activity() {
    let (mut editor, ids) = bare_activities(&["A", "B", "C"]);

    let removed = editor.remove_activity(ids[1]).expect("B is live");
    assert_eq!(removed.position, 1);
    assert_eq!(removed.node.label, "B");

    // The sequence closes the gap; one connector is left between the
    // survivors (the A->B connector was the one removed).
    assert_eq!(editor.graph().activity_count(), 2);
    assert_eq!(editor.surface().labels(), vec!["A", "C"]);
    assert_eq!(element_tags(editor.surface()), vec!["A", "->", "C"]);
}

#[test]
fn test_remove_first_activity_removes_no_connector() {
    let (mut editor, ids) = bare_activities(&["A", "B", "C"]);

    editor.remove_activity(ids[0]).expect("A is live");

    // Position 0 has no connector before it, so none is removed and the
    // one that led out of A is left dangling at the head.
    assert_eq!(editor.surface().labels(), vec!["B", "C"]);
    assert_eq!(editor.surface().connector_count(), 2);
}

#[test]
fn test_remove_by_stale_id_is_noop() {
    let (mut editor, ids) = bare_activities(&["A", "B"]);

    assert!(editor.remove_activity(ids[0]).is_some());
    assert!(editor.remove_activity(ids[0]).is_none());

    assert_eq!(editor.graph().activity_count(), 1);
    assert_eq!(editor.surface().labels(), vec!["B"]);
}

#[test]
fn test_remove_marker_id_is_noop() {
    let mut editor = editor();
    let start = editor.add_start().unwrap();
    editor.append_activity("A");

    assert!(editor.remove_activity(start).is_none());
    assert!(editor.graph().start().is_some());
    assert_eq!(editor.surface().block_count(), 2);
}

#[test]
fn test_ids_survive_earlier_deletions() {
    let (mut editor, ids) = bare_activities(&["A", "B", "C"]);

    // Deleting A shifts B and C down a position; the retained id for C
    // must still remove C, not whatever now occupies C's old position.
    editor.remove_activity(ids[0]);
    let removed = editor.remove_activity(ids[2]).expect("C is still live");

    assert_eq!(removed.node.label, "C");
    assert_eq!(editor.surface().labels(), vec!["B"]);
}

#[test]
fn test_connector_deficit_zero_during_buildup() {
    let mut editor = editor();
    assert_eq!(editor.connector_deficit(), 0);

    editor.add_start();
    editor.append_activity("A");
    editor.append_activity("B");
    editor.add_end();

    assert_eq!(editor.connector_deficit(), 0);
}

#[test]
fn test_middle_deletion_leaves_connector_deficit() {
    let (mut editor, ids) = order_chain();

    editor.remove_activity(ids[1]);

    // Neighbors are not re-linked: the rendering is one connector short
    // of the chain's derived adjacency.
    assert_eq!(editor.connector_deficit(), 1);
}

#[test]
fn test_add_start_over_existing_chain_renders_first() {
    let (mut editor, _) = bare_activities(&["A"]);

    editor.add_start();

    assert_eq!(element_tags(editor.surface()), vec!["start", "->", "A"]);
}

#[test]
fn test_reset_clears_chain_and_surface() {
    let (mut editor, ids) = order_chain();

    editor.reset();

    assert!(editor.graph().is_empty());
    assert_eq!(editor.surface().block_count(), 0);
    assert_eq!(editor.surface().connector_count(), 0);

    // Ids minted before the reset stay stale forever.
    assert!(editor.remove_activity(ids[0]).is_none());

    // And are never reused afterwards.
    let fresh = editor.append_activity("again").unwrap();
    assert!(ids.iter().all(|id| *id != fresh));
}
