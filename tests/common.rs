//! Common test utilities for building editors and sample documents.
use nagare::prelude::*;

/// An outline with leading/trailing noise; parses to exactly three steps.
#[allow(dead_code)]
pub const ORDER_OUTLINE: &str = "\n  Collect order\n\nPack items\n   \nShip\n";

#[allow(dead_code)]
pub fn editor() -> FlowEditor<MemorySurface> {
    FlowEditor::new(MemorySurface::new())
}

/// Builds the full order chain: start, three activities, end.
/// Returns the editor and the activity ids in append order.
#[allow(dead_code)]
pub fn order_chain() -> (FlowEditor<MemorySurface>, Vec<NodeId>) {
    let mut editor = editor();
    editor.add_start();
    let ids = ["Collect order", "Pack items", "Ship"]
        .iter()
        .map(|label| {
            editor
                .append_activity(label)
                .expect("labels here are never blank")
        })
        .collect();
    editor.add_end();
    (editor, ids)
}

/// Appends the given labels into a fresh editor with no markers.
#[allow(dead_code)]
pub fn bare_activities(labels: &[&str]) -> (FlowEditor<MemorySurface>, Vec<NodeId>) {
    let mut editor = editor();
    let ids = labels
        .iter()
        .map(|label| {
            editor
                .append_activity(label)
                .expect("labels here are never blank")
        })
        .collect();
    (editor, ids)
}

/// Flattens a surface's element list into short tags for order assertions.
#[allow(dead_code)]
pub fn element_tags(surface: &MemorySurface) -> Vec<String> {
    surface
        .elements()
        .iter()
        .map(|element| match element {
            Element::Connector => "->".to_string(),
            Element::Block(block) => match block.kind {
                NodeKind::Start => "start".to_string(),
                NodeKind::End => "end".to_string(),
                NodeKind::Activity => block.label.clone(),
            },
        })
        .collect()
}
