use super::node::{FlowNode, NodeId, NodeKind};
use ahash::AHashMap;
use itertools::Itertools;

/// An activity removed from the chain, together with the position it
/// occupied at the moment of removal.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedActivity {
    pub node: FlowNode,
    pub position: usize,
}

/// The aggregate chain state: an optional start marker, the ordered
/// activity sequence, and an optional end marker.
///
/// Insertion order of activities is both display order and logical order.
/// The graph owns id minting; ids are unique for the lifetime of the graph
/// and survive `reset` (the counter is never rewound).
///
/// All mutating operations are infallible. Precondition violations
/// (duplicate start, premature end, stale removal) degrade to no-ops,
/// signaled through the return value.
#[derive(Debug, Default)]
pub struct FlowGraph {
    start: Option<FlowNode>,
    activities: Vec<FlowNode>,
    end: Option<FlowNode>,
    live: AHashMap<NodeId, NodeKind>,
    next_id: u64,
}

impl FlowGraph {
    pub fn new() -> Self {
        FlowGraph::default()
    }

    fn mint_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates the start marker. Idempotent: returns `None` without any
    /// effect when a start marker already exists.
    pub fn add_start(&mut self) -> Option<NodeId> {
        if self.start.is_some() {
            return None;
        }
        let id = self.mint_id();
        self.start = Some(FlowNode::marker(id, NodeKind::Start));
        self.live.insert(id, NodeKind::Start);
        Some(id)
    }

    /// Appends an activity with the given label to the end of the sequence.
    /// Returns `None` without any effect when the label is empty or blank.
    pub fn append_activity(&mut self, label: &str) -> Option<NodeId> {
        if label.trim().is_empty() {
            return None;
        }
        let id = self.mint_id();
        self.activities.push(FlowNode::activity(id, label));
        self.live.insert(id, NodeKind::Activity);
        Some(id)
    }

    /// Creates the end marker. Returns `None` without any effect unless at
    /// least one activity exists and no end marker exists yet.
    pub fn add_end(&mut self) -> Option<NodeId> {
        if self.activities.is_empty() || self.end.is_some() {
            return None;
        }
        let id = self.mint_id();
        self.end = Some(FlowNode::marker(id, NodeKind::End));
        self.live.insert(id, NodeKind::End);
        Some(id)
    }

    /// Removes the activity with the given id, closing the gap so that
    /// later activities shift down by one position.
    ///
    /// Returns `None` without any effect for ids that are stale, unknown,
    /// or belong to a marker.
    pub fn remove_activity(&mut self, id: NodeId) -> Option<RemovedActivity> {
        if self.live.get(&id) != Some(&NodeKind::Activity) {
            return None;
        }
        let position = self.position_of(id)?;
        let node = self.activities.remove(position);
        self.live.remove(&id);
        Some(RemovedActivity { node, position })
    }

    /// Clears the whole state. The id counter is not rewound, so ids from
    /// before the reset stay stale forever.
    pub fn reset(&mut self) {
        self.start = None;
        self.activities.clear();
        self.end = None;
        self.live.clear();
    }

    pub fn start(&self) -> Option<&FlowNode> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&FlowNode> {
        self.end.as_ref()
    }

    pub fn activities(&self) -> &[FlowNode] {
        &self.activities
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    /// Current index of an activity within the live sequence, if it is
    /// still part of it.
    pub fn position_of(&self, id: NodeId) -> Option<usize> {
        self.activities.iter().position(|node| node.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.activities.is_empty() && self.end.is_none()
    }

    /// All present nodes in display order: start, activities, end.
    pub fn display_order(&self) -> impl Iterator<Item = &FlowNode> {
        self.start
            .iter()
            .chain(self.activities.iter())
            .chain(self.end.iter())
    }

    /// Pairs of order-adjacent present nodes. A connector belongs between
    /// exactly these pairs; the set is re-derived from adjacency, never
    /// stored.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&FlowNode, &FlowNode)> {
        self.display_order().tuple_windows()
    }

    /// Number of connectors a fully connected rendering of this state
    /// would contain.
    pub fn expected_connector_count(&self) -> usize {
        self.adjacent_pairs().count()
    }
}
