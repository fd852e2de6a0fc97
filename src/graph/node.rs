use serde::Serialize;
use std::fmt;

/// Stable identifier for a node within a single graph lifetime.
///
/// Ids are minted monotonically and never reused, so an id captured at
/// creation time (e.g. bound to a delete button) can always be resolved to
/// the node's *current* position, no matter how many earlier nodes have
/// been removed since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn new(raw: u64) -> Self {
        NodeId(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The role a node plays in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// The single entry marker. Carries no label.
    Start,
    /// A user-labeled intermediate step.
    Activity,
    /// The single exit marker. Carries no label.
    End,
}

impl NodeKind {
    pub fn is_activity(self) -> bool {
        matches!(self, NodeKind::Activity)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Start => write!(f, "start"),
            NodeKind::Activity => write!(f, "activity"),
            NodeKind::End => write!(f, "end"),
        }
    }
}

/// A single node in the flow chain.
///
/// `label` is only meaningful for activities; markers store an empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
}

impl FlowNode {
    pub(crate) fn marker(id: NodeId, kind: NodeKind) -> Self {
        FlowNode {
            id,
            kind,
            label: String::new(),
        }
    }

    pub(crate) fn activity(id: NodeId, label: impl Into<String>) -> Self {
        FlowNode {
            id,
            kind: NodeKind::Activity,
            label: label.into(),
        }
    }
}
