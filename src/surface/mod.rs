pub mod ascii;
pub mod memory;

pub use ascii::*;
pub use memory::*;

use crate::graph::{NodeId, NodeKind};
use serde::Serialize;

/// A single rendered block: the visual unit a node appears as on a
/// display surface.
///
/// `deletable` marks blocks that carry a delete affordance; the editor
/// sets it for activities only, markers and one-shot outline blocks are
/// rendered without one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub id: NodeId,
    pub kind: NodeKind,
    pub label: String,
    pub deletable: bool,
}

impl Block {
    /// A start or end marker block. Rendered with its kind as the label.
    pub fn marker(id: NodeId, kind: NodeKind) -> Self {
        let label = match kind {
            NodeKind::Start => "Start",
            NodeKind::End => "End",
            NodeKind::Activity => "",
        };
        Block {
            id,
            kind,
            label: label.to_string(),
            deletable: false,
        }
    }

    /// An activity block carrying its label and a delete affordance.
    pub fn activity(id: NodeId, label: impl Into<String>) -> Self {
        Block {
            id,
            kind: NodeKind::Activity,
            label: label.into(),
            deletable: true,
        }
    }

    /// A plain labeled block without a delete affordance, as produced by
    /// the one-shot outline renderer.
    pub fn plain(id: NodeId, label: impl Into<String>) -> Self {
        Block {
            id,
            kind: NodeKind::Activity,
            label: label.into(),
            deletable: false,
        }
    }
}

/// The host display abstraction the editor renders into.
///
/// A surface is an ordered list of elements (blocks and connectors), the
/// equivalent of a host container's children. Every method takes effect
/// immediately; there is no deferred or batched render pass. Removal
/// methods are no-ops when the target element does not exist, mirroring
/// the rest of the crate's silent no-op discipline.
pub trait Surface {
    /// Inserts a block at the given element index (not block index).
    /// Indices past the end append.
    fn insert_block(&mut self, index: usize, block: Block);

    /// Inserts a connector at the given element index. Indices past the
    /// end append.
    fn insert_connector(&mut self, index: usize);

    /// Removes the block with the given id, if present.
    fn remove_block(&mut self, id: NodeId);

    /// Removes the connector with the given ordinal among all rendered
    /// connectors (0 = first connector in display order), if present.
    fn remove_connector_at(&mut self, ordinal: usize);

    /// Removes every element.
    fn clear(&mut self);

    /// Total number of elements (blocks plus connectors).
    fn element_count(&self) -> usize;

    fn block_count(&self) -> usize;

    fn connector_count(&self) -> usize;

    /// Appends a block after all current elements.
    fn push_block(&mut self, block: Block) {
        self.insert_block(self.element_count(), block);
    }

    /// Appends a connector after all current elements.
    fn push_connector(&mut self) {
        self.insert_connector(self.element_count());
    }
}
