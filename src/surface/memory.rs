use super::{Block, Surface};
use crate::graph::NodeId;
use serde::Serialize;

/// One entry in a surface's element list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    Block(Block),
    Connector,
}

impl Element {
    pub fn is_connector(&self) -> bool {
        matches!(self, Element::Connector)
    }

    pub fn as_block(&self) -> Option<&Block> {
        match self {
            Element::Block(block) => Some(block),
            Element::Connector => None,
        }
    }
}

/// An in-memory display surface: an ordered element list standing in for
/// a host container's children. This is the headless host used by tests
/// and by anything that wants to inspect rendered output structurally.
#[derive(Debug, Default, Serialize)]
pub struct MemorySurface {
    elements: Vec<Element>,
}

impl MemorySurface {
    pub fn new() -> Self {
        MemorySurface::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.elements.iter().filter_map(Element::as_block)
    }

    /// Block labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.blocks().map(|block| block.label.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Pretty-printed JSON of the element list.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.elements)
    }
}

impl Surface for MemorySurface {
    fn insert_block(&mut self, index: usize, block: Block) {
        let index = index.min(self.elements.len());
        self.elements.insert(index, Element::Block(block));
    }

    fn insert_connector(&mut self, index: usize) {
        let index = index.min(self.elements.len());
        self.elements.insert(index, Element::Connector);
    }

    fn remove_block(&mut self, id: NodeId) {
        if let Some(index) = self
            .elements
            .iter()
            .position(|element| element.as_block().is_some_and(|block| block.id == id))
        {
            self.elements.remove(index);
        }
    }

    fn remove_connector_at(&mut self, ordinal: usize) {
        if let Some(index) = self
            .elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.is_connector())
            .nth(ordinal)
            .map(|(index, _)| index)
        {
            self.elements.remove(index);
        }
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn block_count(&self) -> usize {
        self.elements.len() - self.connector_count()
    }

    fn connector_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.is_connector())
            .count()
    }
}
