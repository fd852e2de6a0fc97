use super::{Block, Element, MemorySurface, Surface};
use crate::graph::NodeId;
use std::fmt::Write;

/// Minimum inner width of a rendered box, so single-word chains still
/// read as blocks rather than slivers.
const MIN_INNER_WIDTH: usize = 11;

/// A display surface that renders its element list as ASCII block/arrow
/// art. Structurally it is a [`MemorySurface`]; `render` walks the element
/// list and draws one box per block and one down-arrow per connector.
#[derive(Debug, Default)]
pub struct AsciiSurface {
    inner: MemorySurface,
}

impl AsciiSurface {
    pub fn new() -> Self {
        AsciiSurface::default()
    }

    pub fn elements(&self) -> &[Element] {
        self.inner.elements()
    }

    /// Formats the current element list as block/arrow art.
    pub fn render(&self) -> String {
        let inner_width = self
            .inner
            .blocks()
            .map(|block| display_label(block).chars().count())
            .max()
            .unwrap_or(0)
            .max(MIN_INNER_WIDTH)
            + 2;

        let mut output = String::new();
        let border = format!("+{}+", "-".repeat(inner_width));

        for element in self.inner.elements() {
            match element {
                Element::Block(block) => {
                    writeln!(&mut output, "{}", border).unwrap();
                    writeln!(
                        &mut output,
                        "|{:^width$}|",
                        display_label(block),
                        width = inner_width
                    )
                    .unwrap();
                    writeln!(&mut output, "{}", border).unwrap();
                }
                Element::Connector => {
                    writeln!(&mut output, "{:^width$}", "|", width = inner_width + 2).unwrap();
                    writeln!(&mut output, "{:^width$}", "v", width = inner_width + 2).unwrap();
                }
            }
        }
        output
    }
}

/// Label as shown inside the box; deletable blocks carry their delete
/// affordance inline.
fn display_label(block: &Block) -> String {
    if block.deletable {
        format!("{} [x]", block.label)
    } else {
        block.label.clone()
    }
}

impl Surface for AsciiSurface {
    fn insert_block(&mut self, index: usize, block: Block) {
        self.inner.insert_block(index, block);
    }

    fn insert_connector(&mut self, index: usize) {
        self.inner.insert_connector(index);
    }

    fn remove_block(&mut self, id: NodeId) {
        self.inner.remove_block(id);
    }

    fn remove_connector_at(&mut self, ordinal: usize) {
        self.inner.remove_connector_at(ordinal);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn element_count(&self) -> usize {
        self.inner.element_count()
    }

    fn block_count(&self) -> usize {
        self.inner.block_count()
    }

    fn connector_count(&self) -> usize {
        self.inner.connector_count()
    }
}
