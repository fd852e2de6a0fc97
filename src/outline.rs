use crate::error::OutlineConversionError;
use crate::graph::NodeId;
use crate::surface::{Block, Surface};

/// A one-shot, stateless text-to-blocks document: an ordered list of step
/// labels with no relation to the incremental editor model.
///
/// Parsing splits on newlines, trims each line, and discards the blank
/// ones. Rendering replaces whatever the target surface currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    steps: Vec<String>,
}

impl Outline {
    /// Parses a multi-line text block into an outline.
    pub fn parse(text: &str) -> Self {
        Outline::from_steps(text.lines().map(str::to_string))
    }

    /// Builds an outline from pre-split steps, applying the same
    /// normalization as `parse` (trim, drop blanks).
    pub fn from_steps(steps: impl IntoIterator<Item = String>) -> Self {
        Outline {
            steps: steps
                .into_iter()
                .map(|step| step.trim().to_string())
                .filter(|step| !step.is_empty())
                .collect(),
        }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Renders one plain block per step with a down-arrow connector
    /// between consecutive blocks, clearing the surface's prior output
    /// first. Re-invoking on the same surface replaces, never appends.
    pub fn render_to(&self, surface: &mut impl Surface) {
        surface.clear();
        for (index, step) in self.steps.iter().enumerate() {
            if index > 0 {
                surface.push_connector();
            }
            surface.push_block(Block::plain(NodeId::new(index as u64), step.clone()));
        }
        log::debug!("outline rendered {} blocks", self.steps.len());
    }
}

/// A trait for custom document formats that can be converted into an
/// [`Outline`].
///
/// This is the extension point for feeding the one-shot renderer from
/// something other than raw text: implement it on your own parsed
/// document struct and hand the result to [`Outline::render_to`].
///
/// # Example
///
/// ```rust
/// use nagare::outline::{IntoOutline, Outline};
/// use nagare::error::OutlineConversionError;
///
/// struct Checklist {
///     title: String,
///     items: Vec<String>,
/// }
///
/// impl IntoOutline for Checklist {
///     fn into_outline(self) -> Result<Outline, OutlineConversionError> {
///         if self.items.is_empty() {
///             return Err(OutlineConversionError::ValidationError(format!(
///                 "checklist '{}' has no items",
///                 self.title
///             )));
///         }
///         Ok(Outline::from_steps(self.items))
///     }
/// }
///
/// let checklist = Checklist {
///     title: "Dispatch".to_string(),
///     items: vec!["Pick".to_string(), "Pack".to_string(), "Ship".to_string()],
/// };
/// let outline = checklist.into_outline().unwrap();
/// assert_eq!(outline.steps().len(), 3);
/// ```
pub trait IntoOutline {
    /// Consumes the object and converts it into a renderable outline.
    fn into_outline(self) -> Result<Outline, OutlineConversionError>;
}
