//! One-shot text-to-blocks rendering.
mod common;
use common::*;
use nagare::error::OutlineConversionError;
use nagare::prelude::*;

#[test]
fn test_parse_trims_and_discards_blank_lines() {
    let outline = Outline::parse(ORDER_OUTLINE);

    assert_eq!(outline.steps(), ["Collect order", "Pack items", "Ship"]);
}

#[test]
fn test_render_produces_blocks_and_connectors() {
    let outline = Outline::parse(ORDER_OUTLINE);
    let mut surface = MemorySurface::new();

    outline.render_to(&mut surface);

    assert_eq!(surface.block_count(), 3);
    assert_eq!(surface.connector_count(), 2);
    assert_eq!(
        element_tags(&surface),
        vec!["Collect order", "->", "Pack items", "->", "Ship"]
    );

    // Outline blocks carry no delete affordance.
    assert!(surface.blocks().all(|block| !block.deletable));
}

#[test]
fn test_rerender_replaces_prior_output() {
    let mut surface = MemorySurface::new();

    Outline::parse("one\ntwo\nthree").render_to(&mut surface);
    Outline::parse("only").render_to(&mut surface);

    assert_eq!(surface.labels(), vec!["only"]);
    assert_eq!(surface.connector_count(), 0);
}

#[test]
fn test_render_over_editor_output_replaces_it() {
    let (editor, _) = order_chain();
    let mut surface = editor.into_surface();

    Outline::parse("a\nb").render_to(&mut surface);

    assert_eq!(surface.labels(), vec!["a", "b"]);
    assert_eq!(surface.connector_count(), 1);
}

#[test]
fn test_empty_text_renders_nothing() {
    let outline = Outline::parse("\n   \n\t\n");
    let mut surface = MemorySurface::new();

    outline.render_to(&mut surface);

    assert!(outline.is_empty());
    assert!(surface.is_empty());
}

#[test]
fn test_into_outline_conversion_error() {
    struct Steps(Vec<String>);

    impl IntoOutline for Steps {
        fn into_outline(self) -> Result<Outline, OutlineConversionError> {
            if self.0.is_empty() {
                return Err(OutlineConversionError::ValidationError(
                    "no steps".to_string(),
                ));
            }
            Ok(Outline::from_steps(self.0))
        }
    }

    let err = Steps(vec![]).into_outline().unwrap_err();
    assert!(err.to_string().contains("no steps"));

    let outline = Steps(vec!["  a  ".to_string(), "".to_string()])
        .into_outline()
        .unwrap();
    assert_eq!(outline.steps(), ["a"]);
}
