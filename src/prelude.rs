//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! nagare crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! let mut editor = FlowEditor::new(MemorySurface::new());
//! editor.add_start();
//! editor.append_activity("Collect order");
//! editor.add_end();
//! assert_eq!(editor.surface().connector_count(), 2);
//! ```

// Editor core
pub use crate::editor::FlowEditor;
pub use crate::graph::{FlowGraph, FlowNode, NodeId, NodeKind, RemovedActivity};

// Display surfaces
pub use crate::surface::{AsciiSurface, Block, Element, MemorySurface, Surface};

// One-shot outline rendering
pub use crate::outline::{IntoOutline, Outline};

// Session surface
pub use crate::session::{
    IdentityProvider, InMemoryProvider, SessionController, UserProfile,
};

// Error types
pub use crate::error::{AuthError, OutlineConversionError, ProviderError};
