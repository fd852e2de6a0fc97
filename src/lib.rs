//! # Nagare - Linear Flow-Graph Editor Engine
//!
//! **Nagare** is the engine of a flowchart builder: an in-memory model of an
//! ordered chain of nodes (optional start marker, labeled activities, optional
//! end marker) with append, connect, and delete operations, mirrored
//! synchronously into a pluggable display surface.
//!
//! ## Core Workflow
//!
//! The engine is host-agnostic. It operates against the [`surface::Surface`]
//! trait, the abstraction of whatever actually displays the chain. The primary
//! workflow is:
//!
//! 1.  **Pick a Surface**: use the bundled [`surface::MemorySurface`] (structural
//!     element list) or [`surface::AsciiSurface`] (block/arrow art), or implement
//!     `Surface` for your own host.
//! 2.  **Drive the Editor**: construct a [`editor::FlowEditor`] over the surface and
//!     apply user actions: `add_start`, `append_activity`, `add_end`,
//!     `remove_activity`. Every mutation renders immediately; invalid actions
//!     are silent no-ops signaled through the return value.
//! 3.  **Inspect**: read the chain through [`graph::FlowGraph`] queries and the
//!     rendering through the surface.
//!
//! Two independent side surfaces round out a full flowchart-builder host: the
//! one-shot [`outline::Outline`] renderer (multi-line text to a block/arrow
//! column, no editor state involved) and the [`session::SessionController`]
//! (login overlay driven by a boolean session signal over a pluggable
//! [`session::IdentityProvider`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use nagare::prelude::*;
//!
//! let mut editor = FlowEditor::new(MemorySurface::new());
//!
//! editor.add_start();
//! let collect = editor.append_activity("Collect order").unwrap();
//! editor.append_activity("Pack items");
//! editor.append_activity("Ship");
//! editor.add_end();
//!
//! // start + 3 activities + end, connected in display order
//! assert_eq!(editor.surface().block_count(), 5);
//! assert_eq!(editor.surface().connector_count(), 4);
//!
//! // Deletion is keyed by the id captured at append time, so it stays
//! // correct no matter what was deleted in between.
//! editor.remove_activity(collect);
//! assert_eq!(editor.graph().activity_count(), 2);
//! ```

pub mod editor;
pub mod error;
pub mod graph;
pub mod outline;
pub mod prelude;
pub mod session;
pub mod surface;
