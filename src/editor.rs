use crate::graph::{FlowGraph, NodeId, NodeKind, RemovedActivity};
use crate::surface::{Block, Surface};

#[cfg(feature = "debug-tools")]
use std::fs;

/// The flow graph editor: owns the chain state and a display surface, and
/// keeps the two in step.
///
/// Every mutating operation updates the surface immediately and
/// synchronously; there is no deferred render pass. Precondition
/// violations (duplicate start, premature end, stale removal, blank
/// label) are silent no-ops signaled only through the return value.
///
/// One editor is constructed per document session. `reset` clears both
/// the chain and the surface for a fresh session; node ids are never
/// reused across a reset.
pub struct FlowEditor<S: Surface> {
    graph: FlowGraph,
    surface: S,
}

impl<S: Surface> FlowEditor<S> {
    pub fn new(surface: S) -> Self {
        FlowEditor {
            graph: FlowGraph::new(),
            surface,
        }
    }

    /// Creates the start marker and renders it as the first element of
    /// the surface. Idempotent: a second call is a no-op returning `None`.
    ///
    /// When activities already exist, the marker is connected to the
    /// first of them so the adjacency invariant holds at creation time.
    pub fn add_start(&mut self) -> Option<NodeId> {
        let has_activities = self.graph.activity_count() > 0;
        let Some(id) = self.graph.add_start() else {
            log::debug!("add_start ignored: start marker already present");
            return None;
        };
        self.surface.insert_block(0, Block::marker(id, NodeKind::Start));
        if has_activities {
            self.surface.insert_connector(1);
        }
        log::debug!("added start marker {}", id);
        Some(id)
    }

    /// Appends an activity block to the end of the chain. A connector is
    /// rendered from the current display predecessor (last activity, else
    /// the start marker) when one exists.
    ///
    /// Blank labels are a no-op returning `None`; callers are expected to
    /// validate user input before invoking.
    pub fn append_activity(&mut self, label: &str) -> Option<NodeId> {
        let has_predecessor = self.graph.start().is_some() || self.graph.activity_count() > 0;
        let Some(id) = self.graph.append_activity(label) else {
            log::debug!("append_activity ignored: blank label");
            return None;
        };
        if has_predecessor {
            self.surface.push_connector();
        }
        self.surface.push_block(Block::activity(id, label));
        log::debug!("appended activity {} ({:?})", id, label);
        Some(id)
    }

    /// Creates the end marker after the last activity, connected to it.
    /// A no-op returning `None` unless at least one activity exists and
    /// no end marker exists yet.
    pub fn add_end(&mut self) -> Option<NodeId> {
        let Some(id) = self.graph.add_end() else {
            log::debug!("add_end ignored: no activity yet, or end marker already present");
            return None;
        };
        self.surface.push_connector();
        self.surface.push_block(Block::marker(id, NodeKind::End));
        log::debug!("added end marker {}", id);
        Some(id)
    }

    /// Removes the activity with the given id, resolving it to its live
    /// position first, so ids captured before earlier deletions keep
    /// targeting the right node. Stale and unknown ids are no-ops.
    ///
    /// Exactly one connector is removed alongside the block: the one
    /// whose ordinal among all rendered connectors equals the removed
    /// position minus one (none when the first activity is removed). The
    /// surviving neighbors are NOT re-linked with a fresh connector; a
    /// middle deletion leaves the rendering under-connected, which
    /// `connector_deficit` reports.
    pub fn remove_activity(&mut self, id: NodeId) -> Option<RemovedActivity> {
        let Some(removed) = self.graph.remove_activity(id) else {
            log::debug!("remove_activity ignored: {} is not a live activity", id);
            return None;
        };
        self.surface.remove_block(id);
        if removed.position > 0 {
            self.surface.remove_connector_at(removed.position - 1);
        }
        log::debug!(
            "removed activity {} from position {}",
            id,
            removed.position
        );
        Some(removed)
    }

    /// Clears the chain and the surface for a fresh document session.
    pub fn reset(&mut self) {
        self.graph.reset();
        self.surface.clear();
        log::debug!("editor reset");
    }

    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// How many connectors the rendering is missing relative to the
    /// chain's derived adjacency. Zero for any build-up sequence; one per
    /// un-relinked middle deletion.
    pub fn connector_deficit(&self) -> usize {
        self.graph
            .expected_connector_count()
            .saturating_sub(self.surface.connector_count())
    }
}

#[cfg(feature = "debug-tools")]
impl<S: Surface + serde::Serialize> FlowEditor<S> {
    /// Writes the surface's element list as pretty-printed JSON, for
    /// offline inspection of what a host would currently display.
    pub fn dump_surface(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.surface).map_err(std::io::Error::other)?;
        if let Some(parent) = std::path::Path::new(path).parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
    }
}
