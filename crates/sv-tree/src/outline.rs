//! The presentation arena and the expand/collapse state machine.

use std::collections::BTreeMap;
use std::ops::Bound;

use sv_core::{Id, NodeId, PresId, SvError, SvResult, TreePath};
use sv_graph::DocGraph;
use sv_resolve::Scope;
use tracing::debug;

use crate::events::OutlineEvent;
use crate::label::display_label;
use crate::node::{PresNode, StructurePanel, Toggle};
use crate::property::build_rows;

/// What the outline materializes from: one document's graph and its
/// resolution scope.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub graph: &'a DocGraph,
    pub scope: Option<Scope<'a>>,
}

impl<'a> Source<'a> {
    pub fn new(graph: &'a DocGraph, scope: Option<Scope<'a>>) -> Self {
        Self { graph, scope }
    }
}

/// Presentation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Append resolved `namingQuery` names to row labels.
    pub naming_in_labels: bool,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            naming_in_labels: true,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub node: &'a PresNode,
    pub depth: usize,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<PresNode>,
}

/// Arena of presentation nodes, indexed by slot and by path.
///
/// Freed slots go back to a pool; their generation is bumped so handles to
/// the old occupant stop resolving.
///
/// Every attach, detach and panel change queues an [`OutlineEvent`]. The queue
/// is only emptied by [`Outline::drain_events`], so owners must drain it after
/// each batch of operations.
#[derive(Debug, Default)]
pub struct Outline {
    slots: Vec<Slot>,
    free: Vec<Id>,
    by_path: BTreeMap<TreePath, PresId>,
    root: Option<PresId>,
    events: Vec<OutlineEvent>,
    options: OutlineOptions,
}

impl Outline {
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> OutlineOptions {
        self.options
    }

    /// Discard everything and build the root of `source`, expanded.
    pub fn materialize_root(&mut self, source: &Source<'_>) -> SvResult<PresId> {
        self.clear();
        let graph_root = source.graph.root();
        let root = self.attach(source, graph_root, None, TreePath::root(), 0)?;
        self.root = Some(root);
        self.expand(root, source)?;
        Ok(root)
    }

    /// Drop every presentation node.
    pub fn clear(&mut self) {
        let occupied: Vec<Id> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.node.is_some())
            .filter_map(|(idx, _)| Id::try_from_usize(idx))
            .collect();
        for slot in occupied {
            self.release(slot);
        }
        self.by_path.clear();
        self.root = None;
        self.events.push(OutlineEvent::Cleared);
    }

    pub fn root(&self) -> Option<PresId> {
        self.root
    }

    /// Number of live presentation nodes.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    pub fn get(&self, id: PresId) -> Option<&PresNode> {
        self.slots
            .get(id.slot().as_usize())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: PresId) -> Option<&mut PresNode> {
        self.slots
            .get_mut(id.slot().as_usize())
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_mut())
    }

    fn live(&self, id: PresId) -> SvResult<&PresNode> {
        self.get(id).ok_or_else(|| stale(id))
    }

    fn live_mut(&mut self, id: PresId) -> SvResult<&mut PresNode> {
        self.get_mut(id).ok_or_else(|| stale(id))
    }

    /// Presentation node currently attached at `path`.
    pub fn find(&self, path: &TreePath) -> Option<PresId> {
        self.by_path.get(path).copied()
    }

    /// Hand out pending change notifications, oldest first, and empty the queue.
    pub fn drain_events(&mut self) -> Vec<OutlineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Collapsed → Expanded. Returns how many children were attached.
    ///
    /// The first expansion synthesizes one collapsed presentation node per
    /// direct child, largest subtree first (stable for ties). Expanding an
    /// already hydrated node changes nothing.
    pub fn expand(&mut self, id: PresId, source: &Source<'_>) -> SvResult<usize> {
        let node = self.live(id)?;
        if node.hydrated {
            self.live_mut(id)?.state = Toggle::Expanded;
            return Ok(0);
        }
        let graph_node = node.node;
        let path = node.path.clone();
        source.graph.try_node(graph_node)?;

        let sorted = source.graph.sorted_children(graph_node);
        let mut children = Vec::with_capacity(sorted.len());
        for (position, child) in sorted.into_iter().enumerate() {
            let child_path = path.child(u32::try_from(position).map_err(|_| SvError::IndexOob {
                what: "child position",
                index: position,
                len: u32::MAX as usize,
            })?);
            children.push(self.attach(source, child, Some(id), child_path, position)?);
        }

        let attached = children.len();
        let node = self.live_mut(id)?;
        node.children = children;
        node.hydrated = true;
        node.state = Toggle::Expanded;
        debug!(path = %path, attached, "expanded outline node");
        Ok(attached)
    }

    /// Expanded → Collapsed. Returns how many presentation nodes were freed.
    ///
    /// Frees every presentation node below `id`, so the next expansion
    /// rebuilds from scratch.
    pub fn collapse(&mut self, id: PresId) -> SvResult<usize> {
        let path = self.live(id)?.path.clone();
        let doomed: Vec<(TreePath, PresId)> = self
            .by_path
            .range((Bound::Excluded(path.clone()), Bound::Unbounded))
            .take_while(|(p, _)| p.is_descendant_of(&path))
            .map(|(p, pid)| (p.clone(), *pid))
            .collect();

        for (p, pid) in &doomed {
            self.by_path.remove(p);
            self.release(pid.slot());
            self.events.push(OutlineEvent::Detached {
                node: *pid,
                path: p.clone(),
            });
        }

        let node = self.live_mut(id)?;
        node.children.clear();
        node.hydrated = false;
        node.state = Toggle::Collapsed;
        debug!(path = %path, freed = doomed.len(), "collapsed outline node");
        Ok(doomed.len())
    }

    /// Flip a node's state; returns the new state.
    pub fn toggle(&mut self, id: PresId, source: &Source<'_>) -> SvResult<Toggle> {
        if self.live(id)?.is_expanded() {
            self.collapse(id)?;
            Ok(Toggle::Collapsed)
        } else {
            self.expand(id, source)?;
            Ok(Toggle::Expanded)
        }
    }

    /// Open a node's structure panel, resolving its query fields.
    pub fn show_structure(&mut self, id: PresId, source: &Source<'_>) -> SvResult<()> {
        let node = self.live(id)?;
        if node.structure.rows.is_some() {
            self.live_mut(id)?.structure.state = Toggle::Expanded;
            return Ok(());
        }
        let fields = source.graph.try_node(node.node)?.fields();
        let rows = build_rows(fields, source.scope.as_ref());
        let panel = &mut self.live_mut(id)?.structure;
        panel.rows = Some(rows);
        panel.state = Toggle::Expanded;
        self.events.push(OutlineEvent::StructureShown { node: id });
        Ok(())
    }

    /// Close a node's structure panel and drop its rows.
    pub fn hide_structure(&mut self, id: PresId) -> SvResult<()> {
        let panel = &mut self.live_mut(id)?.structure;
        let had_rows = panel.rows.take().is_some();
        panel.state = Toggle::Collapsed;
        if had_rows {
            self.events.push(OutlineEvent::StructureHidden { node: id });
        }
        Ok(())
    }

    pub fn toggle_structure(&mut self, id: PresId, source: &Source<'_>) -> SvResult<Toggle> {
        if self.live(id)?.structure.state.is_expanded() {
            self.hide_structure(id)?;
            Ok(Toggle::Collapsed)
        } else {
            self.show_structure(id, source)?;
            Ok(Toggle::Expanded)
        }
    }

    /// Rows to draw: the root, then depth-first through expanded nodes.
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        let mut rows = Vec::new();
        let mut stack: Vec<PresId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            rows.push(VisibleRow {
                node,
                depth: node.depth(),
            });
            if node.is_expanded() {
                stack.extend(node.children.iter().rev());
            }
        }
        rows
    }

    fn attach(
        &mut self,
        source: &Source<'_>,
        graph_node: NodeId,
        parent: Option<PresId>,
        path: TreePath,
        position: usize,
    ) -> SvResult<PresId> {
        let doc_node = source.graph.try_node(graph_node)?;
        let names = doc_node.label();
        let label = if self.options.naming_in_labels {
            display_label(doc_node.fields(), source.scope.as_ref())
        } else {
            names.id
        };
        let slot = self.reserve()?;
        let generation = self.slots[slot.as_usize()].generation;
        let id = PresId::new(slot, generation);

        self.slots[slot.as_usize()].node = Some(PresNode {
            id,
            node: graph_node,
            parent,
            path: path.clone(),
            label,
            kind: names.kind,
            descendants: source.graph.descendant_count(graph_node),
            child_count: doc_node.child_count(),
            state: Toggle::Collapsed,
            hydrated: false,
            children: Vec::new(),
            structure: StructurePanel {
                field_count: doc_node.fields().len(),
                ..StructurePanel::default()
            },
        });
        self.by_path.insert(path.clone(), id);
        self.events.push(OutlineEvent::Attached {
            node: id,
            parent,
            path,
            position,
        });
        Ok(id)
    }

    fn reserve(&mut self) -> SvResult<Id> {
        if let Some(slot) = self.free.pop() {
            return Ok(slot);
        }
        let slot = Id::try_from_usize(self.slots.len()).ok_or(SvError::IndexOob {
            what: "presentation slot",
            index: self.slots.len(),
            len: u32::MAX as usize,
        })?;
        self.slots.push(Slot::default());
        Ok(slot)
    }

    fn release(&mut self, slot: Id) {
        if let Some(entry) = self.slots.get_mut(slot.as_usize()) {
            if entry.node.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(slot);
            }
        }
    }
}

fn stale(id: PresId) -> SvError {
    SvError::StaleNode {
        slot: id.to_string(),
    }
}
