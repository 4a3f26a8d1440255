//! Presentation node state.

use sv_core::{NodeId, PresId, TreePath};

use crate::property::PropertyRow;

/// Open/closed state of a node or of its structure panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Toggle {
    #[default]
    Collapsed,
    Expanded,
}

impl Toggle {
    pub fn is_expanded(self) -> bool {
        self == Toggle::Expanded
    }
}

/// The non-child fields of a node, shown on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructurePanel {
    pub(crate) state: Toggle,
    pub(crate) field_count: usize,
    /// Present only while the panel is expanded.
    pub(crate) rows: Option<Vec<PropertyRow>>,
}

impl StructurePanel {
    pub fn state(&self) -> Toggle {
        self.state
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Whether the panel has anything to show at all.
    pub fn is_available(&self) -> bool {
        self.field_count > 0
    }

    pub fn rows(&self) -> &[PropertyRow] {
        self.rows.as_deref().unwrap_or(&[])
    }
}

/// Transient view of one graph node.
///
/// Owns no document data: it refers back to the graph node by ID and carries
/// only what a renderer needs for the row itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PresNode {
    pub(crate) id: PresId,
    pub(crate) node: NodeId,
    pub(crate) parent: Option<PresId>,
    pub(crate) path: TreePath,
    pub(crate) label: String,
    pub(crate) kind: String,
    pub(crate) descendants: usize,
    pub(crate) child_count: usize,
    pub(crate) state: Toggle,
    pub(crate) hydrated: bool,
    pub(crate) children: Vec<PresId>,
    pub(crate) structure: StructurePanel,
}

impl PresNode {
    pub fn id(&self) -> PresId {
        self.id
    }

    /// The graph node this row shows.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn parent(&self) -> Option<PresId> {
        self.parent
    }

    pub fn path(&self) -> &TreePath {
        &self.path
    }

    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Display identifier, with the resolved naming appended when available.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn descendant_count(&self) -> usize {
        self.descendants
    }

    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }

    pub fn state(&self) -> Toggle {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Attached child presentation nodes, in sorted order.
    pub fn children(&self) -> &[PresId] {
        &self.children
    }

    pub fn structure(&self) -> &StructurePanel {
        &self.structure
    }
}
