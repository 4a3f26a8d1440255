//! Ingested document graph.

use serde_json::{Map, Value};
use sv_core::{Id, NodeId};

use crate::accessor::{ChildrenSource, NodeLabel, label_of_fields};
use crate::error::GraphError;

/// One ingested node: its structure fields plus its position in the graph.
///
/// The child-holding fields are stripped at ingestion; children live in the
/// graph as a contiguous ID range instead.
#[derive(Debug, Clone, PartialEq)]
pub struct DocNode {
    pub(crate) fields: Map<String, Value>,
    pub(crate) source: ChildrenSource,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: u32,
    pub(crate) first_child: u32,
    pub(crate) child_count: u32,
}

impl DocNode {
    /// All fields except `children` and `components`, in document order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn source(&self) -> ChildrenSource {
        self.source
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn child_count(&self) -> usize {
        self.child_count as usize
    }

    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }

    pub fn label(&self) -> NodeLabel {
        label_of_fields(&self.fields)
    }
}

/// Immutable document tree with precomputed descendant counts.
///
/// Nodes are stored in breadth-first order, so every node's children occupy
/// a contiguous ID range and always have larger IDs than their parent.
/// Node 0 is the root.
#[derive(Debug, Clone)]
pub struct DocGraph {
    pub(crate) nodes: Vec<DocNode>,
    pub(crate) descendants: Vec<usize>,
}

impl DocGraph {
    /// The root node (always present).
    pub fn root(&self) -> NodeId {
        Id::from_index(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[DocNode] {
        &self.nodes
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&DocNode> {
        self.nodes.get(id.as_usize())
    }

    /// Get a node by ID, as an error when absent.
    pub fn try_node(&self, id: NodeId) -> Result<&DocNode, GraphError> {
        self.node(id).ok_or(GraphError::NodeNotFound { node: id })
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> impl ExactSizeIterator<Item = NodeId> + use<> {
        let range = match self.node(id) {
            Some(node) => node.first_child..node.first_child + node.child_count,
            None => 0..0,
        };
        range.map(Id::from_index)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(DocNode::parent)
    }

    /// Precomputed descendant count (0 for unknown IDs).
    pub fn descendant_count(&self, id: NodeId) -> usize {
        self.descendants.get(id.as_usize()).copied().unwrap_or(0)
    }

    pub fn label(&self, id: NodeId) -> NodeLabel {
        self.node(id).map(DocNode::label).unwrap_or_else(|| NodeLabel {
            id: crate::accessor::NO_ID.to_string(),
            kind: String::new(),
        })
    }

    /// Deepest node depth (root is 0).
    pub fn max_depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order walk in document order (no sorting).
    pub fn walk_document_order(&self) -> DocumentOrder<'_> {
        DocumentOrder {
            graph: self,
            stack: vec![self.root()],
        }
    }
}

/// Iterator returned by [`DocGraph::walk_document_order`].
pub struct DocumentOrder<'a> {
    graph: &'a DocGraph,
    stack: Vec<NodeId>,
}

impl Iterator for DocumentOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children: Vec<NodeId> = self.graph.children(id).collect();
        self.stack.extend(children.into_iter().rev());
        Some(id)
    }
}
