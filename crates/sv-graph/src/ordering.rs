//! Sibling ordering by subtree size, and positional paths.

use sv_core::{NodeId, TreePath};

use crate::graph::DocGraph;

impl DocGraph {
    /// Children ordered by descendant count, largest first.
    ///
    /// The sort is stable: siblings with equal counts keep document order.
    pub fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children: Vec<NodeId> = self.children(id).collect();
        children.sort_by_key(|&child| std::cmp::Reverse(self.descendant_count(child)));
        children
    }

    /// Positional path of a node in the sorted outline.
    pub fn outline_path(&self, id: NodeId) -> Option<TreePath> {
        self.node(id)?;
        let mut positions = Vec::new();
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            let position = self
                .sorted_children(parent)
                .iter()
                .position(|&child| child == current)?;
            positions.push(u32::try_from(position).ok()?);
            current = parent;
        }
        positions.reverse();
        Some(TreePath::from_positions(positions))
    }

    /// Node at a positional path in the sorted outline.
    pub fn node_at_path(&self, path: &TreePath) -> Option<NodeId> {
        let mut current = self.root();
        for &position in path.positions() {
            current = *self.sorted_children(current).get(position as usize)?;
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use sv_core::TreePath;

    use crate::graph::DocGraph;

    fn chain(id: &str, descendants: usize) -> serde_json::Value {
        let kids: Vec<_> = (0..descendants).map(|i| json!({"id": format!("{id}{i}")})).collect();
        json!({"id": id, "children": kids})
    }

    #[test]
    fn ties_keep_document_order() {
        let graph = DocGraph::ingest(json!({
            "id": "root",
            "children": [chain("A", 5), chain("B", 2), chain("C", 5)]
        }))
        .unwrap();
        let order: Vec<String> = graph
            .sorted_children(graph.root())
            .into_iter()
            .map(|id| graph.label(id).id)
            .collect();
        assert_eq!(order, vec!["A", "C", "B"]);
    }

    #[test]
    fn outline_path_round_trips() {
        let graph = DocGraph::ingest(json!({
            "id": "root",
            "children": [chain("A", 1), chain("B", 3)]
        }))
        .unwrap();
        for id in graph.walk_document_order() {
            let path = graph.outline_path(id).unwrap();
            assert_eq!(graph.node_at_path(&path), Some(id));
        }
        let b = graph.node_at_path(&TreePath::from_positions([0])).unwrap();
        assert_eq!(graph.label(b).id, "B");
        assert!(graph.node_at_path(&TreePath::from_positions([5])).is_none());
    }
}
