//! Document ingestion.

use std::collections::VecDeque;

use serde_json::{Map, Value};
use sv_core::{Id, NodeId};
use tracing::debug;

use crate::accessor::{CHILDREN_FIELD, COMPONENTS_FIELD, ChildrenSource};
use crate::error::GraphError;
use crate::graph::{DocGraph, DocNode};

/// A node waiting in the breadth-first queue.
struct Pending {
    value: Value,
    parent: Option<NodeId>,
    depth: u32,
}

impl DocGraph {
    /// Ingest a document root, consuming it.
    ///
    /// Each node's children source is resolved exactly once here. Nodes are
    /// numbered breadth-first so that sibling IDs are contiguous, then
    /// descendant counts are accumulated bottom-up in a single reverse pass.
    pub fn ingest(root: Value) -> Result<DocGraph, GraphError> {
        let mut nodes: Vec<DocNode> = Vec::new();
        let mut queue = VecDeque::from([Pending {
            value: root,
            parent: None,
            depth: 0,
        }]);

        while let Some(pending) = queue.pop_front() {
            let id = Id::try_from_usize(nodes.len())
                .ok_or(GraphError::TooManyNodes { count: nodes.len() })?;
            let (fields, source, kids) = split_node(pending.value);

            // Children get the IDs right after everything already queued.
            let first_child = nodes.len() + 1 + queue.len();
            let child_count = u32::try_from(kids.len())
                .map_err(|_| GraphError::TooManyNodes { count: kids.len() })?;
            let first_child = u32::try_from(first_child)
                .map_err(|_| GraphError::TooManyNodes { count: first_child })?;

            queue.extend(kids.into_iter().map(|value| Pending {
                value,
                parent: Some(id),
                depth: pending.depth + 1,
            }));

            nodes.push(DocNode {
                fields,
                source,
                parent: pending.parent,
                depth: pending.depth,
                first_child,
                child_count,
            });
        }

        let descendants = accumulate_descendants(&nodes);
        debug!(nodes = nodes.len(), "ingested document graph");

        Ok(DocGraph { nodes, descendants })
    }
}

/// Split a raw node into its structure fields, children source and children.
fn split_node(value: Value) -> (Map<String, Value>, ChildrenSource, Vec<Value>) {
    let Value::Object(map) = value else {
        return (Map::new(), ChildrenSource::None, Vec::new());
    };

    let mut fields = Map::new();
    let mut children = None;
    let mut components = None;
    for (key, value) in map {
        match key.as_str() {
            CHILDREN_FIELD => children = Some(value),
            COMPONENTS_FIELD => components = Some(value),
            _ => {
                fields.insert(key, value);
            }
        }
    }

    let source = ChildrenSource::classify(children.as_ref(), components.as_ref());
    let (kids, unused) = match source {
        ChildrenSource::Children => (children, components),
        ChildrenSource::Components => (components, children),
        ChildrenSource::None => {
            children.into_iter().for_each(dismantle);
            (None, components)
        }
    };
    unused.into_iter().for_each(dismantle);
    let kids = match kids {
        Some(Value::Array(items)) => items,
        Some(other) => {
            dismantle(other);
            Vec::new()
        }
        None => Vec::new(),
    };
    (fields, source, kids)
}

/// Drop a value without recursing, however deeply it nests.
///
/// `Value`'s own destructor recurses once per nesting level, which overflows
/// the stack on documents thousands of levels deep.
pub fn dismantle(value: Value) {
    let mut stack = vec![value];
    while let Some(value) = stack.pop() {
        match value {
            Value::Array(items) => stack.extend(items),
            Value::Object(map) => stack.extend(map.into_iter().map(|(_, v)| v)),
            _ => {}
        }
    }
}

/// Children always have larger IDs than their parent, so one reverse sweep
/// sees every child before its parent.
fn accumulate_descendants(nodes: &[DocNode]) -> Vec<usize> {
    let mut descendants = vec![0usize; nodes.len()];
    for (idx, node) in nodes.iter().enumerate().rev() {
        let start = node.first_child as usize;
        let end = start + node.child_count as usize;
        let below: usize = descendants[start..end].iter().sum();
        descendants[idx] = node.child_count as usize + below;
    }
    descendants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::descendant_count;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "id": "root",
            "children": [
                {"id": "A", "components": [{"id": "A1"}, {"id": "A2", "children": [{"id": "A2x"}]}]},
                {"id": "B"},
                {"id": "C", "children": [{"id": "C1"}]}
            ]
        })
    }

    #[test]
    fn ingest_strips_child_fields() {
        let graph = DocGraph::ingest(sample()).unwrap();
        let root = graph.node(graph.root()).unwrap();
        assert!(root.fields().get("children").is_none());
        assert_eq!(root.source(), ChildrenSource::Children);
        assert_eq!(root.child_count(), 3);
    }

    #[test]
    fn sibling_ids_are_contiguous() {
        let graph = DocGraph::ingest(sample()).unwrap();
        let kids: Vec<u32> = graph.children(graph.root()).map(|id| id.index()).collect();
        assert_eq!(kids, vec![1, 2, 3]);
        for id in graph.children(graph.root()) {
            assert_eq!(graph.parent(id), Some(graph.root()));
        }
    }

    #[test]
    fn precomputed_counts_match_reference() {
        let doc = sample();
        let expected = descendant_count(&doc);
        let graph = DocGraph::ingest(doc).unwrap();
        assert_eq!(graph.descendant_count(graph.root()), expected);
        assert_eq!(expected, 7);
    }

    #[test]
    fn scalar_children_are_leaves() {
        let graph = DocGraph::ingest(json!({"children": ["x", 3, null]})).unwrap();
        assert_eq!(graph.node_count(), 4);
        for id in graph.children(graph.root()) {
            let node = graph.node(id).unwrap();
            assert!(node.fields().is_empty());
            assert!(!node.has_children());
        }
    }

    /// A single-child chain `depth` levels deep, built by moving each level
    /// into the next so no step copies or drops the tree recursively.
    fn chain(depth: usize, field: &str) -> Value {
        let mut node = json!({"id": "leaf"});
        for _ in 0..depth {
            let mut map = Map::new();
            map.insert(field.to_string(), Value::Array(vec![node]));
            node = Value::Object(map);
        }
        node
    }

    #[test]
    fn deep_chain_ingests_iteratively() {
        let graph = DocGraph::ingest(chain(20_000, CHILDREN_FIELD)).unwrap();
        assert_eq!(graph.node_count(), 20_001);
        assert_eq!(graph.descendant_count(graph.root()), 20_000);
        assert_eq!(graph.max_depth(), 20_000);
    }

    #[test]
    fn unused_deep_sequence_is_discarded_safely() {
        let mut map = Map::new();
        map.insert(CHILDREN_FIELD.to_string(), json!([{"id": "kept"}]));
        let deep = chain(50_000, COMPONENTS_FIELD);
        map.insert(COMPONENTS_FIELD.to_string(), Value::Array(vec![deep]));
        let graph = DocGraph::ingest(Value::Object(map)).unwrap();
        assert_eq!(graph.node_count(), 2);
        let kept = graph.children(graph.root()).next().unwrap();
        assert_eq!(graph.label(kept).id, "kept");
    }

    #[test]
    fn dismantle_handles_deep_nesting() {
        dismantle(chain(100_000, CHILDREN_FIELD));
        dismantle(json!({"a": [1, {"b": null}], "c": "d"}));
    }
}
