//! Parallel node search over an ingested graph.

use rayon::prelude::*;
use sv_core::{Id, NodeId};

use crate::graph::{DocGraph, DocNode};

/// All nodes accepted by `predicate`, in ID order.
///
/// The graph is immutable, so the scan fans out across the rayon pool.
pub fn find_nodes<F>(graph: &DocGraph, predicate: F) -> Vec<NodeId>
where
    F: Fn(NodeId, &DocNode) -> bool + Sync,
{
    graph
        .nodes
        .par_iter()
        .enumerate()
        .filter_map(|(idx, node)| {
            let id = Id::try_from_usize(idx)?;
            predicate(id, node).then_some(id)
        })
        .collect()
}
