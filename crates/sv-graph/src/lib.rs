//! sv-graph: document graph layer for structview.
//!
//! Provides:
//! - Node accessors over raw JSON nodes (children, labels, structure fields)
//! - The reference descendant counter
//! - An ingested, immutable `DocGraph` with compact child ranges and
//!   descendant counts precomputed bottom-up
//! - Parallel node search
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sv_graph::DocGraph;
//!
//! let graph = DocGraph::ingest(json!({
//!     "id": "root",
//!     "children": [{ "id": "a", "children": [{ "id": "a1" }] }, { "id": "b" }]
//! }))
//! .unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.descendant_count(graph.root()), 3);
//! ```

pub mod accessor;
pub mod builder;
pub mod count;
pub mod error;
pub mod graph;
pub mod ordering;
pub mod search;

// Re-exports for ergonomics
pub use accessor::{ChildrenSource, NO_ID, NodeLabel};
pub use builder::dismantle;
pub use count::descendant_count;
pub use error::GraphError;
pub use graph::{DocGraph, DocNode};
pub use search::find_nodes;
