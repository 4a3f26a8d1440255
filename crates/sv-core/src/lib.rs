//! sv-core: shared foundation for structview.
//!
//! Contains:
//! - ids (compact identifiers for graph nodes and presentation slots)
//! - path (positional paths through the materialized outline)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod path;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SvError, SvResult};
pub use ids::*;
pub use path::TreePath;
