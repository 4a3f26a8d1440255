//! sv-tree: lazy outline materialization.
//!
//! An [`Outline`] holds the presentation nodes that are currently visible.
//! Expanding a node synthesizes presentation nodes for its direct children
//! only, ordered by subtree size; collapsing frees every presentation node
//! below it. Work per toggle is bounded by the number of direct children.
//!
//! Renderers read [`Outline::visible_rows`] and drain [`OutlineEvent`]s to
//! follow attach/detach changes.

pub mod bulk;
pub mod events;
pub mod label;
pub mod node;
pub mod outline;
pub mod property;

pub use events::OutlineEvent;
pub use node::{PresNode, StructurePanel, Toggle};
pub use outline::{Outline, OutlineOptions, Source, VisibleRow};
pub use property::{PropertyRow, PropertyValue, ScalarKind};
