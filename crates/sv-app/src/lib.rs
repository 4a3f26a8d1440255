//! Shared application layer for structview.
//!
//! Both front ends go through this crate: it loads documents from disk,
//! normalizes them to their structural root, owns the outline for the
//! current document and provides the page-level operations (search,
//! expand/collapse all, structure report, site page listing).

pub mod document;
pub mod error;
pub mod format;
pub mod loader;
pub mod render;
pub mod report;
pub mod search;
pub mod settings;
pub mod site;

// Re-export key types for convenience
pub use document::{Document, RootHandle, Viewer, normalize_root};
pub use error::{AppError, AppResult};
pub use format::format_bytes;
pub use loader::{Format, Loaded, load_file, parse_bytes};
pub use render::render_rows;
pub use report::{json_report, structure_lines, structure_report};
pub use search::{SearchOutcome, search};
pub use settings::{ViewerSettings, load_settings};
pub use site::{SitePage, site_pages};
