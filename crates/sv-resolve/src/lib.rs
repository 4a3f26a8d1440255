//! sv-resolve: reference resolution for `*Query` fields.
//!
//! A query field holds either an inline value or a string reference such as
//! `"#x1"`. References are looked up in named maps held by the document (or
//! by its `data` object). The field name picks the primary map through the
//! [`registry`]; when that misses, every registered map is scanned.
//!
//! ```
//! use serde_json::json;
//! use sv_resolve::{Resolved, Scope, resolve};
//!
//! let doc = json!({"naming": {"x1": {"name": "Header"}}});
//! let scope = Scope::new(doc.as_object().unwrap());
//! let query = json!("#x1");
//!
//! match resolve("namingQuery", &query, Some(&scope)) {
//!     Resolved::Found { value, .. } => assert_eq!(value["name"], "Header"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

pub mod registry;
pub mod resolve;
pub mod scope;

pub use registry::{QUERY_SUFFIX, REFERENCE_MAPS, is_query_field, map_for};
pub use resolve::{Pass, Resolved, resolve};
pub use scope::Scope;
