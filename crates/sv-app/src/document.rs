//! The loaded document and the viewer state built on it.

use serde_json::{Map, Value};
use sv_core::{PresId, TreePath};
use sv_graph::{DocGraph, DocNode, dismantle};
use sv_resolve::Scope;
use sv_tree::{Outline, OutlineEvent, OutlineOptions, Source, Toggle};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Field that wraps the structural root in an envelope document.
pub const STRUCTURE_FIELD: &str = "structure";

/// Handle to the root row of a freshly loaded outline.
pub type RootHandle = PresId;

/// The structural root of a parsed document.
///
/// An object holding an object under `structure` is an envelope and its
/// `structure` is the root; any other object is its own root. Anything that
/// is not an object has no root.
pub fn normalize_root(value: &Value) -> Option<&Value> {
    let root = match value.get(STRUCTURE_FIELD) {
        Some(inner @ Value::Object(_)) => inner,
        _ => value,
    };
    root.is_object().then_some(root)
}

/// One ingested document: its graph plus the envelope fields the resolver
/// searches. Every operation on the document goes through this value.
#[derive(Debug, Clone)]
pub struct Document {
    /// The envelope minus `structure`; `None` when the root was not wrapped.
    envelope: Option<Map<String, Value>>,
    graph: DocGraph,
}

impl Document {
    pub fn from_value(value: Value) -> AppResult<Self> {
        let (envelope, root) = split_root(value)?;
        let graph = DocGraph::ingest(root)?;
        info!(
            nodes = graph.node_count(),
            depth = graph.max_depth(),
            wrapped = envelope.is_some(),
            "ingested document"
        );
        Ok(Self { envelope, graph })
    }

    pub fn graph(&self) -> &DocGraph {
        &self.graph
    }

    /// Whether the root came from a `structure` envelope.
    pub fn is_wrapped(&self) -> bool {
        self.envelope.is_some()
    }

    /// Containers for reference resolution.
    ///
    /// Without an envelope the root itself is the document; its child
    /// sequences were moved into the graph, which no reference map needs.
    pub fn scope(&self) -> Option<Scope<'_>> {
        let document = match &self.envelope {
            Some(envelope) => envelope,
            None => self.graph.node(self.graph.root()).map(DocNode::fields)?,
        };
        Some(Scope::new(document))
    }

    pub fn source(&self) -> Source<'_> {
        Source::new(&self.graph, self.scope())
    }
}

fn split_root(value: Value) -> AppResult<(Option<Map<String, Value>>, Value)> {
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            dismantle(other);
            return Err(AppError::NoRoot);
        }
    };
    if map.get(STRUCTURE_FIELD).is_some_and(Value::is_object) {
        if let Some(root) = map.remove(STRUCTURE_FIELD) {
            return Ok((Some(map), root));
        }
    }
    Ok((None, Value::Object(map)))
}

/// The current document and its outline.
#[derive(Debug, Default)]
pub struct Viewer {
    document: Option<Document>,
    outline: Outline,
}

impl Viewer {
    pub fn new(options: OutlineOptions) -> Self {
        Self {
            document: None,
            outline: Outline::new(options),
        }
    }

    /// Replace the current document and rebuild the outline from its root,
    /// expanded. A document without a root leaves the previous document and
    /// outline as they were.
    ///
    /// The outline arena is reused, so handles from the previous document
    /// come back as stale rather than aliasing new rows.
    pub fn load(&mut self, value: Value) -> AppResult<RootHandle> {
        let document = Document::from_value(value).inspect_err(|e| {
            warn!(error = %e, "document rejected");
        })?;
        let root = self.outline.materialize_root(&document.source())?;
        self.document = Some(document);
        Ok(root)
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn root(&self) -> Option<PresId> {
        self.outline.root()
    }

    pub fn expand(&mut self, id: PresId) -> AppResult<usize> {
        let (document, outline) = self.parts()?;
        Ok(outline.expand(id, &document.source())?)
    }

    pub fn collapse(&mut self, id: PresId) -> AppResult<usize> {
        self.parts()?;
        Ok(self.outline.collapse(id)?)
    }

    pub fn toggle(&mut self, id: PresId) -> AppResult<Toggle> {
        let (document, outline) = self.parts()?;
        Ok(outline.toggle(id, &document.source())?)
    }

    pub fn toggle_structure(&mut self, id: PresId) -> AppResult<Toggle> {
        let (document, outline) = self.parts()?;
        Ok(outline.toggle_structure(id, &document.source())?)
    }

    pub fn expand_all(&mut self, budget: usize) -> AppResult<usize> {
        let (document, outline) = self.parts()?;
        Ok(outline.expand_all(&document.source(), budget)?)
    }

    pub fn collapse_all(&mut self) -> AppResult<usize> {
        let (document, outline) = self.parts()?;
        Ok(outline.collapse_all(&document.source())?)
    }

    /// Expand the ancestors of `path` and return the row shown there.
    pub fn reveal(&mut self, path: &TreePath) -> AppResult<PresId> {
        let (document, outline) = self.parts()?;
        Ok(outline.reveal(path, &document.source())?)
    }

    pub fn drain_events(&mut self) -> Vec<OutlineEvent> {
        self.outline.drain_events()
    }

    fn parts(&mut self) -> AppResult<(&Document, &mut Outline)> {
        let document = self.document.as_ref().ok_or(AppError::NotLoaded)?;
        Ok((document, &mut self.outline))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels(viewer: &Viewer) -> Vec<String> {
        viewer
            .outline()
            .visible_rows()
            .iter()
            .map(|row| row.node.label().to_string())
            .collect()
    }

    #[test]
    fn wrapped_and_bare_roots_agree() {
        let bare = json!({"id": "root", "children": [{"id": "a"}]});
        let wrapped = json!({"structure": bare.clone(), "naming": {}});
        assert_eq!(normalize_root(&wrapped), Some(&bare));
        assert_eq!(normalize_root(&bare), Some(&bare));
    }

    #[test]
    fn non_object_structure_is_not_unwrapped() {
        let doc = json!({"id": "root", "structure": [1, 2]});
        assert_eq!(normalize_root(&doc), Some(&doc));
        assert_eq!(normalize_root(&json!([1, 2])), None);
        assert_eq!(normalize_root(&json!(null)), None);
    }

    #[test]
    fn load_expands_root() {
        let mut viewer = Viewer::default();
        let root = viewer
            .load(json!({"structure": {"id": "root", "children": [{"id": "a"}, {"id": "b"}]}}))
            .unwrap();
        assert_eq!(viewer.root(), Some(root));
        assert!(viewer.outline().get(root).unwrap().is_expanded());
        assert_eq!(labels(&viewer), vec!["root", "a", "b"]);
        assert!(viewer.document().unwrap().is_wrapped());
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut viewer = Viewer::default();
        viewer
            .load(json!({"id": "first", "children": [{"id": "x"}]}))
            .unwrap();

        let err = viewer.load(json!("not a document")).unwrap_err();
        assert!(matches!(err, AppError::NoRoot));
        assert_eq!(err.status(), "No root found");
        assert_eq!(labels(&viewer), vec!["first", "x"]);
    }

    #[test]
    fn reload_replaces_outline() {
        let mut viewer = Viewer::default();
        let old_root = viewer.load(json!({"id": "one"})).unwrap();
        viewer.load(json!({"id": "two"})).unwrap();
        assert_eq!(labels(&viewer), vec!["two"]);
        assert!(matches!(
            viewer.toggle(old_root),
            Err(AppError::Outline(sv_core::SvError::StaleNode { .. }))
        ));
    }

    #[test]
    fn envelope_maps_resolve_labels() {
        let mut viewer = Viewer::default();
        viewer
            .load(json!({
                "structure": {"id": "root", "children": [{"id": "c", "namingQuery": "#n"}]},
                "data": {"naming": {"n": {"name": "Footer"}}}
            }))
            .unwrap();
        assert_eq!(labels(&viewer), vec!["root", "c (Footer)"]);
    }

    #[test]
    fn bare_root_is_its_own_scope() {
        let mut viewer = Viewer::default();
        viewer
            .load(json!({
                "id": "root",
                "namingQuery": "#n",
                "naming": {"n": {"name": "Self"}}
            }))
            .unwrap();
        assert_eq!(labels(&viewer), vec!["root (Self)"]);
    }

    #[test]
    fn operations_need_a_document() {
        let mut viewer = Viewer::default();
        assert!(matches!(viewer.collapse_all(), Err(AppError::NotLoaded)));
        assert!(matches!(viewer.expand_all(10), Err(AppError::NotLoaded)));
    }
}
