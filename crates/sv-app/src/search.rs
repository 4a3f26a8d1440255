//! Label search over the whole document.

use sv_core::{NodeId, PresId, TreePath};
use sv_graph::find_nodes;
use sv_tree::label::display_label;
use tracing::debug;

use crate::document::{Document, Viewer};
use crate::error::{AppError, AppResult};

/// Result of [`search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Every matching graph node, in ID order.
    pub matches: Vec<NodeId>,
    /// Rows made visible for the first matches.
    pub revealed: Vec<PresId>,
}

impl SearchOutcome {
    /// More matched than were revealed.
    pub fn is_truncated(&self) -> bool {
        self.matches.len() > self.revealed.len()
    }
}

/// Nodes whose label and type contain `query`, ignoring case.
///
/// The query is trimmed; a blank query matches nothing.
pub fn matching_nodes(document: &Document, query: &str, naming_in_labels: bool) -> Vec<NodeId> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    let scope = document.scope();
    find_nodes(document.graph(), |_, node| {
        let names = node.label();
        let label = if naming_in_labels {
            display_label(node.fields(), scope.as_ref())
        } else {
            names.id
        };
        format!("{} {}", label, names.kind)
            .to_lowercase()
            .contains(&needle)
    })
}

/// Find matches and expand the outline down to the first `reveal_limit` of
/// them.
pub fn search(viewer: &mut Viewer, query: &str, reveal_limit: usize) -> AppResult<SearchOutcome> {
    let document = viewer.document().ok_or(AppError::NotLoaded)?;
    let naming = viewer.outline().options().naming_in_labels;
    let matches = matching_nodes(document, query, naming);
    let paths: Vec<TreePath> = matches
        .iter()
        .take(reveal_limit)
        .filter_map(|&id| document.graph().outline_path(id))
        .collect();

    let mut revealed = Vec::with_capacity(paths.len());
    for path in &paths {
        revealed.push(viewer.reveal(path)?);
    }
    debug!(query, matches = matches.len(), revealed = revealed.len(), "search");
    Ok(SearchOutcome { matches, revealed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn viewer() -> Viewer {
        let mut viewer = Viewer::default();
        viewer
            .load(json!({
                "structure": {
                    "id": "page",
                    "children": [
                        {"id": "header", "type": "Section", "children": [
                            {"id": "logo", "componentType": "Image"},
                            {"id": "menu", "namingQuery": "#m"}
                        ]},
                        {"id": "footer", "type": "Section"}
                    ]
                },
                "naming": {"m": {"name": "Main Navigation"}}
            }))
            .unwrap();
        viewer
    }

    fn visible(viewer: &Viewer) -> Vec<String> {
        viewer
            .outline()
            .visible_rows()
            .iter()
            .map(|row| row.node.label().to_string())
            .collect()
    }

    #[test]
    fn matches_type_and_reveals_nested_rows() {
        let mut viewer = viewer();
        let outcome = search(&mut viewer, "  IMAGE ", 10).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.revealed.len(), 1);
        assert!(visible(&viewer).contains(&"logo".to_string()));
    }

    #[test]
    fn naming_is_searchable() {
        let mut viewer = viewer();
        let outcome = search(&mut viewer, "navigation", 10).unwrap();
        let row = viewer.outline().get(outcome.revealed[0]).unwrap();
        assert_eq!(row.label(), "menu (Main Navigation)");
    }

    #[test]
    fn blank_query_matches_nothing() {
        let mut viewer = viewer();
        let outcome = search(&mut viewer, "   ", 10).unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(visible(&viewer), vec!["page", "header", "footer"]);
    }

    #[test]
    fn reveal_limit_truncates() {
        let mut viewer = viewer();
        let outcome = search(&mut viewer, "section", 1).unwrap();
        assert_eq!(outcome.matches.len(), 2);
        assert!(outcome.is_truncated());
    }
}
