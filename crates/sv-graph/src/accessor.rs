//! Uniform read-only view over raw document nodes.
//!
//! Every function here is total: missing or malformed fields fall back to
//! defaults instead of failing.

use serde_json::{Map, Value};

/// Field holding children, checked first.
pub const CHILDREN_FIELD: &str = "children";
/// Alternate field holding children.
pub const COMPONENTS_FIELD: &str = "components";
/// Marker shown when a node has neither `id` nor `name`.
pub const NO_ID: &str = "(no-id)";

/// Which field a node's children come from.
///
/// `children` wins whenever it is a non-empty array; the two fields are
/// never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChildrenSource {
    Children,
    Components,
    #[default]
    None,
}

impl ChildrenSource {
    /// Classify a raw node.
    pub fn of(node: &Value) -> Self {
        match node.as_object() {
            Some(map) => Self::of_map(map),
            None => Self::None,
        }
    }

    /// Classify an object node.
    pub fn of_map(map: &Map<String, Value>) -> Self {
        Self::classify(map.get(CHILDREN_FIELD), map.get(COMPONENTS_FIELD))
    }

    pub(crate) fn classify(children: Option<&Value>, components: Option<&Value>) -> Self {
        if non_empty_array(children) {
            Self::Children
        } else if non_empty_array(components) {
            Self::Components
        } else {
            Self::None
        }
    }

    /// Name of the source field, if any.
    pub fn field(self) -> Option<&'static str> {
        match self {
            Self::Children => Some(CHILDREN_FIELD),
            Self::Components => Some(COMPONENTS_FIELD),
            Self::None => None,
        }
    }
}

fn non_empty_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if !items.is_empty())
}

/// Display identifier and type of a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeLabel {
    pub id: String,
    /// `componentType` or `type`; empty when neither is present.
    pub kind: String,
}

impl NodeLabel {
    /// Lowercased `id` and `kind`, for substring search.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.id, self.kind).to_lowercase()
    }
}

/// Ordered child nodes.
pub fn children(node: &Value) -> &[Value] {
    let source = ChildrenSource::of(node);
    source
        .field()
        .and_then(|field| node.get(field))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn has_children(node: &Value) -> bool {
    ChildrenSource::of(node) != ChildrenSource::None
}

/// Label of a raw node.
pub fn label(node: &Value) -> NodeLabel {
    match node.as_object() {
        Some(map) => label_of_fields(map),
        None => NodeLabel {
            id: NO_ID.to_string(),
            kind: String::new(),
        },
    }
}

/// Label from an object's fields: first truthy of `id`/`name`, then of
/// `componentType`/`type`.
pub fn label_of_fields(fields: &Map<String, Value>) -> NodeLabel {
    let id = first_truthy(fields, &["id", "name"])
        .map(display_text)
        .unwrap_or_else(|| NO_ID.to_string());
    let kind = first_truthy(fields, &["componentType", "type"])
        .map(display_text)
        .unwrap_or_default();
    NodeLabel { id, kind }
}

fn first_truthy<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| is_truthy(value))
}

/// Every field except the two child-holding ones, in document order.
pub fn structure_fields(node: &Value) -> impl Iterator<Item = (&String, &Value)> {
    node.as_object()
        .into_iter()
        .flat_map(|map| map.iter())
        .filter(|(key, _)| !is_child_field(key))
}

pub fn is_child_field(key: &str) -> bool {
    key == CHILDREN_FIELD || key == COMPONENTS_FIELD
}

/// Source-data truthiness: `null`, `false`, `0` and `""` count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings render bare; everything else as compact JSON.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn children_checked_before_components() {
        let node = json!({"children": [{"id": "a"}], "components": [{"id": "b"}, {"id": "c"}]});
        assert_eq!(ChildrenSource::of(&node), ChildrenSource::Children);
        assert_eq!(children(&node).len(), 1);
    }

    #[test]
    fn empty_children_falls_through_to_components() {
        let node = json!({"children": [], "components": [{"id": "b"}]});
        assert_eq!(ChildrenSource::of(&node), ChildrenSource::Components);
        assert_eq!(children(&node)[0]["id"], "b");
        assert!(has_children(&node));
    }

    #[test]
    fn malformed_children_degrade_to_empty() {
        for node in [
            json!({"children": "nope"}),
            json!({"components": {"a": 1}}),
            json!(42),
            json!(null),
        ] {
            assert!(children(&node).is_empty());
            assert!(!has_children(&node));
        }
    }

    #[test]
    fn label_fallbacks() {
        assert_eq!(
            label(&json!({"id": "x", "name": "y", "componentType": "Button", "type": "T"})),
            NodeLabel {
                id: "x".into(),
                kind: "Button".into()
            }
        );
        assert_eq!(label(&json!({"id": "", "name": "y", "type": "T"})).id, "y");
        assert_eq!(label(&json!({"id": 0})).id, NO_ID);
        assert_eq!(label(&json!({"id": 7})).id, "7");
        assert_eq!(label(&json!({})).kind, "");
        assert_eq!(label(&json!("scalar")).id, NO_ID);
    }

    #[test]
    fn structure_fields_skip_child_fields() {
        let node = json!({"id": "n", "children": [], "components": [], "layoutQuery": "#l1"});
        let keys: Vec<&String> = structure_fields(&node).map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["id", "layoutQuery"]);
    }
}
