//! Structure panel rows.

use serde_json::{Map, Value};
use sv_resolve::{Resolved, Scope, is_query_field, resolve};

/// Kind of a scalar property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Text,
    Number,
    Boolean,
}

/// What a property shows, after query resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    /// A query field whose reference is in no map.
    Unresolved { original: String },
    /// Entry names with one-line summaries of their values.
    Object { entries: Vec<(String, String)> },
    Array { len: usize },
    Scalar { text: String, kind: ScalarKind },
}

/// One line of a structure panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRow {
    pub key: String,
    pub value: PropertyValue,
    /// The query string a looked-up value came from.
    pub provenance: Option<String>,
}

impl PropertyRow {
    /// Single-line rendering of the value.
    pub fn summary(&self) -> String {
        let resolved_from = self
            .provenance
            .as_ref()
            .map(|query| format!(" [resolved from {}]", query))
            .unwrap_or_default();
        match &self.value {
            PropertyValue::Null => "null".to_string(),
            PropertyValue::Unresolved { original } => format!("null ({})", original),
            PropertyValue::Object { entries } => {
                format!("{{...}} ({} properties){}", entries.len(), resolved_from)
            }
            PropertyValue::Array { len } => format!("[Array({})]{}", len, resolved_from),
            PropertyValue::Scalar { text, .. } => text.clone(),
        }
    }

    /// Hover text explaining where the value came from.
    pub fn tooltip(&self) -> Option<String> {
        match (&self.value, &self.provenance) {
            (PropertyValue::Unresolved { original }, _) => {
                Some(format!("Query not found in data map: {}", original))
            }
            (_, Some(query)) => Some(format!("Original query: {}", query)),
            _ => None,
        }
    }
}

/// Rows for every structure field, resolving query fields against `scope`.
pub fn build_rows(fields: &Map<String, Value>, scope: Option<&Scope<'_>>) -> Vec<PropertyRow> {
    fields
        .iter()
        .map(|(key, raw)| {
            if !is_query_field(key) {
                return PropertyRow {
                    key: key.clone(),
                    value: describe(raw),
                    provenance: None,
                };
            }
            match resolve(key, raw, scope) {
                Resolved::Inline(value) => PropertyRow {
                    key: key.clone(),
                    value: describe(value),
                    provenance: None,
                },
                Resolved::Found { value, .. } => PropertyRow {
                    key: key.clone(),
                    value: describe(value),
                    provenance: raw.as_str().map(str::to_string),
                },
                Resolved::Unresolved { original, .. } => PropertyRow {
                    key: key.clone(),
                    value: PropertyValue::Unresolved { original },
                    provenance: None,
                },
            }
        })
        .collect()
}

fn describe(value: &Value) -> PropertyValue {
    match value {
        Value::Null => PropertyValue::Null,
        Value::Object(map) => PropertyValue::Object {
            entries: map
                .iter()
                .map(|(k, v)| (k.clone(), nested_summary(v)))
                .collect(),
        },
        Value::Array(items) => PropertyValue::Array { len: items.len() },
        Value::String(s) => PropertyValue::Scalar {
            text: s.clone(),
            kind: ScalarKind::Text,
        },
        Value::Number(n) => PropertyValue::Scalar {
            text: n.to_string(),
            kind: ScalarKind::Number,
        },
        Value::Bool(b) => PropertyValue::Scalar {
            text: b.to_string(),
            kind: ScalarKind::Boolean,
        },
    }
}

fn nested_summary(value: &Value) -> String {
    match value {
        Value::Array(items) => format!("[Array({})]", items.len()),
        Value::Object(_) => "{Object}".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
