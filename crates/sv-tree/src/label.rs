//! Row labels.

use serde_json::{Map, Value};
use sv_graph::accessor::label_of_fields;
use sv_resolve::{Scope, resolve};

const NAMING_FIELD: &str = "namingQuery";

/// `id (name)` when the node's naming resolves to an object with a non-blank
/// `name`, otherwise just the id.
pub fn display_label(fields: &Map<String, Value>, scope: Option<&Scope<'_>>) -> String {
    let id = label_of_fields(fields).id;
    match naming_name(fields, scope) {
        Some(name) => format!("{} ({})", id, name),
        None => id,
    }
}

/// The `name` of the node's naming entry, inline or referenced, when it is
/// not blank. Surrounding whitespace is kept as written.
pub fn naming_name(fields: &Map<String, Value>, scope: Option<&Scope<'_>>) -> Option<String> {
    let query = fields.get(NAMING_FIELD)?;
    let naming = match query {
        Value::String(_) => resolve(NAMING_FIELD, query, scope).value()?,
        Value::Object(_) => query,
        _ => return None,
    };
    let name = naming.as_object()?.get("name")?.as_str()?;
    (!name.trim().is_empty()).then(|| name.to_string())
}
