//! Query value resolution.

use serde_json::Value;
use tracing::debug;

use crate::registry::{map_for, map_names};
use crate::scope::Scope;

/// Which search pass found a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// The map registered for the field.
    Primary,
    /// Any registered map, scanned in registry order.
    Fallback,
}

/// Outcome of resolving one query field.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<'a> {
    /// Not a string reference, or no document in scope: the value as given.
    Inline(&'a Value),
    /// Found in `map`. `value` may itself be `null`.
    Found {
        value: &'a Value,
        map: &'static str,
        pass: Pass,
    },
    /// No map holds the reference.
    Unresolved { original: String, query_id: String },
}

impl<'a> Resolved<'a> {
    /// The value to display, `None` for an unresolved reference.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Resolved::Inline(value) | Resolved::Found { value, .. } => Some(*value),
            Resolved::Unresolved { .. } => None,
        }
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolved::Unresolved { .. })
    }
}

/// Resolve `value` of query field `field` against the containers in `scope`.
///
/// Never fails: a miss yields [`Resolved::Unresolved`] carrying the original
/// query string.
pub fn resolve<'a>(field: &str, value: &'a Value, scope: Option<&Scope<'a>>) -> Resolved<'a> {
    let (Some(scope), Value::String(raw)) = (scope, value) else {
        return Resolved::Inline(value);
    };

    let query_id = raw.strip_prefix('#').unwrap_or(raw.as_str());
    let mut keys = vec![query_id];
    if query_id != raw.as_str() {
        keys.push(raw.as_str());
    }

    if let Some(map) = map_for(field) {
        if let Some(found) = search_map(scope, map, &keys) {
            debug!(field, query = %raw, map, "resolved via registered map");
            return Resolved::Found {
                value: found,
                map,
                pass: Pass::Primary,
            };
        }
    }

    for map in map_names() {
        if let Some(found) = search_map(scope, map, &keys) {
            debug!(field, query = %raw, map, "resolved via fallback scan");
            return Resolved::Found {
                value: found,
                map,
                pass: Pass::Fallback,
            };
        }
    }

    debug!(field, query = %raw, "reference not found in any map");
    Resolved::Unresolved {
        original: raw.clone(),
        query_id: query_id.to_string(),
    }
}

/// First hit for any key in map `name`, containers outermost, keys innermost.
fn search_map<'a>(scope: &Scope<'a>, name: &str, keys: &[&str]) -> Option<&'a Value> {
    scope.containers().find_map(|container| {
        let map = container.get(name)?;
        keys.iter().find_map(|key| lookup(map, key))
    })
}

/// Key lookup in a map-like value. Arrays answer canonical decimal indices.
fn lookup<'a>(map: &'a Value, key: &str) -> Option<&'a Value> {
    match map {
        Value::Object(entries) => entries.get(key),
        Value::Array(items) => {
            let index: usize = key.parse().ok()?;
            if index.to_string() != key {
                return None;
            }
            items.get(index)
        }
        _ => None,
    }
}
