//! Resolver behaviour on document-shaped inputs.

use proptest::prelude::*;
use serde_json::{Value, json};
use sv_resolve::{Pass, REFERENCE_MAPS, Resolved, Scope, resolve};

fn scope_of(doc: &Value) -> Scope<'_> {
    Scope::new(doc.as_object().expect("document is an object"))
}

#[test]
fn naming_round_trip() {
    let doc = json!({
        "structure": {"id": "root", "namingQuery": "#x1"},
        "naming": {"x1": {"name": "Header"}}
    });
    let query = json!("#x1");
    let resolved = resolve("namingQuery", &query, Some(&scope_of(&doc)));
    assert_eq!(resolved.value(), Some(&json!({"name": "Header"})));
}

#[test]
fn mis_tagged_map_found_by_fallback() {
    let doc = json!({
        "data": {"triggers": {"x1": {"name": "Header"}}}
    });
    let query = json!("#x1");
    match resolve("namingQuery", &query, Some(&scope_of(&doc))) {
        Resolved::Found { value, map, pass } => {
            assert_eq!(value, &json!({"name": "Header"}));
            assert_eq!(map, "triggers");
            assert_eq!(pass, Pass::Fallback);
        }
        other => panic!("expected fallback hit, got {other:?}"),
    }
}

#[test]
fn fallback_follows_registry_order() {
    // Both maps hold the id; the one registered first wins.
    let doc = json!({
        "variables": {"dup": "from variables"},
        "design_data": {"dup": "from design_data"}
    });
    let query = json!("#dup");
    let resolved = resolve("namingQuery", &query, Some(&scope_of(&doc)));
    assert_eq!(resolved.value(), Some(&json!("from design_data")));
}

#[test]
fn miss_carries_original_query() {
    let doc = json!({"naming": {"x1": {}}});
    let query = json!("#nope");
    assert_eq!(
        resolve("namingQuery", &query, Some(&scope_of(&doc))),
        Resolved::Unresolved {
            original: "#nope".into(),
            query_id: "nope".into()
        }
    );
}

proptest! {
    #[test]
    fn any_registered_map_is_reachable(
        entry in 0..REFERENCE_MAPS.len(),
        field in 0..REFERENCE_MAPS.len(),
        id in "[a-z0-9]{1,8}",
    ) {
        let (_, map) = REFERENCE_MAPS[entry];
        let (query_field, _) = REFERENCE_MAPS[field];
        let mut entries = serde_json::Map::new();
        entries.insert(id.clone(), json!({"hit": true}));
        let mut doc = serde_json::Map::new();
        doc.insert(map.to_string(), Value::Object(entries));
        let doc = Value::Object(doc);
        let query = json!(format!("#{id}"));
        let resolved = resolve(query_field, &query, Some(&scope_of(&doc)));
        prop_assert_eq!(resolved.value(), Some(&json!({"hit": true})));
    }

    #[test]
    fn unknown_ids_never_resolve(id in "[a-z]{1,8}") {
        let doc = json!({"naming": {"X-KNOWN": 1}});
        let query = json!(id);
        let resolved = resolve("namingQuery", &query, Some(&scope_of(&doc)));
        prop_assert!(resolved.is_unresolved());
    }
}
