//! Reference descendant counter.
//!
//! `descendant_count` re-walks the whole subtree on every call. Hot paths use
//! the counts `DocGraph` precomputes at ingestion instead.

use serde_json::Value;

use crate::accessor::children;

/// Total number of nodes below `node`.
///
/// Equals `len(children(node)) + Σ descendant_count(child)`. Iterative, so
/// deeply nested documents cannot exhaust the call stack.
pub fn descendant_count(node: &Value) -> usize {
    let mut total = 0;
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        let kids = children(current);
        total += kids.len();
        stack.extend(kids.iter());
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::dismantle;
    use serde_json::{Map, json};

    #[test]
    fn leaf_has_zero_descendants() {
        assert_eq!(descendant_count(&json!({"id": "leaf"})), 0);
        assert_eq!(descendant_count(&json!("scalar")), 0);
    }

    #[test]
    fn counts_every_level() {
        let node = json!({
            "children": [
                {"components": [{"id": "a1"}, {"id": "a2"}]},
                {"id": "b"}
            ]
        });
        assert_eq!(descendant_count(&node), 4);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut node = json!({"id": "leaf"});
        for _ in 0..50_000 {
            let mut map = Map::new();
            map.insert("children".to_string(), Value::Array(vec![node]));
            node = Value::Object(map);
        }
        assert_eq!(descendant_count(&node), 50_000);
        dismantle(node);
    }
}
