//! Plain-text structure report of a whole document.

use serde_json::Value;
use sv_graph::DocGraph;

use crate::error::AppResult;

const REPORT_INDENT: &str = "  ";

/// One line per node in document order:
/// `{indent}{id} ({type}) [{n} children, {total} total]`.
pub fn structure_lines(graph: &DocGraph) -> Vec<String> {
    graph
        .walk_document_order()
        .filter_map(|id| {
            let node = graph.node(id)?;
            let label = node.label();
            Some(format!(
                "{}{} ({}) [{} children, {} total]",
                REPORT_INDENT.repeat(node.depth() as usize),
                label.id,
                label.kind,
                node.child_count(),
                graph.descendant_count(id)
            ))
        })
        .collect()
}

/// The report framed by header and footer lines.
pub fn structure_report(graph: &DocGraph) -> String {
    let mut out = String::from("=== Component Structure ===\n");
    for line in structure_lines(graph) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("=== End Structure ===\n");
    out
}

/// The whole loaded document, envelope included, pretty-printed and framed.
pub fn json_report(value: &Value) -> AppResult<String> {
    let mut out = String::from("=== Full JSON Object ===\n");
    out.push_str(&serde_json::to_string_pretty(value)?);
    out.push_str("\n=== End JSON ===\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_lines_follow_document_order() {
        let graph = DocGraph::ingest(json!({
            "id": "root",
            "type": "Page",
            "children": [
                {"id": "small", "children": [{"name": "n1"}]},
                {"id": "big", "componentType": "Section", "children": [{"id": "b1"}, {"id": "b2"}]}
            ]
        }))
        .unwrap();
        assert_eq!(
            structure_lines(&graph),
            vec![
                "root (Page) [2 children, 5 total]",
                "  small () [1 children, 1 total]",
                "    n1 () [0 children, 0 total]",
                "  big (Section) [2 children, 2 total]",
                "    b1 () [0 children, 0 total]",
                "    b2 () [0 children, 0 total]",
            ]
        );
    }

    #[test]
    fn report_is_framed() {
        let graph = DocGraph::ingest(json!({})).unwrap();
        let report = structure_report(&graph);
        assert!(report.starts_with("=== Component Structure ===\n(no-id) ()"));
        assert!(report.ends_with("=== End Structure ===\n"));
    }

    #[test]
    fn json_report_keeps_envelope_and_field_order() {
        let doc = json!({"structure": {"id": "root", "z": 1, "a": 2}, "data": {}});
        let report = json_report(&doc).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.first(), Some(&"=== Full JSON Object ==="));
        assert_eq!(lines.last(), Some(&"=== End JSON ==="));
        let body = lines[1..lines.len() - 1].join("\n");
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), doc);
        assert!(body.find("\"z\"").unwrap() < body.find("\"a\"").unwrap());
    }
}
