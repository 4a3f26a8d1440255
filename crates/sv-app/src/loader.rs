//! Reading documents from disk.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Input syntax, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` and `.yml` are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

/// A parsed document plus what the status line shows about it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub value: Value,
    /// Size of the raw input.
    pub bytes: usize,
    /// File name without directories.
    pub name: String,
}

/// Read and parse a document file.
pub fn load_file(path: &Path) -> AppResult<Loaded> {
    let raw = std::fs::read(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to read document");
        AppError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    })?;
    let value = parse_bytes(&raw, Format::from_path(path))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    info!(file = %name, bytes = raw.len(), "read document");
    Ok(Loaded {
        value,
        bytes: raw.len(),
        name,
    })
}

/// Parse raw bytes in the given syntax.
///
/// JSON nests without limit. YAML is bounded by serde_yaml's fixed nesting
/// limit of 128 collections.
pub fn parse_bytes(raw: &[u8], format: Format) -> AppResult<Value> {
    match format {
        Format::Json => parse_json(raw),
        Format::Yaml => serde_yaml::from_slice(raw).map_err(|e| AppError::InvalidYaml {
            message: e.to_string(),
        }),
    }
}

/// Each tree level costs two nesting levels (node object plus child array),
/// so serde_json's default limit of 128 would stop at 63 levels. The limit is
/// lifted and the parser's recursion runs on a stack that grows on demand.
fn parse_json(raw: &[u8]) -> AppResult<Value> {
    let mut de = serde_json::Deserializer::from_slice(raw);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use serde_json::json;

    #[test]
    fn format_follows_extension() {
        assert_eq!(Format::from_path(Path::new("a/b.YML")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("page.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("page.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("page")), Format::Json);
    }

    #[test]
    fn yaml_and_json_agree() {
        let yaml = b"id: root\nchildren:\n  - id: a\n";
        let json = br#"{"id": "root", "children": [{"id": "a"}]}"#;
        let expected = json!({"id": "root", "children": [{"id": "a"}]});
        assert_eq!(parse_bytes(yaml, Format::Yaml).unwrap(), expected);
        assert_eq!(parse_bytes(json, Format::Json).unwrap(), expected);
    }

    #[test]
    fn bad_input_reports_invalid_json() {
        let err = parse_bytes(b"{not json", Format::Json).unwrap_err();
        assert_eq!(err.status(), "Invalid JSON");
    }

    fn nested_json(levels: usize) -> String {
        let mut text = "{\"id\":\"n\",\"children\":[".repeat(levels);
        text.push_str("{\"id\":\"leaf\"}");
        text.push_str(&"]}".repeat(levels));
        text
    }

    #[test]
    fn deep_json_parses_and_ingests() {
        let levels = 5_000;
        let value = parse_bytes(nested_json(levels).as_bytes(), Format::Json).unwrap();
        let document = Document::from_value(value).unwrap();
        assert_eq!(document.graph().node_count(), levels + 1);
        assert_eq!(document.graph().max_depth() as usize, levels);
    }

    #[test]
    fn just_past_default_limit_parses() {
        let value = parse_bytes(nested_json(100).as_bytes(), Format::Json).unwrap();
        assert_eq!(sv_graph::descendant_count(&value), 100);
        sv_graph::dismantle(value);
    }

    #[test]
    fn trailing_garbage_is_invalid() {
        let err = parse_bytes(br#"{"id": "a"} x"#, Format::Json).unwrap_err();
        assert_eq!(err.status(), "Invalid JSON");
    }

    #[test]
    fn missing_file_reports_read_failure() {
        let err = load_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.status(), "Failed to read file");
    }
}
