//! Viewer settings, read from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sv_tree::OutlineOptions;

use crate::error::{AppError, AppResult};

/// Presentation knobs shared by both front ends. Every field is optional in
/// the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    /// Indentation per outline level in text output.
    pub indent_unit: String,
    /// Show descendant counts next to rows that have children.
    pub show_counts: bool,
    /// Append resolved `namingQuery` names to row labels.
    pub naming_in_labels: bool,
    /// Upper bound on rows attached by "expand all".
    pub expand_all_budget: usize,
    /// Upper bound on search matches revealed in the outline.
    pub search_reveal_limit: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            indent_unit: "    ".to_string(),
            show_counts: true,
            naming_in_labels: true,
            expand_all_budget: 10_000,
            search_reveal_limit: 200,
        }
    }
}

impl ViewerSettings {
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            naming_in_labels: self.naming_in_labels,
        }
    }

    pub fn from_yaml(text: &str) -> AppResult<Self> {
        serde_yaml::from_str(text)
            .map_err(|e| AppError::Settings(format!("Failed to parse settings YAML: {}", e)))
    }
}

/// Load settings from a YAML file.
pub fn load_settings(path: &Path) -> AppResult<ViewerSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    ViewerSettings::from_yaml(&content)
}
