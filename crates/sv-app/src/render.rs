//! Text rendering of the visible outline.

use sv_tree::{Outline, PresNode};

use crate::settings::ViewerSettings;

/// Fold indicator: open, closed, or blank for leaves.
pub fn fold_glyph(node: &PresNode) -> &'static str {
    if node.has_children() {
        if node.is_expanded() { "▼ " } else { "▶ " }
    } else {
        "  "
    }
}

/// One line per visible row, with open structure panels listed beneath
/// their row.
pub fn render_rows(outline: &Outline, settings: &ViewerSettings) -> Vec<String> {
    let mut lines = Vec::new();
    for row in outline.visible_rows() {
        let node = row.node;
        let indent = settings.indent_unit.repeat(row.depth);
        let mut line = format!("{}{}{}", indent, fold_glyph(node), node.label());
        if !node.kind().is_empty() {
            line.push_str(&format!(" ({})", node.kind()));
        }
        if settings.show_counts && node.has_children() {
            line.push_str(&format!(" [{}]", node.descendant_count()));
        }
        lines.push(line);

        for property in node.structure().rows() {
            lines.push(format!(
                "{}{}  · {}: {}",
                indent,
                settings.indent_unit,
                property.key,
                property.summary()
            ));
        }
    }
    lines
}
