use egui::RichText;
use sv_app::ViewerSettings;
use sv_app::render::fold_glyph;
use sv_core::PresId;
use sv_tree::{Outline, PropertyRow, VisibleRow};

/// Pixels per outline level.
const INDENT_PX: f32 = 16.0;

/// One drawable line: a row, or a field of an open structure panel.
enum Line<'a> {
    Node(VisibleRow<'a>),
    Property { depth: usize, row: &'a PropertyRow },
}

#[derive(Default)]
pub struct OutlineActions {
    pub toggle: Option<PresId>,
    pub toggle_structure: Option<PresId>,
    pub select: Option<PresId>,
}

#[derive(Default)]
pub struct OutlineView;

impl OutlineView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        outline: &Outline,
        selected: Option<PresId>,
        settings: &ViewerSettings,
    ) -> OutlineActions {
        let mut actions = OutlineActions::default();

        let mut lines = Vec::new();
        for row in outline.visible_rows() {
            let depth = row.depth;
            let panel = row.node.structure().rows();
            lines.push(Line::Node(row));
            lines.extend(panel.iter().map(|row| Line::Property {
                depth: depth + 1,
                row,
            }));
        }

        let row_height = ui.spacing().interact_size.y;
        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show_rows(ui, row_height, lines.len(), |ui, range| {
                for line in &lines[range] {
                    match line {
                        Line::Node(row) => {
                            Self::node_line(ui, row, selected, settings, &mut actions)
                        }
                        Line::Property { depth, row } => Self::property_line(ui, *depth, row),
                    }
                }
            });

        actions
    }

    fn node_line(
        ui: &mut egui::Ui,
        row: &VisibleRow<'_>,
        selected: Option<PresId>,
        settings: &ViewerSettings,
        actions: &mut OutlineActions,
    ) {
        let node = row.node;
        ui.horizontal(|ui| {
            ui.add_space(row.depth as f32 * INDENT_PX);
            let glyph = RichText::new(fold_glyph(node)).monospace();
            if node.has_children() {
                if ui.small_button(glyph).clicked() {
                    actions.toggle = Some(node.id());
                }
            } else {
                ui.label(glyph);
            }

            if ui
                .selectable_label(selected == Some(node.id()), node.label())
                .clicked()
            {
                actions.select = Some(node.id());
            }
            if !node.kind().is_empty() {
                ui.label(RichText::new(node.kind()).weak());
            }
            if settings.show_counts && node.has_children() {
                ui.label(RichText::new(node.descendant_count().to_string()).small());
            }
            if node.structure().is_available() {
                let open = node.structure().state().is_expanded();
                let text = if open { "{-}" } else { "{+}" };
                if ui
                    .small_button(text)
                    .on_hover_text(format!("{} fields", node.structure().field_count()))
                    .clicked()
                {
                    actions.toggle_structure = Some(node.id());
                }
            }
        });
    }

    fn property_line(ui: &mut egui::Ui, depth: usize, row: &PropertyRow) {
        ui.horizontal(|ui| {
            ui.add_space(depth as f32 * INDENT_PX + INDENT_PX);
            ui.label(RichText::new(format!("{}:", row.key)).strong());
            let value = ui.label(RichText::new(row.summary()).monospace());
            if let Some(tip) = row.tooltip() {
                value.on_hover_text(tip);
            }
        });
    }
}
