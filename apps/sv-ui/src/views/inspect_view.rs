use egui::RichText;
use sv_app::Document;
use sv_core::PresId;
use sv_tree::Outline;
use sv_tree::property::build_rows;

#[derive(Default)]
pub struct InspectView;

impl InspectView {
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        document: Option<&Document>,
        outline: &Outline,
        selected: Option<PresId>,
    ) {
        ui.heading("Inspector");
        let (Some(document), Some(node)) = (document, selected.and_then(|id| outline.get(id)))
        else {
            ui.label("Select a row to inspect it.");
            return;
        };

        ui.label(RichText::new(node.label()).strong());
        if !node.kind().is_empty() {
            ui.label(RichText::new(node.kind()).weak());
        }
        ui.separator();
        egui::Grid::new("inspect_summary")
            .num_columns(2)
            .striped(true)
            .show(ui, |ui| {
                ui.label("Path");
                ui.monospace(node.path().to_string());
                ui.end_row();
                ui.label("Descendants");
                ui.label(node.descendant_count().to_string());
                ui.end_row();
                ui.label("Fields");
                ui.label(node.structure().field_count().to_string());
                ui.end_row();
            });

        let Some(doc_node) = document.graph().node(node.node()) else {
            return;
        };
        ui.separator();
        ui.label(RichText::new("Structure").strong());
        let scope = document.scope();
        egui::ScrollArea::vertical()
            .id_salt("inspect_rows")
            .show(ui, |ui| {
                for row in build_rows(doc_node.fields(), scope.as_ref()) {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(format!("{}:", row.key)).strong());
                        let value = ui.label(RichText::new(row.summary()).monospace());
                        if let Some(tip) = row.tooltip() {
                            value.on_hover_text(tip);
                        }
                    });
                }
            });
    }
}
