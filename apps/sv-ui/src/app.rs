use crate::views::{InspectView, OutlineActions, OutlineView};
use egui_file_dialog::{DialogMode, FileDialog};
use std::path::PathBuf;
use sv_app::{
    AppResult, Viewer, ViewerSettings, format_bytes, json_report, load_file, search,
    structure_report,
};
use sv_core::PresId;
use sv_tree::OutlineEvent;
use tracing::warn;

/// What the status line says about the loaded file.
struct LoadedInfo {
    path: PathBuf,
    name: String,
    bytes: usize,
}

/// Text shown in the report window.
struct Report {
    title: &'static str,
    text: String,
}

pub struct StructviewApp {
    viewer: Viewer,
    settings: ViewerSettings,
    loaded: Option<LoadedInfo>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    status: String,
    search_text: String,
    selected: Option<PresId>,
    report: Option<Report>,
    outline_view: OutlineView,
    inspect_view: InspectView,
}

impl StructviewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_file: Option<PathBuf>) -> Self {
        let settings = ViewerSettings::default();
        let mut app = Self {
            viewer: Viewer::new(settings.outline_options()),
            settings,
            loaded: None,
            file_dialog: FileDialog::new(),
            last_directory: None,
            status: String::new(),
            search_text: String::new(),
            selected: None,
            report: None,
            outline_view: OutlineView,
            inspect_view: InspectView,
        };
        if let Some(path) = initial_file {
            app.open_document(path);
        }
        app
    }

    fn open_document(&mut self, path: PathBuf) {
        self.last_directory = path.parent().map(|p| p.to_path_buf());
        self.status = format!("Reading {}…", path.display());
        let result = load_file(&path).and_then(|loaded| {
            self.viewer.load(loaded.value)?;
            Ok(LoadedInfo {
                path: path.clone(),
                name: loaded.name,
                bytes: loaded.bytes,
            })
        });
        match result {
            Ok(info) => {
                self.status = format!("Loaded: {}", info.name);
                self.loaded = Some(info);
                self.selected = None;
                self.report = None;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "open failed");
                self.status = err.status();
            }
        }
    }

    fn report_status<T>(&mut self, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.status = err.status();
                None
            }
        }
    }

    fn apply_outline_actions(&mut self, actions: OutlineActions) {
        if let Some(id) = actions.select {
            self.selected = Some(id);
        }
        if let Some(id) = actions.toggle {
            let result = self.viewer.toggle(id);
            self.report_status(result);
        }
        if let Some(id) = actions.toggle_structure {
            let result = self.viewer.toggle_structure(id);
            self.report_status(result);
        }
    }

    fn run_search(&mut self) {
        let query = self.search_text.trim().to_string();
        if query.is_empty() {
            return;
        }
        let result = search(&mut self.viewer, &query, self.settings.search_reveal_limit);
        if let Some(outcome) = self.report_status(result) {
            self.selected = outcome.revealed.first().copied();
            self.status = if outcome.is_truncated() {
                format!(
                    "{} matches, showing first {}",
                    outcome.matches.len(),
                    outcome.revealed.len()
                )
            } else {
                format!("{} matches", outcome.matches.len())
            };
        }
    }

    /// The document is not kept in memory after ingestion, so the dump
    /// rereads the file.
    fn print_json(&mut self) {
        let Some(path) = self.loaded.as_ref().map(|info| info.path.clone()) else {
            self.status = "No JSON loaded".to_string();
            return;
        };
        let result = load_file(&path).and_then(|loaded| {
            let text = json_report(&loaded.value)?;
            sv_graph::dismantle(loaded.value);
            Ok(text)
        });
        if let Some(text) = self.report_status(result) {
            self.report = Some(Report {
                title: "Full JSON",
                text,
            });
        }
    }

    /// Forget the selection when its row goes away.
    fn follow_events(&mut self) {
        for event in self.viewer.drain_events() {
            match event {
                OutlineEvent::Detached { node, .. } if Some(node) == self.selected => {
                    self.selected = None;
                }
                OutlineEvent::Cleared => self.selected = None,
                _ => {}
            }
        }
    }
}

impl eframe::App for StructviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open").clicked() {
                    let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                    let _ = self
                        .file_dialog
                        .open(DialogMode::SelectFile, true, initial_dir);
                }

                ui.separator();

                ui.add_enabled_ui(self.viewer.is_loaded(), |ui| {
                    if ui.button("Expand all").clicked() {
                        let result = self.viewer.expand_all(self.settings.expand_all_budget);
                        self.report_status(result);
                    }
                    if ui.button("Collapse all").clicked() {
                        let result = self.viewer.collapse_all();
                        self.report_status(result);
                    }
                    if ui.button("Print structure").clicked() {
                        if let Some(document) = self.viewer.document() {
                            self.report = Some(Report {
                                title: "Component Structure",
                                text: structure_report(document.graph()),
                            });
                        }
                    }
                    if ui.button("Print JSON").clicked() {
                        self.print_json();
                    }

                    ui.separator();
                    ui.label("Search:");
                    let response = ui.text_edit_singleline(&mut self.search_text);
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if submitted || ui.button("Find").clicked() {
                        self.run_search();
                    }
                    if ui.button("Clear").clicked() {
                        self.search_text.clear();
                    }
                });
            });
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_document(path.to_path_buf());
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status.as_str());
                if let Some(info) = &self.loaded {
                    ui.separator();
                    ui.label(format!("{} ({})", info.name, format_bytes(info.bytes as u64)));
                }
                if let Some(document) = self.viewer.document() {
                    ui.separator();
                    ui.label(format!(
                        "{} nodes, {} shown",
                        document.graph().node_count(),
                        self.viewer.outline().len()
                    ));
                }
            });
        });

        egui::SidePanel::right("inspector")
            .default_width(320.0)
            .show(ctx, |ui| {
                self.inspect_view.show(
                    ui,
                    self.viewer.document(),
                    self.viewer.outline(),
                    self.selected,
                );
            });

        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if self.viewer.is_loaded() {
                    self.outline_view.show(
                        ui,
                        self.viewer.outline(),
                        self.selected,
                        &self.settings,
                    )
                } else {
                    ui.centered_and_justified(|ui| {
                        ui.label("Open a JSON or YAML document to explore it.");
                    });
                    OutlineActions::default()
                }
            })
            .inner;
        self.apply_outline_actions(actions);

        if let Some(report) = &self.report {
            let mut open = true;
            egui::Window::new(report.title)
                .open(&mut open)
                .vscroll(true)
                .default_width(600.0)
                .show(ctx, |ui| {
                    ui.monospace(report.text.as_str());
                });
            if !open {
                self.report = None;
            }
        }

        self.follow_events();
    }
}
