use crate::views::{BarView, EntryView};
use cx_app::{ChartView, ViewState};
use cx_chart::{AxisScale, ScaleConfig, ScaleMode};
use cx_dataset::RecordNavigator;
use egui_file_dialog::FileDialog;
use std::path::PathBuf;
use tracing::{error, info};

const FILTER_HINT: &str = "(analyte);(r0)+(r1);(r2_p0)";

/// Concentrations span many decades, so the viewer starts on a log axis.
fn initial_state() -> ViewState {
    ViewState {
        scale: ScaleConfig::fit().with_axis(AxisScale::Log),
        ..ViewState::default()
    }
}

pub struct ComplexplotApp {
    navigator: RecordNavigator,
    state: ViewState,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    last_error: Option<String>,
    /// Last rendered snapshot. Recomputed only when the view state changes.
    cached: Option<(ViewState, Result<ChartView, String>)>,
    entry_view: EntryView,
    bar_view: BarView,
}

impl ComplexplotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, initial_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            navigator: RecordNavigator::default(),
            state: initial_state(),
            file_dialog: FileDialog::new(),
            last_directory: None,
            last_error: None,
            cached: None,
            entry_view: EntryView,
            bar_view: BarView,
        };
        if let Some(path) = initial_path {
            app.open_dataset(path);
        }
        app
    }

    fn open_dataset(&mut self, path: PathBuf) {
        match cx_app::load_dataset(&path) {
            Ok(dataset) => {
                info!(path = %path.display(), entries = dataset.len(), "opened data file");
                if let Some(parent) = path.parent() {
                    self.last_directory = Some(parent.to_path_buf());
                }
                self.navigator.set_dataset(dataset);
                self.cached = None;
                self.last_error = if self.navigator.is_empty() {
                    Some(format!("{} contains no entries", path.display()))
                } else {
                    None
                };
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to open data file");
                self.last_error = Some(format!("Failed to load data file: {}", e));
            }
        }
    }

    fn request_open(&mut self) {
        if let Some(dir) = &self.last_directory {
            self.file_dialog = FileDialog::new().initial_directory(dir.clone());
        }
        self.file_dialog.select_file();
    }

    /// Chart for the current snapshot, reusing the cached one when nothing changed.
    fn current_view(&mut self) -> Result<ChartView, String> {
        self.state.index = self.navigator.index();
        if let Some((state, result)) = &self.cached {
            if *state == self.state {
                return result.clone();
            }
        }
        let result =
            cx_app::render_view(self.navigator.dataset(), &self.state).map_err(|e| e.to_string());
        self.cached = Some((self.state.clone(), result.clone()));
        result
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                self.request_open();
            }
            if let Some(name) = self.navigator.dataset().display_name() {
                ui.label(name);
            }

            ui.separator();

            if ui
                .add_enabled(self.navigator.has_prev(), egui::Button::new("◀"))
                .clicked()
            {
                self.navigator.prev();
            }

            let len = self.navigator.len();
            let mut position = self.navigator.position();
            ui.label("Entry");
            if ui
                .add(egui::DragValue::new(&mut position).range(1..=len))
                .changed()
            {
                self.navigator.goto_position(position);
            }
            ui.label(format!("/ {}", len));

            if ui
                .add_enabled(self.navigator.has_next(), egui::Button::new("▶"))
                .clicked()
            {
                self.navigator.next();
            }

            ui.separator();

            ui.label("Scale:");
            egui::ComboBox::from_id_salt("scale_mode")
                .selected_text(self.state.scale.mode.label())
                .show_ui(ui, |ui| {
                    for mode in ScaleMode::ALL {
                        ui.selectable_value(&mut self.state.scale.mode, mode, mode.label());
                    }
                });

            if self.state.scale.mode == ScaleMode::Fixed {
                ui.label("min");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.scale.manual_min)
                        .desired_width(70.0),
                );
                ui.label("max");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.scale.manual_max)
                        .desired_width(70.0),
                );
            }

            egui::ComboBox::from_id_salt("axis_scale")
                .selected_text(self.state.scale.axis.label())
                .show_ui(ui, |ui| {
                    for axis in AxisScale::ALL {
                        ui.selectable_value(&mut self.state.scale.axis, axis, axis.label());
                    }
                });
        });
    }
}

impl eframe::App for ComplexplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_dataset(path.to_path_buf());
        }

        if self.navigator.is_empty() {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() / 3.0);
                    ui.heading("No data file loaded");
                    if ui.button("Open data file…").clicked() {
                        self.request_open();
                    }
                    if let Some(message) = &self.last_error {
                        ui.colored_label(ui.visuals().error_fg_color, message);
                    }
                });
            });
            return;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        let view = self.current_view();

        egui::TopBottomPanel::bottom("chart")
            .resizable(true)
            .default_height(360.0)
            .show(ctx, |ui| match &view {
                Ok(view) => self.bar_view.show(ui, view),
                Err(message) => {
                    ui.colored_label(ui.visuals().error_fg_color, message);
                }
            });

        egui::TopBottomPanel::bottom("filter").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Filter:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.filter_text)
                        .hint_text(FILTER_HINT)
                        .desired_width(f32::INFINITY),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = &self.last_error {
                ui.colored_label(ui.visuals().error_fg_color, message);
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(record) = self.navigator.current() {
                    self.entry_view.show(ui, record);
                }
            });
        });
    }
}
