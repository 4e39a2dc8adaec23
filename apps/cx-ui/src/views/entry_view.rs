use cx_app::format_concentration;
use cx_dataset::Record;
use egui_extras::{Column, TableBuilder};

/// Sequences and both concentration maps of the active entry, side by side.
#[derive(Default)]
pub struct EntryView;

impl EntryView {
    pub fn show(&mut self, ui: &mut egui::Ui, record: &Record) {
        ui.columns(3, |columns| {
            let sequences: Vec<(&str, String)> = record
                .sequences
                .iter()
                .map(|(name, seq)| (name.as_str(), seq.clone()))
                .collect();
            show_table(&mut columns[0], "Sequences", &sequences);

            let inputs: Vec<(&str, String)> = record
                .input_concentrations
                .iter()
                .map(|(name, conc)| (name.as_str(), format_concentration(*conc)))
                .collect();
            show_table(&mut columns[1], "Input Concentrations", &inputs);

            let complexes: Vec<(&str, String)> = record
                .complex_concentrations
                .iter()
                .map(|(name, conc)| (name.as_str(), format_concentration(*conc)))
                .collect();
            show_table(&mut columns[2], "Complex Concentrations", &complexes);
        });
    }
}

fn show_table(ui: &mut egui::Ui, title: &str, rows: &[(&str, String)]) {
    ui.heading(title);
    if rows.is_empty() {
        ui.weak("(none)");
        return;
    }

    // Three tables share one parent; each needs its own id.
    ui.push_id(title, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder().at_least(80.0))
            .body(|mut body| {
                for (name, value) in rows {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.strong(*name);
                        });
                        row.col(|ui| {
                            ui.monospace(value.as_str());
                        });
                    });
                }
            });
    });
}
