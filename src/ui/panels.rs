use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::series_color;
use crate::export::export_csv;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – trace list
// ---------------------------------------------------------------------------

/// Render the left panel: one row per selected trace with a visibility toggle.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Series");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all();
        }
        if ui.small_button("None").clicked() {
            state.hide_all();
        }
    });

    // Collect first so the table closure can mutate visibility.
    let rows: Vec<(usize, String, usize, f64, f64, Color32)> = state
        .profile
        .traces
        .iter()
        .enumerate()
        .map(|(pos, t)| {
            (
                pos,
                t.legend_name(),
                t.samples.len(),
                t.min(),
                t.max(),
                series_color(t.index),
            )
        })
        .collect();

    let mut toggled = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Series");
            });
            header.col(|ui| {
                ui.strong("n");
            });
            header.col(|ui| {
                ui.strong("min");
            });
            header.col(|ui| {
                ui.strong("max");
            });
        })
        .body(|mut body| {
            for (pos, label, n, min, max, color) in &rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let mut shown = state.is_visible(*pos);
                        if ui
                            .checkbox(&mut shown, RichText::new(label).color(*color))
                            .changed()
                        {
                            toggled = Some(*pos);
                        }
                    });
                    row.col(|ui| {
                        ui.label(n.to_string());
                    });
                    row.col(|ui| {
                        ui.label(format!("{min:.4}"));
                    });
                    row.col(|ui| {
                        ui.label(format!("{max:.4}"));
                    });
                });
            }
        });

    if let Some(pos) = toggled {
        state.toggle_trace(pos);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export CSV…").clicked() {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let visible = state.visible_traces().count();
        ui.label(format!(
            "{}: {} series, {} visible",
            state.profile.field,
            state.profile.traces.len(),
            visible
        ));

        if let Some(t) = state.info.t_total {
            ui.separator();
            ui.label(format!("tTotal = {t}"));
        }
        if let Some(ms) = state.info.runtime_ms {
            ui.separator();
            ui.label(format!("runtime = {ms} ms"));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open simulation results")
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.reload(path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let stem = state
        .title
        .strip_suffix(".json")
        .unwrap_or(state.title.as_str())
        .to_string();
    let file = rfd::FileDialog::new()
        .set_title("Export visible series")
        .set_file_name(format!("{stem}-{}.csv", state.profile.field))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match export_csv(&state.visible_profile(), &path) {
            Ok(()) => state.status_message = None,
            Err(e) => {
                log::error!("Failed to export CSV: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
