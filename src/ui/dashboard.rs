use crate::controller;
use crate::state::{AppState, RunTable};
use crate::ui::confirm::NativeConfirm;
use crate::view::SortDirection;
use egui::Ui;

const COLUMNS: [&str; 4] = ["Time", "Action", "Result", "Outcome"];

pub fn draw_dashboard(ui: &mut Ui, state: &mut AppState) {
    if let Some(status) = &state.status {
        ui.heading("Status");
        ui.add_space(4.0);
        egui::Frame::default()
            .inner_margin(8.0)
            .corner_radius(4.0)
            .fill(ui.visuals().faint_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(status.text());
            });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    ui.heading("Run History");
    ui.add_space(4.0);

    if state.runs.rows.is_empty() {
        ui.label("No actions run yet.");
    } else {
        draw_run_table(ui, &mut state.runs);
    }

    ui.add_space(8.0);
    draw_pagination(ui, &mut state.runs);
}

// Run rows are the deletable records here; deleting one goes through the
// confirmation gate and only affects the local history.
fn draw_run_table(ui: &mut Ui, runs: &mut RunTable) {
    let mut clicked_column: Option<&'static str> = None;
    let mut delete_requested: Option<usize> = None;

    let page: Vec<(usize, String, &'static str, bool, String)> = runs
        .page_rows()
        .map(|(idx, run)| {
            (
                idx,
                run.finished_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                run.action.label(),
                run.succeeded,
                run.summary.replace('\n', " | "),
            )
        })
        .collect();

    egui_extras::TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(egui_extras::Column::initial(140.0))
        .column(egui_extras::Column::initial(70.0))
        .column(egui_extras::Column::initial(60.0))
        .column(egui_extras::Column::remainder().at_least(200.0))
        .column(egui_extras::Column::initial(60.0))
        .header(20.0, |mut header| {
            for column in COLUMNS {
                header.col(|ui| {
                    let arrow = match runs.sort_column {
                        Some(c) if c == column => match runs.sort_direction {
                            SortDirection::Ascending => " ^",
                            SortDirection::Descending => " v",
                        },
                        _ => "",
                    };
                    if ui.button(format!("{column}{arrow}")).clicked() {
                        clicked_column = Some(column);
                    }
                });
            }
            header.col(|_ui| {});
        })
        .body(|mut body| {
            for (idx, time, action, succeeded, outcome) in &page {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(time);
                    });
                    row.col(|ui| {
                        ui.label(*action);
                    });
                    row.col(|ui| {
                        if *succeeded {
                            ui.colored_label(egui::Color32::GREEN, "ok");
                        } else {
                            ui.colored_label(egui::Color32::RED, "error");
                        }
                    });
                    row.col(|ui| {
                        ui.label(outcome);
                    });
                    row.col(|ui| {
                        if ui.small_button("Delete").clicked() {
                            delete_requested = Some(*idx);
                        }
                    });
                });
            }
        });

    if let Some(column) = clicked_column {
        runs.sort_direction = controller::toggle_sort(runs.sort_direction, column);
        runs.sort_column = Some(column);
    }

    if let Some(idx) = delete_requested {
        if controller::confirm_delete(&NativeConfirm) {
            if let Some(removed) = runs.remove(idx) {
                tracing::info!("Removed {:?} run from history", removed.action);
            }
        }
    }
}

fn draw_pagination(ui: &mut Ui, runs: &mut RunTable) {
    runs.refresh_controls();

    ui.horizontal(|ui| {
        if ui
            .add_enabled(runs.controls.prev_enabled(), egui::Button::new("Previous"))
            .clicked()
        {
            runs.go_prev();
        }
        if let Some(indicator) = &runs.controls.indicator {
            ui.label(&indicator.text);
        }
        if ui
            .add_enabled(runs.controls.next_enabled(), egui::Button::new("Next"))
            .clicked()
        {
            runs.go_next();
        }
    });
}
