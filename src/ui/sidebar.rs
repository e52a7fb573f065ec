use crate::api::Action;
use crate::bridge::UiCommand;
use crate::controller;
use crate::state::{AppState, ServerHealth};
use egui::Ui;
use tokio::sync::mpsc::UnboundedSender;

pub fn draw_sidebar(ui: &mut Ui, state: &mut AppState, cmd_tx: &UnboundedSender<UiCommand>) {
    ui.heading("Server");
    ui.add_space(4.0);

    ui.label(&state.server_url);
    ui.horizontal(|ui| {
        let (text, color) = match state.health {
            ServerHealth::Unknown => ("Server: unknown", egui::Color32::GRAY),
            ServerHealth::Checking => ("Server: checking...", egui::Color32::GRAY),
            ServerHealth::Online => ("Server: online", egui::Color32::GREEN),
            ServerHealth::Offline => ("Server: offline", egui::Color32::RED),
        };
        ui.colored_label(color, text);
    });

    // Stays clickable while checking so a lost check can be retried.
    if ui.button("Check server").clicked() {
        controller::check_health(&mut state.health, cmd_tx);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(4.0);

    ui.heading("Actions");
    ui.add_space(4.0);

    // A click while busy supersedes the request in flight.
    ui.horizontal(|ui| {
        if ui.button("Fetch Emails").clicked() {
            controller::fetch_emails(state.status.as_mut(), &mut state.requests, cmd_tx);
        }
        if state.busy(Action::FetchEmails) {
            ui.spinner();
        }
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button("Clean Up Emails").clicked() {
            controller::cleanup_emails(state.status.as_mut(), &mut state.requests, cmd_tx);
        }
        if state.busy(Action::CleanupEmails) {
            ui.spinner();
        }
    });
}
