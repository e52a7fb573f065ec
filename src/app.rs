use crate::api::ServerClient;
use crate::bridge::{BackgroundEvent, UiCommand};
use crate::config::Settings;
use crate::controller;
use crate::state::{AppState, RunRecord, ServerHealth};
use crate::ui::{dashboard, sidebar};
use tokio::sync::mpsc::UnboundedSender;

pub struct EmailLedgerApp {
    state: AppState,
    cmd_tx: UnboundedSender<UiCommand>,
    event_rx: std::sync::mpsc::Receiver<BackgroundEvent>,
}

impl EmailLedgerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: &Settings, client: ServerClient) -> Self {
        let bridge = crate::bridge::setup_bridge(cc.egui_ctx.clone(), client);
        let mut state = AppState::new(settings.server_url.to_string(), settings.page_size);

        controller::check_health(&mut state.health, &bridge.cmd_tx);

        Self {
            state,
            cmd_tx: bridge.cmd_tx,
            event_rx: bridge.event_rx,
        }
    }

    fn drain_events(&mut self, ctx: &egui::Context) {
        while let Ok(event) = self.event_rx.try_recv() {
            apply_event(&mut self.state, event);
            ctx.request_repaint();
        }
    }
}

fn apply_event(state: &mut AppState, event: BackgroundEvent) {
    match event {
        BackgroundEvent::ActionFinished { token, result } => {
            let rendered = controller::apply_completion(
                state.status.as_mut(),
                &mut state.requests,
                token,
                &result,
            );
            if let Some(summary) = rendered {
                state.runs.push(RunRecord {
                    action: token.action,
                    finished_at: chrono::Local::now(),
                    summary,
                    succeeded: result.is_ok(),
                });
            }
        }
        BackgroundEvent::Health(result) => {
            state.health = match result {
                Ok(report) if report.is_ok() => ServerHealth::Online,
                Ok(report) => {
                    tracing::warn!("Server health reported {:?}", report.status);
                    ServerHealth::Offline
                }
                Err(e) => {
                    tracing::warn!("Health check failed: {}", e);
                    ServerHealth::Offline
                }
            };
        }
    }
}

impl eframe::App for EmailLedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_events(ctx);

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(250.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    sidebar::draw_sidebar(ui, &mut self.state, &self.cmd_tx);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                dashboard::draw_dashboard(ui, &mut self.state);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{CleanupReport, HealthReport};
    use crate::bridge::ActionOutcome;
    use crate::error::AppError;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn current_completion_is_rendered_and_recorded() {
        let (tx, _rx) = unbounded_channel();
        let mut state = AppState::new("http://127.0.0.1:5000/".to_string(), 10);
        let token = controller::cleanup_emails(state.status.as_mut(), &mut state.requests, &tx)
            .unwrap();

        apply_event(
            &mut state,
            BackgroundEvent::ActionFinished {
                token,
                result: Ok(ActionOutcome::CleanedUp(CleanupReport {
                    deleted: 3,
                    message: "done".to_string(),
                })),
            },
        );

        assert_eq!(
            state.status.as_ref().unwrap().text(),
            "Deleted: 3 emails\nMessage: done"
        );
        assert_eq!(state.runs.rows.len(), 1);
        assert!(state.runs.rows[0].succeeded);
    }

    #[test]
    fn stale_completion_is_not_recorded() {
        let (tx, _rx) = unbounded_channel();
        let mut state = AppState::new("http://127.0.0.1:5000/".to_string(), 10);
        let stale = controller::fetch_emails(state.status.as_mut(), &mut state.requests, &tx)
            .unwrap();
        controller::fetch_emails(state.status.as_mut(), &mut state.requests, &tx);

        apply_event(
            &mut state,
            BackgroundEvent::ActionFinished {
                token: stale,
                result: Err(AppError::Request("timed out".to_string())),
            },
        );

        assert_eq!(
            state.status.as_ref().unwrap().text(),
            controller::FETCH_IN_PROGRESS
        );
        assert!(state.runs.rows.is_empty());
    }

    #[test]
    fn health_events_update_indicator() {
        let mut state = AppState::new("http://127.0.0.1:5000/".to_string(), 10);

        apply_event(
            &mut state,
            BackgroundEvent::Health(Ok(HealthReport {
                status: "ok".to_string(),
            })),
        );
        assert_eq!(state.health, ServerHealth::Online);

        apply_event(
            &mut state,
            BackgroundEvent::Health(Err(AppError::Request("refused".to_string()))),
        );
        assert_eq!(state.health, ServerHealth::Offline);
    }
}
