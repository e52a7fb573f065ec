use crate::api::models::{CleanupReport, FetchReport, HealthReport};
use crate::api::{Action, ServerClient};
use crate::controller::RequestToken;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

#[derive(Debug)]
pub enum UiCommand {
    Run { token: RequestToken },
    CheckHealth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Fetched(FetchReport),
    CleanedUp(CleanupReport),
}

#[derive(Debug)]
pub enum BackgroundEvent {
    ActionFinished {
        token: RequestToken,
        result: Result<ActionOutcome, AppError>,
    },
    Health(Result<HealthReport, AppError>),
}

#[derive(Debug)]
pub struct BridgeChannels {
    pub cmd_tx: tokio_mpsc::UnboundedSender<UiCommand>,
    pub event_rx: std_mpsc::Receiver<BackgroundEvent>,
}

pub fn setup_bridge(ctx: egui::Context, client: ServerClient) -> BridgeChannels {
    let (cmd_tx, cmd_rx) = tokio_mpsc::unbounded_channel::<UiCommand>();
    let (event_tx, event_rx) = std_mpsc::channel::<BackgroundEvent>();

    std::thread::spawn(move || match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(background_loop(cmd_rx, event_tx, ctx, client)),
        // Dropping cmd_rx makes every later dispatch fail on the UI side.
        Err(e) => error!("{}", AppError::Runtime(e.to_string())),
    });

    BridgeChannels { cmd_tx, event_rx }
}

async fn background_loop(
    mut cmd_rx: tokio_mpsc::UnboundedReceiver<UiCommand>,
    event_tx: std_mpsc::Sender<BackgroundEvent>,
    ctx: egui::Context,
    client: ServerClient,
) {
    let mut running: HashMap<Action, JoinHandle<()>> = HashMap::new();

    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UiCommand::Run { token } => {
                let tx = event_tx.clone();
                let ctx2 = ctx.clone();
                let client = client.clone();
                let handle = tokio::spawn(async move {
                    handle_action(token, client, tx, ctx2).await;
                });

                if let Some(previous) = running.insert(token.action, handle) {
                    if !previous.is_finished() {
                        debug!(
                            "Aborting superseded {:?} request before #{}",
                            token.action, token.seq
                        );
                        previous.abort();
                    }
                }
            }
            UiCommand::CheckHealth => {
                let tx = event_tx.clone();
                let ctx2 = ctx.clone();
                let client = client.clone();
                tokio::spawn(async move {
                    let result = client.health().await;
                    if let Err(e) = tx.send(BackgroundEvent::Health(result)) {
                        tracing::warn!("Failed to send health event to UI: {}", e);
                    }
                    ctx2.request_repaint();
                });
            }
        }
    }

    info!("UI command channel closed, background loop exiting");
}

async fn run_action(client: &ServerClient, action: Action) -> Result<ActionOutcome, AppError> {
    match action {
        Action::FetchEmails => client.fetch_emails().await.map(ActionOutcome::Fetched),
        Action::CleanupEmails => client.cleanup_emails().await.map(ActionOutcome::CleanedUp),
    }
}

async fn handle_action(
    token: RequestToken,
    client: ServerClient,
    tx: std_mpsc::Sender<BackgroundEvent>,
    ctx: egui::Context,
) {
    let result = run_action(&client, token.action).await;
    if let Err(e) = tx.send(BackgroundEvent::ActionFinished { token, result }) {
        tracing::warn!("Failed to send {:?} result to UI: {}", token.action, e);
    }
    ctx.request_repaint();
}
