use crate::api::models::{CleanupReport, FetchReport};
use crate::api::Action;
use crate::bridge::{ActionOutcome, UiCommand};
use crate::error::AppError;
use crate::state::ServerHealth;
use crate::view::{PaginationControls, SortDirection, StatusRegion};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

pub const FETCH_IN_PROGRESS: &str = "Fetching emails...";
pub const FETCH_ERROR: &str = "Error fetching emails.";
pub const CLEANUP_IN_PROGRESS: &str = "Cleaning up emails...";
pub const CLEANUP_ERROR: &str = "Error cleaning up emails.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this transaction?";

// Only the latest token per action may write its completion to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub action: Action,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct Slot {
    issued: u64,
    settled: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    fetch: Slot,
    cleanup: Slot,
}

impl RequestTracker {
    fn slot(&self, action: Action) -> &Slot {
        match action {
            Action::FetchEmails => &self.fetch,
            Action::CleanupEmails => &self.cleanup,
        }
    }

    fn slot_mut(&mut self, action: Action) -> &mut Slot {
        match action {
            Action::FetchEmails => &mut self.fetch,
            Action::CleanupEmails => &mut self.cleanup,
        }
    }

    pub fn issue(&mut self, action: Action) -> RequestToken {
        let slot = self.slot_mut(action);
        slot.issued += 1;
        RequestToken {
            action,
            seq: slot.issued,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.slot(token.action).issued == token.seq
    }

    pub fn settle(&mut self, token: RequestToken) -> bool {
        if !self.is_current(token) {
            return false;
        }
        let slot = self.slot_mut(token.action);
        slot.settled = slot.issued;
        true
    }

    pub fn in_flight(&self, action: Action) -> bool {
        let slot = self.slot(action);
        slot.issued > slot.settled
    }
}

fn in_progress_text(action: Action) -> &'static str {
    match action {
        Action::FetchEmails => FETCH_IN_PROGRESS,
        Action::CleanupEmails => CLEANUP_IN_PROGRESS,
    }
}

pub fn error_text(action: Action) -> &'static str {
    match action {
        Action::FetchEmails => FETCH_ERROR,
        Action::CleanupEmails => CLEANUP_ERROR,
    }
}

pub fn render_fetch(report: &FetchReport) -> String {
    format!(
        "Inserted: {} emails\nMessage: {}\nStart Date: {}\nLast Email Timestamp: {}",
        report.inserted, report.message, report.start_date, report.last_timestamp
    )
}

pub fn render_cleanup(report: &CleanupReport) -> String {
    format!("Deleted: {} emails\nMessage: {}", report.deleted, report.message)
}

fn trigger(
    action: Action,
    status: Option<&mut StatusRegion>,
    tracker: &mut RequestTracker,
    cmd_tx: &UnboundedSender<UiCommand>,
) -> Option<RequestToken> {
    let status = status?;
    status.set_text(in_progress_text(action));

    let token = tracker.issue(action);
    info!("Dispatching {:?} request #{}", action, token.seq);

    if let Err(e) = cmd_tx.send(UiCommand::Run { token }) {
        warn!("Background worker is gone, {:?} not sent: {}", action, e);
        tracker.settle(token);
        status.set_text(error_text(action));
    }
    Some(token)
}

pub fn fetch_emails(
    status: Option<&mut StatusRegion>,
    tracker: &mut RequestTracker,
    cmd_tx: &UnboundedSender<UiCommand>,
) -> Option<RequestToken> {
    trigger(Action::FetchEmails, status, tracker, cmd_tx)
}

pub fn cleanup_emails(
    status: Option<&mut StatusRegion>,
    tracker: &mut RequestTracker,
    cmd_tx: &UnboundedSender<UiCommand>,
) -> Option<RequestToken> {
    trigger(Action::CleanupEmails, status, tracker, cmd_tx)
}

/// Returns the rendered text, or `None` when the completion was stale.
pub fn apply_completion(
    status: Option<&mut StatusRegion>,
    tracker: &mut RequestTracker,
    token: RequestToken,
    result: &Result<ActionOutcome, AppError>,
) -> Option<String> {
    if !tracker.settle(token) {
        debug!(
            "Dropping stale {:?} completion #{}",
            token.action, token.seq
        );
        return None;
    }

    let text = match result {
        Ok(ActionOutcome::Fetched(report)) => {
            info!("Fetch #{} inserted {} emails", token.seq, report.inserted);
            render_fetch(report)
        }
        Ok(ActionOutcome::CleanedUp(report)) => {
            info!("Cleanup #{} deleted {} emails", token.seq, report.deleted);
            render_cleanup(report)
        }
        Err(e) => {
            warn!("{:?} request #{} failed: {}", token.action, token.seq, e);
            error_text(token.action).to_string()
        }
    };

    if let Some(status) = status {
        status.set_text(text.clone());
    }
    Some(text)
}

pub fn check_health(health: &mut ServerHealth, cmd_tx: &UnboundedSender<UiCommand>) {
    *health = match cmd_tx.send(UiCommand::CheckHealth) {
        Ok(()) => ServerHealth::Checking,
        Err(e) => {
            warn!("Background worker is gone, health check not sent: {}", e);
            ServerHealth::Offline
        }
    };
}

pub trait ConfirmDialog {
    fn confirm(&self, prompt: &str) -> bool;
}

pub fn confirm_delete(dialog: &impl ConfirmDialog) -> bool {
    dialog.confirm(DELETE_PROMPT)
}

pub fn sort_trace(column: &str, direction: SortDirection) -> String {
    format!("Sorting by {column} in {direction} order")
}

// Stub: rows are never reordered.
pub fn toggle_sort(direction: SortDirection, column: &str) -> SortDirection {
    let next = direction.flipped();
    info!("{}", sort_trace(column, next));
    next
}

pub fn update_pagination(controls: &mut PaginationControls, page: i64, total_pages: i64) {
    let (Some(prev), Some(next)) = (controls.prev.as_mut(), controls.next.as_mut()) else {
        return;
    };

    prev.disabled = page <= 1;
    next.disabled = page >= total_pages;

    if let Some(indicator) = controls.indicator.as_mut() {
        indicator.text = format!("Page {page} of {total_pages}");
    }
}
