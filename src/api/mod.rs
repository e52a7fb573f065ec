pub mod client;
pub mod models;

pub use client::ServerClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    FetchEmails,
    CleanupEmails,
}

impl Action {
    pub fn path(self) -> &'static str {
        match self {
            Action::FetchEmails => "/fetch-emails",
            Action::CleanupEmails => "/cleanup-emails",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::FetchEmails => "Fetch",
            Action::CleanupEmails => "Cleanup",
        }
    }
}

pub const HEALTH_PATH: &str = "/health";
