use crate::api::Action;
use crate::controller::{self, RequestTracker};
use crate::view::{PaginationControls, SortDirection, StatusRegion};
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerHealth {
    Unknown,
    Checking,
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    pub action: Action,
    pub finished_at: DateTime<Local>,
    pub summary: String,
    pub succeeded: bool,
}

#[derive(Debug, Clone)]
pub struct RunTable {
    pub rows: Vec<RunRecord>,
    pub page: usize,
    pub page_size: usize,
    pub sort_column: Option<&'static str>,
    pub sort_direction: SortDirection,
    pub controls: PaginationControls,
}

impl RunTable {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
            sort_column: None,
            sort_direction: SortDirection::default(),
            controls: PaginationControls::full(),
        }
    }

    // Never zero, so an empty table reads "Page 1 of 1".
    pub fn total_pages(&self) -> usize {
        self.rows.len().div_ceil(self.page_size).max(1)
    }

    pub fn page_rows(&self) -> impl Iterator<Item = (usize, &RunRecord)> {
        let start = (self.page - 1) * self.page_size;
        self.rows
            .iter()
            .enumerate()
            .skip(start)
            .take(self.page_size)
    }

    pub fn push(&mut self, record: RunRecord) {
        self.rows.push(record);
    }

    pub fn remove(&mut self, index: usize) -> Option<RunRecord> {
        if index >= self.rows.len() {
            return None;
        }
        let record = self.rows.remove(index);
        self.page = self.page.min(self.total_pages());
        Some(record)
    }

    pub fn refresh_controls(&mut self) {
        let (page, total) = (self.page as i64, self.total_pages() as i64);
        controller::update_pagination(&mut self.controls, page, total);
    }

    pub fn go_prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn go_next(&mut self) {
        self.page = (self.page + 1).min(self.total_pages());
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub server_url: String,
    pub health: ServerHealth,

    pub status: Option<StatusRegion>,
    pub requests: RequestTracker,

    pub runs: RunTable,
}

impl AppState {
    pub fn new(server_url: String, page_size: usize) -> Self {
        Self {
            server_url,
            health: ServerHealth::Unknown,
            status: Some(StatusRegion::default()),
            requests: RequestTracker::default(),
            runs: RunTable::new(page_size),
        }
    }

    pub fn busy(&self, action: Action) -> bool {
        self.requests.in_flight(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize) -> RunRecord {
        RunRecord {
            action: Action::FetchEmails,
            finished_at: Local::now(),
            summary: format!("run {n}"),
            succeeded: true,
        }
    }

    fn table_with(rows: usize, page_size: usize) -> RunTable {
        let mut table = RunTable::new(page_size);
        for n in 0..rows {
            table.push(record(n));
        }
        table
    }

    #[test]
    fn empty_table_has_one_page() {
        assert_eq!(RunTable::new(10).total_pages(), 1);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let table = table_with(3, 0);
        assert_eq!(table.page_size, 1);
        assert_eq!(table.total_pages(), 3);
    }

    #[test]
    fn paging_stays_in_bounds() {
        let mut table = table_with(25, 10);
        assert_eq!(table.total_pages(), 3);

        table.go_prev();
        assert_eq!(table.page, 1);

        table.go_next();
        table.go_next();
        table.go_next();
        assert_eq!(table.page, 3);

        let last_page: Vec<usize> = table.page_rows().map(|(i, _)| i).collect();
        assert_eq!(last_page, (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn refresh_controls_tracks_current_page() {
        let mut table = table_with(25, 10);
        table.refresh_controls();
        assert!(!table.controls.prev_enabled());
        assert!(table.controls.next_enabled());
        assert_eq!(table.controls.indicator.as_ref().unwrap().text, "Page 1 of 3");

        table.go_next();
        table.go_next();
        table.refresh_controls();
        assert!(table.controls.prev_enabled());
        assert!(!table.controls.next_enabled());
        assert_eq!(table.controls.indicator.as_ref().unwrap().text, "Page 3 of 3");
    }

    #[test]
    fn empty_table_disables_both_buttons() {
        let mut table = RunTable::new(10);
        table.refresh_controls();
        assert!(!table.controls.prev_enabled());
        assert!(!table.controls.next_enabled());
        assert_eq!(table.controls.indicator.as_ref().unwrap().text, "Page 1 of 1");
    }

    #[test]
    fn removing_last_row_of_last_page_moves_back() {
        let mut table = table_with(11, 10);
        table.go_next();
        assert_eq!(table.page, 2);

        let removed = table.remove(10).unwrap();
        assert_eq!(removed.summary, "run 10");
        assert_eq!(table.page, 1);
        assert!(table.remove(99).is_none());
    }
}
