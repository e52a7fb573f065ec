#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRegion {
    text: String,
}

impl StatusRegion {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageButton {
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageIndicator {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationControls {
    pub prev: Option<PageButton>,
    pub next: Option<PageButton>,
    pub indicator: Option<PageIndicator>,
}

impl PaginationControls {
    pub fn full() -> Self {
        Self {
            prev: Some(PageButton::default()),
            next: Some(PageButton::default()),
            indicator: Some(PageIndicator::default()),
        }
    }

    pub fn prev_enabled(&self) -> bool {
        self.prev.is_some_and(|b| !b.disabled)
    }

    pub fn next_enabled(&self) -> bool {
        self.next.is_some_and(|b| !b.disabled)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
