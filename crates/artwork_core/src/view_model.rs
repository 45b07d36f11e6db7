use crate::{ArtworkId, PageSize, SelectionMode};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserViewModel {
    pub rows: Vec<ArtworkRowView>,
    /// Index into `rows`; `None` when the page is empty.
    pub cursor: Option<usize>,
    pub selection_mode: SelectionMode,
    pub show_checkbox_column: bool,
    pub all_rows_selected: bool,
    pub selected_ids: Vec<ArtworkId>,
    pub loading: bool,
    pub page_number: u32,
    pub total_pages: u64,
    pub total_count: u64,
    pub page_size: PageSize,
    pub page_report: String,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub bulk_select: Option<BulkSelectView>,
    pub last_error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkRowView {
    pub id: ArtworkId,
    pub selected: bool,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

/// The open "Select Records" overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSelectView {
    pub input: String,
    /// Upper bound for the input: rows on the current page.
    pub max: usize,
}
