use catalog_logging::{catalog_debug, catalog_error, catalog_info};

use crate::view_model::{ArtworkRowView, BrowserViewModel, BulkSelectView};
use crate::{
    Artwork, FetchFailure, FetchedPage, Generation, PageNav, PageRequest, PageSize, Pagination,
    Selection, SelectionMode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingFetch {
    generation: Generation,
    request: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrowserState {
    page: Vec<Artwork>,
    pagination: Pagination,
    selection: Selection,
    mode: SelectionMode,
    cursor: usize,
    last_generation: Generation,
    pending: Option<PendingFetch>,
    bulk_input: Option<String>,
    last_error: Option<String>,
    dirty: bool,
}

impl BrowserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: PageSize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    pub fn page(&self) -> &[Artwork] {
        &self.page
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// True while the most recently requested page is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_bulk_select_open(&self) -> bool {
        self.bulk_input.is_some()
    }

    pub fn view(&self) -> BrowserViewModel {
        let rows = self
            .page
            .iter()
            .map(|record| ArtworkRowView {
                id: record.id,
                selected: self.selection.contains(record.id),
                title: record.title.clone(),
                place_of_origin: record.place_of_origin.clone(),
                artist_display: record.artist_display.clone(),
                inscriptions: record.inscriptions.clone(),
                date_start: record.date_start,
                date_end: record.date_end,
            })
            .collect::<Vec<_>>();
        let all_rows_selected = !rows.is_empty() && rows.iter().all(|row| row.selected);

        BrowserViewModel {
            cursor: (!rows.is_empty()).then_some(self.cursor),
            rows,
            selection_mode: self.mode,
            show_checkbox_column: self.mode == SelectionMode::Checkbox,
            all_rows_selected,
            selected_ids: self.selection.ids(),
            loading: self.is_loading(),
            page_number: self.pagination.page_number(),
            total_pages: self.pagination.total_pages(),
            total_count: self.pagination.total_count(),
            page_size: self.pagination.page_size(),
            page_report: self.pagination.report(),
            can_go_previous: self.pagination.offset_for(PageNav::Previous).is_some(),
            can_go_next: self.pagination.offset_for(PageNav::Next).is_some(),
            bulk_select: self.bulk_input.as_ref().map(|input| BulkSelectView {
                input: input.clone(),
                max: self.page.len(),
            }),
            last_error: self.last_error.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Moves the paginator and opens a new fetch generation. The previous
    /// pending fetch, if any, becomes stale.
    pub(crate) fn begin_fetch(
        &mut self,
        offset: u64,
        page_size: PageSize,
    ) -> (Generation, PageRequest) {
        let request = self.pagination.move_to(offset, page_size);
        self.last_generation += 1;
        let generation = self.last_generation;
        if let Some(previous) = self.pending.replace(PendingFetch {
            generation,
            request,
        }) {
            catalog_debug!(
                "Fetch generation {} superseded by {} before it resolved",
                previous.generation,
                generation
            );
        }
        self.mark_dirty();
        (generation, request)
    }

    /// Applies a fetch result. Results for anything but the latest
    /// generation are discarded.
    pub(crate) fn finish_fetch(
        &mut self,
        generation: Generation,
        result: Result<FetchedPage, FetchFailure>,
    ) {
        let pending = match self.pending.take() {
            Some(pending) if pending.generation == generation => pending,
            other => {
                self.pending = other;
                catalog_debug!(
                    "Discarding stale fetch generation {} (latest {})",
                    generation,
                    self.last_generation
                );
                return;
            }
        };

        match result {
            Ok(fetched) => {
                catalog_info!(
                    "Loaded page {} ({} rows, {} total)",
                    pending.request.page,
                    fetched.records.len(),
                    fetched.total
                );
                self.page = fetched.records;
                self.pagination.set_total(fetched.total);
                self.cursor = self.cursor.min(self.page.len().saturating_sub(1));
                self.last_error = None;
            }
            Err(failure) => {
                catalog_error!(
                    "Error fetching page {} (limit {}): {}",
                    pending.request.page,
                    pending.request.limit(),
                    failure.message
                );
                self.last_error = Some(failure.message);
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode != mode {
            self.mode = mode;
            self.mark_dirty();
        }
    }

    pub(crate) fn replace_selection(&mut self, records: Vec<Artwork>) {
        self.selection.replace(records);
        self.mark_dirty();
    }

    pub(crate) fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn move_cursor(&mut self, delta: i32) {
        if self.page.is_empty() {
            return;
        }
        let last = self.page.len() - 1;
        let magnitude = delta.unsigned_abs() as usize;
        let next = if delta.is_negative() {
            self.cursor.saturating_sub(magnitude)
        } else {
            self.cursor.saturating_add(magnitude).min(last)
        };
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn open_bulk_select(&mut self) {
        self.bulk_input = Some(String::new());
        self.mark_dirty();
    }

    /// Returns false when the overlay is closed.
    pub(crate) fn set_bulk_input(&mut self, input: String) -> bool {
        match self.bulk_input.as_mut() {
            Some(current) => {
                *current = input;
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    /// Closes the overlay and hands back whatever was typed.
    pub(crate) fn take_bulk_input(&mut self) -> Option<String> {
        let input = self.bulk_input.take();
        if input.is_some() {
            self.mark_dirty();
        }
        input
    }
}
