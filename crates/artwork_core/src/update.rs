use catalog_logging::{catalog_debug, catalog_warn};

use crate::{
    align_offset, page_number_at, BrowserState, BulkSelectRequest, Effect, Msg, PageSize,
    SelectionMode,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: BrowserState, msg: Msg) -> (BrowserState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let pagination = *state.pagination();
            request_page(&mut state, pagination.offset(), pagination.page_size())
        }
        Msg::PageChanged { first, rows } => {
            let Some(page_size) = PageSize::from_rows(rows) else {
                catalog_warn!("Ignoring page change with unsupported rows={}", rows);
                return (state, Vec::new());
            };
            let offset = align_offset(first, rows);
            if offset != first {
                catalog_warn!(
                    "Page change offset {} is not a multiple of {}; using {}",
                    first,
                    rows,
                    offset
                );
            }
            request_page(&mut state, offset, page_size)
        }
        Msg::Navigate(nav) => match state.pagination().offset_for(nav) {
            Some(offset) => {
                let page_size = state.pagination().page_size();
                request_page(&mut state, offset, page_size)
            }
            None => Vec::new(),
        },
        Msg::PageSizeSelected(page_size) => {
            if page_size == state.pagination().page_size() {
                Vec::new()
            } else {
                request_page(&mut state, 0, page_size)
            }
        }
        Msg::PageLoaded { generation, result } => {
            state.finish_fetch(generation, result);
            Vec::new()
        }
        Msg::SelectionModeChanged(mode) => {
            state.set_mode(mode);
            Vec::new()
        }
        Msg::SelectionChanged(records) => {
            if accepts_table_selection(&state) {
                state.replace_selection(records);
            }
            Vec::new()
        }
        Msg::RowToggled { id } => {
            if accepts_table_selection(&state) {
                let toggled = state
                    .page()
                    .iter()
                    .find(|record| record.id == id)
                    .map(|record| state.selection().toggled(record));
                match toggled {
                    Some(records) => state.replace_selection(records),
                    None => catalog_debug!("Row {} is not on the current page", id),
                }
            }
            Vec::new()
        }
        Msg::PageToggled => {
            if accepts_table_selection(&state) && !state.page().is_empty() {
                let records = state.selection().toggled_page(state.page());
                state.replace_selection(records);
            }
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::CursorMoved { delta } => {
            state.move_cursor(delta);
            Vec::new()
        }
        Msg::BulkSelectOpened => {
            state.open_bulk_select();
            Vec::new()
        }
        Msg::BulkInputChanged(input) => {
            if !state.set_bulk_input(input) {
                catalog_debug!("Bulk select input ignored; overlay is closed");
            }
            Vec::new()
        }
        Msg::BulkSelectSubmitted => {
            if let Some(input) = state.take_bulk_input() {
                let selected = BulkSelectRequest::parse(&input)
                    .and_then(|request| request.resolve(state.page()))
                    .map(<[_]>::to_vec);
                match selected {
                    Some(records) => state.replace_selection(records),
                    None => catalog_debug!(
                        "Bulk select input {:?} outside 1..={}; selection unchanged",
                        input,
                        state.page().len()
                    ),
                }
            }
            Vec::new()
        }
        Msg::BulkSelectDismissed => {
            state.take_bulk_input();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn request_page(state: &mut BrowserState, offset: u64, page_size: PageSize) -> Vec<Effect> {
    if page_number_at(offset, page_size).is_none() {
        catalog_warn!(
            "Ignoring page change to offset {}; page number does not fit the API",
            offset
        );
        return Vec::new();
    }
    let (generation, request) = state.begin_fetch(offset, page_size);
    vec![Effect::FetchPage {
        generation,
        request,
    }]
}

/// Row-click mode renders no checkbox column, so the table never reports a
/// selection there.
fn accepts_table_selection(state: &BrowserState) -> bool {
    if state.mode() == SelectionMode::Checkbox {
        true
    } else {
        catalog_debug!("Ignoring table selection event in row-click mode");
        false
    }
}
