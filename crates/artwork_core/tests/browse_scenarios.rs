mod common;

use artwork_core::{update, BrowserState, FetchFailure, Msg, PageRequest, PageSize};
use common::{artworks, fetch_of, init_logging, load};
use pretty_assertions::assert_eq;

#[test]
fn select_five_then_turn_the_page() {
    init_logging();

    // Fetch page 1 size 12: ids 1..=12 of 100.
    let (state, effects) = update(BrowserState::new(), Msg::Started);
    let (generation, request) = fetch_of(&effects);
    assert_eq!(
        request,
        PageRequest {
            page: 1,
            page_size: PageSize::Twelve
        }
    );
    let state = load(state, generation, artworks(1..=12), 100);
    assert_eq!(state.page().len(), 12);
    assert_eq!(state.pagination().total_count(), 100);

    // Bulk-select N=5.
    let (state, _) = update(state, Msg::BulkSelectOpened);
    let (state, _) = update(state, Msg::BulkInputChanged("5".to_string()));
    let (state, _) = update(state, Msg::BulkSelectSubmitted);
    assert_eq!(state.selection().ids(), vec![1, 2, 3, 4, 5]);

    // Page change to offset 12, rows 12 requests page 2.
    let (state, effects) = update(state, Msg::PageChanged { first: 12, rows: 12 });
    let (generation, request) = fetch_of(&effects);
    assert_eq!(request.page, 2);
    let state = load(state, generation, artworks(13..=24), 100);

    assert_eq!(state.selection().ids(), vec![1, 2, 3, 4, 5]);
    assert!(state.page().iter().all(|record| record.id > 12));
}

#[test]
fn rejected_fetch_leaves_everything_as_it_was() {
    init_logging();

    let (state, effects) = update(BrowserState::new(), Msg::Started);
    let (generation, _) = fetch_of(&effects);
    let state = load(state, generation, artworks(1..=12), 100);

    let (state, effects) = update(state, Msg::PageChanged { first: 12, rows: 12 });
    let (generation, _) = fetch_of(&effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            generation,
            result: Err(FetchFailure::new("network error")),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.view().loading);
    assert_eq!(
        state.page().iter().map(|r| r.id).collect::<Vec<_>>(),
        (1..=12).collect::<Vec<_>>()
    );
    assert_eq!(state.pagination().total_count(), 100);
}
