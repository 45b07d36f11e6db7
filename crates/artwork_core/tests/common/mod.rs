#![allow(dead_code)]

use std::sync::Once;

use artwork_core::{
    update, Artwork, BrowserState, Effect, FetchedPage, Generation, Msg, PageRequest,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

pub fn artworks(ids: std::ops::RangeInclusive<u64>) -> Vec<Artwork> {
    ids.map(|id| Artwork {
        id,
        title: format!("Artwork {id}"),
        place_of_origin: Some("Chicago".to_string()),
        artist_display: Some(format!("Artist {id}")),
        inscriptions: None,
        date_start: Some(1900),
        date_end: Some(1901),
    })
    .collect()
}

/// The single fetch effect in `effects`.
pub fn fetch_of(effects: &[Effect]) -> (Generation, PageRequest) {
    match effects {
        [Effect::FetchPage {
            generation,
            request,
        }] => (*generation, *request),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

pub fn load(
    state: BrowserState,
    generation: Generation,
    records: Vec<Artwork>,
    total: u64,
) -> BrowserState {
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            generation,
            result: Ok(FetchedPage { records, total }),
        },
    );
    assert!(effects.is_empty());
    state
}

/// Starts a browser and completes the first fetch with ids 1..=12 of 100.
pub fn started_with_first_page() -> BrowserState {
    let (state, effects) = update(BrowserState::new(), Msg::Started);
    let (generation, _) = fetch_of(&effects);
    load(state, generation, artworks(1..=12), 100)
}
