use artwork_core::{update, BrowserState, Msg};

#[test]
fn update_is_noop() {
    let state = BrowserState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_does_not_dirty_state() {
    let (mut next, effects) = update(BrowserState::new(), Msg::Tick);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn unknown_generation_before_any_fetch_is_ignored() {
    let state = BrowserState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::PageLoaded {
            generation: 42,
            result: Err(artwork_core::FetchFailure::new("boom")),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
