use crate::{Artwork, ArtworkId, PageNav, PageSize, SelectionMode};

/// Sequence number attached to each fetch so stale responses can be dropped.
pub type Generation = u64;

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub records: Vec<Artwork>,
    pub total: u64,
}

/// Why a fetch failed, already rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
}

impl FetchFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application started; load the current page.
    Started,
    /// Paginator change event carrying the new first row and rows per page.
    PageChanged { first: u64, rows: u32 },
    /// User pressed one of the paginator buttons.
    Navigate(PageNav),
    /// User picked a page size from the dropdown.
    PageSizeSelected(PageSize),
    /// Engine finished a fetch.
    PageLoaded {
        generation: Generation,
        result: Result<FetchedPage, FetchFailure>,
    },
    /// User flipped the row-click / checkbox switch.
    SelectionModeChanged(SelectionMode),
    /// Table reported a new selection set.
    SelectionChanged(Vec<Artwork>),
    /// User toggled the checkbox of one row on the current page.
    RowToggled { id: ArtworkId },
    /// User toggled the header checkbox.
    PageToggled,
    /// User cleared the selection.
    SelectionCleared,
    /// Move the row cursor by `delta` rows, clamped to the page.
    CursorMoved { delta: i32 },
    /// User opened the "Select Records" overlay.
    BulkSelectOpened,
    /// User edited the number in the overlay.
    BulkInputChanged(String),
    /// User confirmed the overlay.
    BulkSelectSubmitted,
    /// User closed the overlay without confirming.
    BulkSelectDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
