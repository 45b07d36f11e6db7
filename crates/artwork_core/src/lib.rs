//! Artwork browser core: pure pagination/selection state machine and view-model helpers.
mod artwork;
mod effect;
mod msg;
mod pagination;
mod selection;
mod state;
mod update;
mod view_model;

pub use artwork::{Artwork, ArtworkId};
pub use effect::Effect;
pub use msg::{FetchFailure, FetchedPage, Generation, Msg};
pub use pagination::{align_offset, page_number_at, PageNav, PageRequest, PageSize, Pagination};
pub use selection::{BulkSelectRequest, Selection, SelectionMode};
pub use state::BrowserState;
pub use update::update;
pub use view_model::{ArtworkRowView, BrowserViewModel, BulkSelectView};
