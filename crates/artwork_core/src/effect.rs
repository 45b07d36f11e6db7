use crate::{Generation, PageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page from the catalog. The result must come back as
    /// `Msg::PageLoaded` carrying the same generation.
    FetchPage {
        generation: Generation,
        request: PageRequest,
    },
}
