//! Artwork engine: catalog HTTP client and effect execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use fetch::{
    CatalogSettings, PageFetcher, ReqwestPageFetcher, DEFAULT_BASE_URL, REQUESTED_FIELDS,
};
pub use types::{
    CatalogPage, EngineEvent, FailureKind, FetchError, FetchMetadata, PageQuery, RequestId,
};
pub use wire::{ArtworkRecord, ArtworksResponse, PaginationInfo};
