//! JSON shapes returned by the catalog's `/artworks` listing.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<ArtworkRecord>,
    pub pagination: PaginationInfo,
}

/// One artwork as sent by the catalog. Every field except `id` may be null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArtworkRecord {
    pub id: u64,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

/// Only `total` is used; the rest is accepted so the payload validates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaginationInfo {
    pub total: u64,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub current_page: u32,
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
}
