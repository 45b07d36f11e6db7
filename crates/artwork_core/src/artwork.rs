/// Stable identifier assigned by the catalog.
pub type ArtworkId = u64;

/// One artwork entry as displayed in the table.
///
/// Fields are passed through from the catalog untouched; the catalog leaves
/// many of them empty, hence the `Option`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Record with only an id and title set. Handy for fixtures and placeholders.
    pub fn titled(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}
