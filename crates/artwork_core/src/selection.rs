use std::collections::HashSet;

use crate::{Artwork, ArtworkId};

/// How the table reacts to row interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No checkbox column; the table does not change the selection.
    RowClick,
    /// Checkbox column with multi-select.
    #[default]
    Checkbox,
}

/// Selected records, in the order they were selected.
///
/// Records are keyed by id and may belong to pages that are no longer loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    records: Vec<Artwork>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    pub fn ids(&self) -> Vec<ArtworkId> {
        self.records.iter().map(|record| record.id).collect()
    }

    pub fn contains(&self, id: ArtworkId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// The selection the table would report after toggling `record`.
    pub fn toggled(&self, record: &Artwork) -> Vec<Artwork> {
        if self.contains(record.id) {
            self.records
                .iter()
                .filter(|selected| selected.id != record.id)
                .cloned()
                .collect()
        } else {
            let mut next = self.records.clone();
            next.push(record.clone());
            next
        }
    }

    /// The selection the table would report after clicking the header
    /// checkbox: deselect the page if all of it is selected, otherwise add
    /// the missing rows.
    pub fn toggled_page(&self, page: &[Artwork]) -> Vec<Artwork> {
        if !page.is_empty() && page.iter().all(|record| self.contains(record.id)) {
            let on_page: HashSet<ArtworkId> = page.iter().map(|record| record.id).collect();
            self.records
                .iter()
                .filter(|selected| !on_page.contains(&selected.id))
                .cloned()
                .collect()
        } else {
            let mut next = self.records.clone();
            next.extend(
                page.iter()
                    .filter(|record| !self.contains(record.id))
                    .cloned(),
            );
            next
        }
    }

    /// Replaces the whole selection. Duplicate ids keep their first occurrence.
    pub(crate) fn replace(&mut self, records: Vec<Artwork>) {
        let mut seen = HashSet::with_capacity(records.len());
        self.records = records
            .into_iter()
            .filter(|record| seen.insert(record.id))
            .collect();
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}

/// Number typed into the "Select Records" overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectRequest {
    count: i64,
}

impl BulkSelectRequest {
    pub fn new(count: i64) -> Self {
        Self { count }
    }

    /// Parses the overlay input. Anything that is not an integer yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().map(Self::new)
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// The first `count` records of `page`, or `None` when `count` is outside
    /// `1..=page.len()`.
    pub fn resolve<'a>(&self, page: &'a [Artwork]) -> Option<&'a [Artwork]> {
        let count = usize::try_from(self.count).ok()?;
        if count == 0 || count > page.len() {
            return None;
        }
        Some(&page[..count])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: std::ops::RangeInclusive<u64>) -> Vec<Artwork> {
        ids.map(|id| Artwork::titled(id, format!("Artwork {id}")))
            .collect()
    }

    #[test]
    fn toggling_adds_then_removes() {
        let records = page(1..=3);
        let mut selection = Selection::new();

        selection.replace(selection.toggled(&records[1]));
        assert_eq!(selection.ids(), vec![2]);

        selection.replace(selection.toggled(&records[0]));
        assert_eq!(selection.ids(), vec![2, 1]);

        selection.replace(selection.toggled(&records[1]));
        assert_eq!(selection.ids(), vec![1]);
    }

    #[test]
    fn header_toggle_fills_then_clears_the_page() {
        let records = page(1..=3);
        let mut selection = Selection::new();
        selection.replace(vec![Artwork::titled(99, "elsewhere"), records[1].clone()]);

        selection.replace(selection.toggled_page(&records));
        assert_eq!(selection.ids(), vec![99, 2, 1, 3]);

        selection.replace(selection.toggled_page(&records));
        assert_eq!(selection.ids(), vec![99]);
    }

    #[test]
    fn replace_drops_duplicate_ids() {
        let mut selection = Selection::new();
        selection.replace(vec![
            Artwork::titled(1, "a"),
            Artwork::titled(1, "a again"),
            Artwork::titled(2, "b"),
        ]);
        assert_eq!(selection.ids(), vec![1, 2]);
        assert_eq!(selection.records()[0].title, "a");
    }

    #[test]
    fn bulk_request_bounds() {
        let records = page(1..=12);
        assert_eq!(BulkSelectRequest::new(0).resolve(&records), None);
        assert_eq!(BulkSelectRequest::new(-3).resolve(&records), None);
        assert_eq!(BulkSelectRequest::new(13).resolve(&records), None);
        assert_eq!(
            BulkSelectRequest::new(12).resolve(&records).map(<[Artwork]>::len),
            Some(12)
        );
        let first_five = BulkSelectRequest::new(5).resolve(&records).unwrap();
        assert_eq!(
            first_five.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn bulk_request_parses_integers_only() {
        assert_eq!(BulkSelectRequest::parse(" 7 "), Some(BulkSelectRequest::new(7)));
        assert_eq!(BulkSelectRequest::parse("-2"), Some(BulkSelectRequest::new(-2)));
        assert_eq!(BulkSelectRequest::parse("seven"), None);
        assert_eq!(BulkSelectRequest::parse(""), None);
    }
}
