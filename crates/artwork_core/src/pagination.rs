use std::fmt;

/// Page sizes offered by the paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Twelve, PageSize::TwentyFour, PageSize::FortyEight];

    pub const fn rows(self) -> u32 {
        match self {
            PageSize::Twelve => 12,
            PageSize::TwentyFour => 24,
            PageSize::FortyEight => 48,
        }
    }

    pub fn from_rows(rows: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }

    /// Next option in the dropdown, wrapping around.
    pub fn next(self) -> Self {
        match self {
            PageSize::Twelve => PageSize::TwentyFour,
            PageSize::TwentyFour => PageSize::FortyEight,
            PageSize::FortyEight => PageSize::Twelve,
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows())
    }
}

/// Paginator buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
}

/// A request for one page of the catalog. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: PageSize,
}

impl PageRequest {
    pub fn limit(&self) -> u32 {
        self.page_size.rows()
    }
}

/// 1-based page number of the page starting at `offset`, or `None` when it
/// does not fit the API's `page` parameter.
pub fn page_number_at(offset: u64, page_size: PageSize) -> Option<u32> {
    u32::try_from(offset / u64::from(page_size.rows()) + 1).ok()
}

/// Rounds `first` down to the start of the page that contains it.
pub fn align_offset(first: u64, rows: u32) -> u64 {
    let rows = u64::from(rows.max(1));
    first - first % rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pagination {
    offset: u64,
    page_size: PageSize,
    total_count: u64,
}

impl Pagination {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            offset: 0,
            page_size,
            total_count: 0,
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// 1-based page number for the current offset.
    pub fn page_number(&self) -> u32 {
        page_number_at(self.offset, self.page_size).unwrap_or(u32::MAX)
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(u64::from(self.page_size.rows()))
    }

    /// Offset of the first record on the last page.
    pub fn last_offset(&self) -> u64 {
        let rows = u64::from(self.page_size.rows());
        self.total_pages().saturating_sub(1) * rows
    }

    /// Offset the paginator would report for `nav`, or `None` when the
    /// corresponding button is disabled.
    pub fn offset_for(&self, nav: PageNav) -> Option<u64> {
        let rows = u64::from(self.page_size.rows());
        match nav {
            PageNav::First => (self.offset != 0).then_some(0),
            PageNav::Previous => (self.offset != 0).then(|| self.offset.saturating_sub(rows)),
            PageNav::Next => self
                .offset
                .checked_add(rows)
                .filter(|next| *next < self.total_count),
            PageNav::Last => {
                let last = self.last_offset();
                (last != self.offset && self.total_count > 0).then_some(last)
            }
        }
    }

    /// Current range in the form `"{first} to {last} of {total}"`.
    pub fn report(&self) -> String {
        let rows = u64::from(self.page_size.rows());
        let first = if self.total_count == 0 {
            0
        } else {
            self.offset.saturating_add(1)
        };
        let last = self.offset.saturating_add(rows).min(self.total_count);
        format!("{first} to {last} of {}", self.total_count)
    }

    pub(crate) fn move_to(&mut self, offset: u64, page_size: PageSize) -> PageRequest {
        self.offset = offset;
        self.page_size = page_size;
        PageRequest {
            page: self.page_number(),
            page_size,
        }
    }

    pub(crate) fn set_total(&mut self, total: u64) {
        self.total_count = total;
    }
}
