//! Transient view state: sort, filter, pagination cursor.

/// Columns the dashboard sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    UpdatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// The single active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub order: SortOrder,
}

/// View state for one table.
///
/// Owns the pagination cursor — the catalog holds only the data and its
/// aggregate counts. At most one sort key is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: Option<Sort>,
    filter: String,
    page_index: usize,
    page_size: usize,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            filter: String::new(),
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Toggle sorting on a column.
    ///
    /// The same key cycles ascending, descending, cleared; a different key
    /// replaces the active sort (single-column sort only). The cursor
    /// returns to the first page either way.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(active) if active.key == key => match active.order {
                SortOrder::Asc => Some(Sort { key, order: SortOrder::Desc }),
                SortOrder::Desc => None,
            },
            _ => Some(Sort { key, order: SortOrder::Asc }),
        };
        self.page_index = 0;
    }

    /// Replace the filter text and return to the first page.
    ///
    /// The reset keeps the cursor off pages that no longer exist once the
    /// filtered set shrinks.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        self.page_index = 0;
    }

    /// Move the pagination cursor.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
    }
}
