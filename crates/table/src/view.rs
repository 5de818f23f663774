//! Derivation of the visible page of rows.

use core::cmp::Ordering;

use gudang_format::sanitize_digits;
use gudang_inventory::Product;

use crate::pages::{PageLabel, page_labels};
use crate::state::{SortKey, SortOrder, TableState};

/// The derived view: one page of rows plus the counts the pagination
/// controls need. Borrows the catalog's items; recompute after any change
/// to the items or the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    rows: Vec<&'a Product>,
    row_count: usize,
    page_count: usize,
    page_index: usize,
}

impl TableState {
    /// Derive the visible page: filter, then stable sort, then slice.
    pub fn derive<'a>(&self, items: &'a [Product]) -> TableView<'a> {
        let query = self.filter().trim().to_lowercase();
        let mut visible: Vec<&Product> = items
            .iter()
            .filter(|item| query.is_empty() || matches_query(item, &query))
            .collect();

        if let Some(sort) = self.sort() {
            visible.sort_by(|a, b| {
                let ordering = compare_by(a, b, sort.key);
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let row_count = visible.len();
        let page_count = row_count.div_ceil(self.page_size());
        let start = self.page_index() * self.page_size();
        let rows = if start < row_count {
            visible[start..row_count.min(start + self.page_size())].to_vec()
        } else {
            // The cursor can point past the end after deletions; that page
            // renders as "no results" rather than snapping elsewhere.
            Vec::new()
        };

        TableView {
            rows,
            row_count,
            page_count,
            page_index: self.page_index(),
        }
    }
}

/// Case-insensitive substring match against the searchable text fields.
fn matches_query(item: &Product, query_lower: &str) -> bool {
    item.name().to_lowercase().contains(query_lower)
        || item.code().to_lowercase().contains(query_lower)
}

fn compare_by(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortKey::Price => price_value(a).cmp(&price_value(b)),
        // The stored form is the formatted display string; ordering is
        // lexicographic on it, as in the original column.
        SortKey::UpdatedAt => a.updated_at().cmp(b.updated_at()),
    }
}

fn price_value(item: &Product) -> u128 {
    sanitize_digits(item.price()).parse().unwrap_or(0)
}

impl<'a> TableView<'a> {
    /// The rows of the current page, in display order.
    pub fn rows(&self) -> &[&'a Product] {
        &self.rows
    }

    /// How many items survived the filter (across all pages).
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// True when the current page has nothing to show — the "no results"
    /// render path.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.page_index + 1 < self.page_count
    }

    /// The compact page-number window for the pagination controls.
    pub fn page_labels(&self) -> Vec<PageLabel> {
        page_labels(self.page_count, self.page_index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gudang_core::ProductId;
    use gudang_inventory::ProductInput;

    fn product(name: &str, code: &str, price: &str, updated_at: &str) -> Product {
        Product::new(
            ProductId::new(),
            ProductInput {
                name: name.to_string(),
                code: code.to_string(),
                stock: 1,
                price: price.to_string(),
                image: "data:image/png;base64,AA==".to_string(),
            },
            updated_at.to_string(),
        )
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("Papan Tulis", "PT01", "85000", "14 Jul 2026, 10.30"),
            product("Kopi Arabika", "KA02", "150000", "12 Jul 2026, 15.42"),
            product("Teh Hijau", "TH03", "9000", "10 Jul 2026, 09.05"),
            product("Gula Aren", "GA04", "45000", "08 Jul 2026, 13.20"),
            product("Beras Premium", "BP05", "78000", "05 Jul 2026, 17.55"),
            product("Minyak Goreng", "MG06", "56000", "03 Jul 2026, 11.10"),
        ]
    }

    fn names<'a>(view: &TableView<'a>) -> Vec<&'a str> {
        view.rows().iter().map(|row| row.name()).collect()
    }

    #[test]
    fn an_empty_filter_passes_everything_in_insertion_order() {
        let items = fixture();
        let view = TableState::new(10).derive(&items);
        assert_eq!(view.row_count(), 6);
        assert_eq!(names(&view)[0], "Papan Tulis");
    }

    #[test]
    fn filtering_matches_name_substrings_case_insensitively() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.set_filter("kOpI");
        let view = state.derive(&items);
        assert_eq!(names(&view), vec!["Kopi Arabika"]);
    }

    #[test]
    fn filtering_matches_the_product_code_too() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.set_filter("ga04");
        let view = state.derive(&items);
        assert_eq!(names(&view), vec!["Gula Aren"]);
    }

    #[test]
    fn a_query_matching_nothing_yields_the_no_results_path() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.set_filter("tidak ada");
        let view = state.derive(&items);
        assert!(view.is_empty());
        assert_eq!(view.row_count(), 0);
        assert_eq!(view.page_count(), 0);
    }

    #[test]
    fn sorting_by_name_is_case_insensitive_and_reversible() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.toggle_sort(SortKey::Name);
        let view = state.derive(&items);
        assert_eq!(names(&view)[0], "Beras Premium");

        state.toggle_sort(SortKey::Name);
        let view = state.derive(&items);
        assert_eq!(names(&view)[0], "Teh Hijau");
    }

    #[test]
    fn sorting_by_price_is_numeric_not_lexicographic() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.toggle_sort(SortKey::Price);
        let view = state.derive(&items);
        // "9000" sorts below "85000" even though it is lexicographically larger.
        assert_eq!(names(&view)[0], "Teh Hijau");
        assert_eq!(names(&view)[5], "Kopi Arabika");
    }

    #[test]
    fn sorting_by_updated_at_orders_the_formatted_strings() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.toggle_sort(SortKey::UpdatedAt);
        let view = state.derive(&items);
        assert_eq!(names(&view)[0], "Minyak Goreng");
    }

    #[test]
    fn derivation_is_idempotent_and_does_not_touch_the_items() {
        let items = fixture();
        let mut state = TableState::new(10);
        state.set_filter("a");
        state.toggle_sort(SortKey::Price);
        assert_eq!(state.derive(&items), state.derive(&items));
    }

    #[test]
    fn pages_slice_the_sorted_filtered_set() {
        let items = fixture();
        let mut state = TableState::new(5);
        let first = state.derive(&items);
        assert_eq!(first.rows().len(), 5);
        assert_eq!(first.page_count(), 2);
        assert!(first.can_next_page());
        assert!(!first.can_previous_page());

        state.set_page(1);
        let second = state.derive(&items);
        assert_eq!(names(&second), vec!["Minyak Goreng"]);
        assert!(!second.can_next_page());
        assert!(second.can_previous_page());
    }

    #[test]
    fn a_cursor_past_the_end_yields_an_empty_page() {
        let items = fixture();
        let mut state = TableState::new(5);
        state.set_page(7);
        let view = state.derive(&items);
        assert!(view.is_empty());
        assert_eq!(view.page_count(), 2);
        assert!(!view.can_next_page());
    }

    #[test]
    fn page_labels_come_from_the_derived_page_count() {
        let items = fixture();
        let state = TableState::new(1);
        let view = state.derive(&items);
        assert_eq!(view.page_count(), 6);
        assert_eq!(
            view.page_labels(),
            vec![
                PageLabel::Page(1),
                PageLabel::Page(2),
                PageLabel::Ellipsis,
                PageLabel::Page(6),
            ],
        );
    }

    #[test]
    fn stable_sort_preserves_insertion_order_between_equal_keys() {
        let mut items = fixture();
        items.push(product("Papan Tulis", "PT99", "85000", "01 Jan 2026, 00.00"));
        let mut state = TableState::new(10);
        state.toggle_sort(SortKey::Name);
        let view = state.derive(&items);
        let papan: Vec<&str> = view
            .rows()
            .iter()
            .filter(|row| row.name() == "Papan Tulis")
            .map(|row| row.code())
            .collect();
        assert_eq!(papan, vec!["PT01", "PT99"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the page window never exceeds the page size, and
            /// the reported counts agree with each other.
            #[test]
            fn window_and_counts_agree(
                names in proptest::collection::vec("[a-z]{1,8}", 0..24),
                page_size in 1usize..7,
                page_index in 0usize..6,
                query in "[a-z]{0,2}",
            ) {
                let items: Vec<Product> = names
                    .iter()
                    .map(|n| product(n, "0909", "1000", "01 Jan 2026, 00.00"))
                    .collect();

                let mut state = TableState::new(page_size);
                state.set_filter(query.clone());
                state.set_page(page_index);
                let view = state.derive(&items);

                prop_assert!(view.rows().len() <= page_size);
                prop_assert_eq!(view.page_count(), view.row_count().div_ceil(page_size));
                for row in view.rows() {
                    prop_assert!(row.name().contains(&query));
                }
            }
        }
    }
}
