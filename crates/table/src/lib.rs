//! Table-view engine for the inventory dashboard.
//!
//! A pure, idempotent derivation: given the catalog's items and the
//! transient view state (one active sort, a free-text filter, a pagination
//! cursor), produce the visible page of rows and the compact page-number
//! window the pagination controls display. Re-run on every state change;
//! no transition carries side effects.

pub mod pages;
pub mod state;
pub mod view;

pub use pages::{PageLabel, page_labels};
pub use state::{Sort, SortKey, SortOrder, TableState};
pub use view::TableView;
