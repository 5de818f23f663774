//! `gudang-format` — locale-aware display formatting.
//!
//! Rendering rules for the dashboard: Indonesian Rupiah currency strings and
//! Indonesian-locale timestamps. Pure functions only.

pub mod currency;
pub mod datetime;

pub use currency::{format_amount, format_currency, sanitize_digits};
pub use datetime::{format_now, format_timestamp};
