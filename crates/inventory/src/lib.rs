//! Inventory domain module.
//!
//! This crate holds the in-memory product catalog and its mutation
//! operations, implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage). The catalog is an explicitly constructed state
//! container: build one at session start, pass it to the view layer, drop it
//! at session end.

pub mod catalog;
pub mod form;
pub mod image;
pub mod product;

mod seed;

pub use catalog::Catalog;
pub use form::ProductDraft;
pub use image::{DecodedImage, MAX_IMAGE_BYTES, decode_data_url, encode_data_url};
pub use product::{Product, ProductInput};
