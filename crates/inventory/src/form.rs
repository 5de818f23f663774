//! Form-layer validation.
//!
//! The catalog trusts its inputs; every required-field and shape check
//! happens here, before a draft becomes a [`ProductInput`]. Rules and order
//! follow the original create/edit form.

use gudang_core::{DomainError, DomainResult};
use gudang_format::sanitize_digits;

use crate::image::{self, MAX_IMAGE_BYTES};
use crate::product::ProductInput;

/// Raw field values as a form would collect them, all strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub code: String,
    pub stock: String,
    pub price: String,
    pub image: String,
}

impl ProductDraft {
    /// Check every field and produce the validated catalog input.
    ///
    /// The first failing rule wins. The image field is only considered
    /// present once a complete data URL is in hand (the upload read has run
    /// to completion).
    pub fn validate(&self) -> DomainResult<ProductInput> {
        if self.image.trim().is_empty() {
            return Err(DomainError::validation("product photo is required"));
        }
        let decoded = image::decode_data_url(self.image.trim())?;
        if decoded.bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::validation("product photo exceeds the 400 KiB limit"));
        }

        if self.name.trim().is_empty() {
            return Err(DomainError::validation("product name is required"));
        }

        if self.code.trim().is_empty() {
            return Err(DomainError::validation("product code is required"));
        }

        let stock = self.stock.trim();
        if stock.is_empty() {
            return Err(DomainError::validation("stock is required"));
        }
        if !stock.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("stock must be digits only"));
        }
        let stock: u32 = stock
            .parse()
            .map_err(|_| DomainError::validation("stock is out of range"))?;

        let price = sanitize_digits(&self.price);
        if price.is_empty() {
            return Err(DomainError::validation("price is required"));
        }

        Ok(ProductInput {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            stock,
            price,
            image: self.image.trim().to_string(),
        })
    }
}
