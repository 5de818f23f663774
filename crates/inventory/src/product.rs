use gudang_core::{Entity, ProductId};
use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Field names on the wire match the seed dataset (`updatedAt` camelCase).
/// `price` is a digit-only numeric string and `image` an inline data URL;
/// both are produced by the form layer before a record reaches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    image: String,
    name: String,
    stock: u32,
    price: String,
    code: String,
    updated_at: String,
}

/// Validated payload for creating or replacing a product.
///
/// Produced by [`crate::ProductDraft::validate`]; the catalog trusts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductInput {
    pub name: String,
    pub code: String,
    pub stock: u32,
    pub price: String,
    pub image: String,
}

impl Product {
    pub fn new(id: ProductId, input: ProductInput, updated_at: String) -> Self {
        Self {
            id,
            image: input.image,
            name: input.name,
            stock: input.stock,
            price: input.price,
            code: input.code,
            updated_at,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn updated_at(&self) -> &str {
        &self.updated_at
    }

    /// Apply a stock delta, clamping at zero, and refresh the timestamp.
    pub(crate) fn adjust_stock(&mut self, delta: i32, updated_at: String) {
        let next = i64::from(self.stock) + i64::from(delta);
        self.stock = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        self.updated_at = updated_at;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
