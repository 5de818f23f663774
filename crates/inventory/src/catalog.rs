use chrono::{DateTime, Utc};

use gudang_core::{DomainError, DomainResult, ProductId};
use gudang_format::format_timestamp;

use crate::product::{Product, ProductInput};
use crate::seed;

/// The in-memory product collection plus derived aggregate counts.
///
/// Mutations are synchronous and atomic with respect to this state; the
/// single UI thread is the only writer. The pagination *cursor* lives with
/// the view layer — `page_size` here is only the divisor for `total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Product>,
    page_size: usize,
    total_items: usize,
    total_pages: usize,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new(page_size: usize) -> Self {
        let mut catalog = Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            total_items: 0,
            total_pages: 0,
        };
        catalog.recompute_aggregates();
        catalog
    }

    /// Create a catalog initialized from the bundled seed dataset.
    pub fn seeded() -> DomainResult<Self> {
        let seed = seed::load()?;
        let mut catalog = Self {
            items: seed.data,
            page_size: seed.page_size.max(1),
            total_items: 0,
            total_pages: 0,
        };
        catalog.recompute_aggregates();
        Ok(catalog)
    }

    /// Restore the seed state, discarding every change made since.
    ///
    /// Idempotent: calling it any number of times lands on the same state.
    pub fn reset(&mut self) -> DomainResult<()> {
        *self = Self::seeded()?;
        tracing::debug!("catalog reset to seed state");
        Ok(())
    }

    /// Add a product, newest first.
    ///
    /// The catalog assigns the identifier and the formatted timestamp; field
    /// validation already happened in the form layer.
    pub fn add_item(&mut self, input: ProductInput, at: DateTime<Utc>) -> ProductId {
        let id = ProductId::new();
        self.items.insert(0, Product::new(id, input, format_timestamp(at)));
        self.recompute_aggregates();
        tracing::debug!("product {id} added ({} total)", self.total_items);
        id
    }

    /// Remove the product with the given id.
    pub fn delete_item(&mut self, id: ProductId) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::NotFound)?;
        self.items.remove(index);
        self.recompute_aggregates();
        tracing::debug!("product {id} deleted ({} total)", self.total_items);
        Ok(())
    }

    /// Look up a product by id. Pure; no mutation.
    pub fn get_one(&self, id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    /// Replace the product at `id` wholesale.
    ///
    /// The replacement is stored as given, timestamp included — refreshing
    /// `updatedAt` is the caller's job here, unlike the other mutations.
    pub fn update_item(&mut self, id: ProductId, replacement: Product) -> DomainResult<()> {
        let index = self.index_of(id).ok_or(DomainError::NotFound)?;
        self.items[index] = replacement;
        self.recompute_aggregates();
        tracing::debug!("product {id} replaced");
        Ok(())
    }

    /// Apply a stock delta, clamping at zero, and refresh the timestamp.
    pub fn update_stock(&mut self, id: ProductId, delta: i32, at: DateTime<Utc>) -> DomainResult<()> {
        let updated_at = format_timestamp(at);
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id_typed() == id)
            .ok_or(DomainError::NotFound)?;
        item.adjust_stock(delta, updated_at);
        tracing::debug!("product {id} stock adjusted by {delta} to {}", item.stock());
        Ok(())
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    fn index_of(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed() == id)
    }

    fn recompute_aggregates(&mut self) {
        self.total_items = self.items.len();
        self.total_pages = self.total_items.div_ceil(self.page_size);
    }
}
