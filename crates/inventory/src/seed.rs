//! Bundled seed dataset.
//!
//! The only persisted artifact in the system: a fixed JSON file in the
//! original response shape, loaded once per session (and on every reset).
//! The file-level cursor fields are ignored — the view layer owns the
//! pagination cursor.

use serde::Deserialize;

use gudang_core::{DomainError, DomainResult};

use crate::product::Product;

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeedFile {
    pub page_size: usize,
    pub data: Vec<Product>,
}

pub(crate) fn load() -> DomainResult<SeedFile> {
    serde_json::from_str(SEED_JSON)
        .map_err(|e| DomainError::validation(format!("seed dataset: {e}")))
}
