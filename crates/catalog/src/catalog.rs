//! The static, read-only product collection.

use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;

use thiserror::Error;

use storefront_core::{DomainError, ProductId};

use crate::product::{NewProduct, Product};

const SEED_CATALOG: &str = include_str!("../data/seed_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Immutable, cheaply clonable product list.
///
/// Built once at startup; ids are unique. Nothing hands out `&mut` access,
/// so filtering and sorting always work on copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Validate raw records and build a catalog, keeping authoring order.
    pub fn from_records(records: impl IntoIterator<Item = NewProduct>) -> Result<Self, DomainError> {
        let mut seen: HashSet<ProductId> = HashSet::new();
        let mut products = Vec::new();

        for raw in records {
            let product = Product::try_from(raw)?;
            if !seen.insert(product.id_typed()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id_typed()
                )));
            }
            products.push(product);
        }

        tracing::debug!(count = products.len(), "catalog built");
        Ok(Self {
            products: products.into(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogLoadError> {
        let records: Vec<NewProduct> = serde_json::from_str(json)?;
        Ok(Self::from_records(records)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogLoadError> {
        let records: Vec<NewProduct> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records)?)
    }

    /// The built-in three-product catalog.
    pub fn seed() -> Result<Self, CatalogLoadError> {
        Self::from_json_str(SEED_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }

    /// Header label for the whole catalog, e.g. "3 items".
    pub fn header_label(&self) -> String {
        format!("{} items", self.len())
    }
}
