//! Catalog store.
//!
//! Holds the immutable product list and the optional minimum-price filter
//! threshold. Pure in-memory state; no rendering, no I/O beyond parsing a
//! catalog document handed in by the caller.

pub mod catalog;
pub mod product;
pub mod store;

pub use catalog::{Catalog, CatalogLoadError};
pub use product::{NewProduct, Price, Product};
pub use store::{CatalogStore, MinPrice, INVALID_MIN_PRICE};
