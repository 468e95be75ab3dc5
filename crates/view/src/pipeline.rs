//! Filter → sort → render + trace, as one pure computation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::{CatalogStore, MinPrice, Product};
use storefront_core::SessionId;

use crate::render::RenderModel;
use crate::sort::{apply_sort, SortKey};
use crate::trace::TraceBlock;

/// Ordered display list for the given state.
///
/// Always returns a fresh vector; `products` is only read. Filtering is
/// inclusive (`price >= min_price`) and every sort is stable, so products that
/// compare equal keep their catalog order.
pub fn compute_view(
    products: &[Product],
    min_price: Option<MinPrice>,
    sort: Option<SortKey>,
) -> Vec<Product> {
    let mut list: Vec<Product> = match min_price {
        Some(min) => products
            .iter()
            .filter(|p| min.admits(p.price()))
            .cloned()
            .collect(),
        None => products.to_vec(),
    };
    apply_sort(&mut list, sort);
    list
}

/// Render model and trace block from a single computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewFrame {
    pub render: RenderModel,
    pub trace: TraceBlock,
}

/// Compute the view for the store's current state.
pub fn run(
    store: &CatalogStore,
    sort: Option<SortKey>,
    session_id: SessionId,
    at: DateTime<Utc>,
) -> ViewFrame {
    let min_price = store.min_price();
    let list = compute_view(store.products(), min_price, sort);

    tracing::debug!(
        min_price = min_price.map(MinPrice::value),
        sort = sort.map(|k| k.as_str()),
        shown = list.len(),
        total = store.total(),
        "view computed"
    );

    ViewFrame {
        render: RenderModel::build(&list, store.total()),
        trace: TraceBlock::record(session_id, min_price, &list, at),
    }
}
