//! Structured render model handed to whatever draws the catalog.
//!
//! Nothing here knows about markup. Front ends map `RenderModel` onto their
//! own widgets or templates.

use serde::Serialize;

use storefront_catalog::{Price, Product};
use storefront_core::ProductId;

/// Products at or below this count are flagged as low stock.
pub const LOW_STOCK_MAX: u32 = 5;

/// Icon used for categories without their own entry.
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

const CATEGORY_ICONS: &[(&str, &str)] = &[("Kitchen", "📦"), ("Lighting", "💡")];

/// Per-card entrance animation stagger.
pub const STAGGER_MS: u64 = 40;

pub const EMPTY_ICON: &str = "🔍";
pub const EMPTY_HEADING: &str = "No products match";
pub const EMPTY_HINT: &str = "Try lowering the minimum price filter.";

/// Decorative icon for a category. Never used for filtering.
pub fn category_icon(category: &str) -> &'static str {
    CATEGORY_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_CATEGORY_ICON)
}

/// "$58.00"
pub fn price_label(price: Price) -> String {
    format!("${price}")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StockState {
    OutOfStock,
    Low { remaining: u32 },
    InStock { count: u32 },
}

impl StockState {
    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => StockState::OutOfStock,
            n if n <= LOW_STOCK_MAX => StockState::Low { remaining: n },
            n => StockState::InStock { count: n },
        }
    }

    /// Short classification: `out`, `low` or `ok`.
    pub fn kind(&self) -> &'static str {
        match self {
            StockState::OutOfStock => "out",
            StockState::Low { .. } => "low",
            StockState::InStock { .. } => "ok",
        }
    }

    pub fn label(&self) -> String {
        match self {
            StockState::OutOfStock => "Out of stock".to_string(),
            StockState::Low { remaining } => format!("Only {remaining} left"),
            StockState::InStock { count } => format!("{count} in stock"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum ImageRef {
    Asset(String),
    Placeholder,
}

impl ImageRef {
    pub fn from_option(image: Option<&str>) -> Self {
        match image {
            Some(src) => ImageRef::Asset(src.to_string()),
            None => ImageRef::Placeholder,
        }
    }
}

/// One product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// 0-based position in the displayed list.
    pub position: usize,
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub price_label: String,
    pub stock: u32,
    pub stock_state: StockState,
    pub description: String,
    pub image: ImageRef,
    pub icon: &'static str,
}

impl DisplayRecord {
    pub fn from_product(position: usize, product: &Product) -> Self {
        Self {
            position,
            id: product.id_typed(),
            name: product.name().to_string(),
            category: product.category().to_string(),
            price: product.price(),
            price_label: price_label(product.price()),
            stock: product.stock(),
            stock_state: StockState::from_stock(product.stock()),
            description: product.description().to_string(),
            image: ImageRef::from_option(product.image()),
            icon: category_icon(product.category()),
        }
    }

    /// Entrance animation delay for this card.
    pub fn animation_delay_ms(&self) -> u64 {
        self.position as u64 * STAGGER_MS
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub shown: usize,
    pub total: usize,
}

impl CountSummary {
    /// "Showing 1 of 3 products"
    pub fn label(&self) -> String {
        format!("Showing {} of {} products", self.shown, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyNotice {
    pub icon: &'static str,
    pub heading: &'static str,
    pub hint: &'static str,
}

impl Default for EmptyNotice {
    fn default() -> Self {
        Self {
            icon: EMPTY_ICON,
            heading: EMPTY_HEADING,
            hint: EMPTY_HINT,
        }
    }
}

/// What the render target should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum RenderModel {
    Items {
        summary: CountSummary,
        records: Vec<DisplayRecord>,
    },
    Empty {
        summary: CountSummary,
        notice: EmptyNotice,
    },
}

impl RenderModel {
    pub fn build(list: &[Product], total: usize) -> Self {
        let summary = CountSummary {
            shown: list.len(),
            total,
        };
        if list.is_empty() {
            return RenderModel::Empty {
                summary,
                notice: EmptyNotice::default(),
            };
        }
        let records = list
            .iter()
            .enumerate()
            .map(|(i, p)| DisplayRecord::from_product(i, p))
            .collect();
        RenderModel::Items { summary, records }
    }

    pub fn summary(&self) -> CountSummary {
        match self {
            RenderModel::Items { summary, .. } | RenderModel::Empty { summary, .. } => *summary,
        }
    }

    /// Displayed cards; empty slice for the no-matches state.
    pub fn records(&self) -> &[DisplayRecord] {
        match self {
            RenderModel::Items { records, .. } => records,
            RenderModel::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RenderModel::Empty { .. })
    }
}
