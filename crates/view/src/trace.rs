//! Append-only trace of every view computation.
//!
//! Each computation produces one [`TraceBlock`]: what was asked for, when, and
//! exactly which products ended up on screen in which order. The log keeps
//! every block for the session and tracks the scroll position so the newest
//! block is always the one in view.

use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_catalog::{MinPrice, Price, Product};
use storefront_core::{ProductId, SessionId, TraceBlockId};

/// Which read was conceptually performed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
#[serde(tag = "op", content = "min_price", rename_all = "snake_case")]
pub enum TraceOperation {
    ReadAllProducts,
    FilterByMinPrice(MinPrice),
}

impl TraceOperation {
    pub fn for_threshold(min_price: Option<MinPrice>) -> Self {
        match min_price {
            Some(min) => TraceOperation::FilterByMinPrice(min),
            None => TraceOperation::ReadAllProducts,
        }
    }
}

impl core::fmt::Display for TraceOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TraceOperation::ReadAllProducts => f.write_str("read_all_products()"),
            TraceOperation::FilterByMinPrice(min) => write!(f, "filter_by_min_price({min})"),
        }
    }
}

/// One displayed product, as recorded in the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
}

impl From<&Product> for TraceEntry {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id_typed(),
            name: p.name().to_string(),
            category: p.category().to_string(),
            price: p.price(),
            stock: p.stock(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceBody {
    /// Zero matches: a single message naming the active threshold.
    NoResults { message: String },
    /// One entry per displayed product, in display order.
    Products { entries: Vec<TraceEntry> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceBlock {
    pub id: TraceBlockId,
    pub session_id: SessionId,
    /// 1-based position in the session log; 0 until appended.
    pub sequence: u64,
    pub operation: TraceOperation,
    pub at: DateTime<Utc>,
    pub body: TraceBody,
}

impl TraceBlock {
    /// Record the outcome of one computation.
    pub fn record(
        session_id: SessionId,
        min_price: Option<MinPrice>,
        list: &[Product],
        at: DateTime<Utc>,
    ) -> Self {
        let body = if list.is_empty() {
            TraceBody::NoResults {
                message: no_results_message(min_price),
            }
        } else {
            TraceBody::Products {
                entries: list.iter().map(TraceEntry::from).collect(),
            }
        };

        Self {
            id: TraceBlockId::new(),
            session_id,
            sequence: 0,
            operation: TraceOperation::for_threshold(min_price),
            at,
            body,
        }
    }

    pub fn entries(&self) -> &[TraceEntry] {
        match &self.body {
            TraceBody::Products { entries } => entries,
            TraceBody::NoResults { .. } => &[],
        }
    }

    /// Console-style text rendering, one line per element.
    pub fn lines(&self) -> Vec<String> {
        let mut out = vec![
            format!("▶ {} @ {}", self.operation, self.at.format("%H:%M:%S")),
            "─".repeat(32),
        ];
        match &self.body {
            TraceBody::NoResults { message } => out.push(format!("  {message}")),
            TraceBody::Products { entries } => {
                for e in entries {
                    out.push(format!("  ── Product #{} ──", e.id));
                    out.push(format!("  name: {:?}", e.name));
                    out.push(format!("  category: {:?}", e.category));
                    out.push(format!("  price: ${}", e.price));
                    out.push(format!("  stock: {}", e.stock));
                }
            }
        }
        out
    }
}

fn no_results_message(min_price: Option<MinPrice>) -> String {
    match min_price {
        Some(min) => format!("No results found for min price: ${min}"),
        None => "No results found: the catalog is empty".to_string(),
    }
}

/// Session-long, append-only sequence of trace blocks.
#[derive(Debug, Clone)]
pub struct TraceLog {
    session_id: SessionId,
    blocks: Vec<TraceBlock>,
    scroll: Option<usize>,
}

impl TraceLog {
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            blocks: Vec::new(),
            scroll: None,
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Append a block, number it, and scroll to it.
    pub fn append(&mut self, mut block: TraceBlock) -> &TraceBlock {
        block.sequence = self.blocks.len() as u64 + 1;
        self.blocks.push(block);
        let index = self.blocks.len() - 1;
        self.scroll = Some(index);
        &self.blocks[index]
    }

    pub fn blocks(&self) -> &[TraceBlock] {
        &self.blocks
    }

    pub fn latest(&self) -> Option<&TraceBlock> {
        self.blocks.last()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of the block currently in view.
    pub fn scroll_position(&self) -> Option<usize> {
        self.scroll
    }

    /// Move the view to another block; out-of-range indices clamp to the end.
    pub fn scroll_to(&mut self, index: usize) {
        self.scroll = self.blocks.len().checked_sub(1).map(|last| index.min(last));
    }

    pub fn scroll_to_latest(&mut self) -> Option<&TraceBlock> {
        self.scroll = self.blocks.len().checked_sub(1);
        self.blocks.last()
    }

    /// Blocks from the given sequence number onwards, for incremental readers.
    pub fn since(&self, sequence: u64) -> &[TraceBlock] {
        let start = (sequence.saturating_sub(1) as usize).min(self.blocks.len());
        &self.blocks[start..]
    }
}
