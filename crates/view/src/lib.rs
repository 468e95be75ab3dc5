//! View pipeline.
//!
//! Turns (catalog, filter threshold, sort key) into an ordered display list,
//! then derives two outputs from that one list: a structured [`RenderModel`]
//! for the screen and a [`TraceBlock`] for the append-only console log.
//! Computing both together keeps them from drifting apart.

pub mod pipeline;
pub mod render;
pub mod session;
pub mod sort;
pub mod trace;

pub use pipeline::{compute_view, run, ViewFrame};
pub use render::{
    category_icon, CountSummary, DisplayRecord, EmptyNotice, ImageRef, RenderModel, StockState,
};
pub use session::{FilterState, Refresh, Session};
pub use sort::{collate, SortKey, UnknownSortKey};
pub use trace::{TraceBlock, TraceBody, TraceEntry, TraceLog, TraceOperation};
