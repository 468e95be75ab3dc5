//! Interactive session: the filter and sort controls plus the trace log.
//!
//! All mutable state of a catalog page lives here and is passed around
//! explicitly. Every successful control action recomputes the view once and
//! appends exactly one trace block; a rejected filter input changes nothing.

use chrono::{DateTime, Utc};

use storefront_catalog::{Catalog, CatalogStore, MinPrice};
use storefront_core::{DomainResult, SessionId};

use crate::pipeline::{self, ViewFrame};
use crate::render::RenderModel;
use crate::sort::SortKey;
use crate::trace::{TraceBlock, TraceLog};

/// Filter control state machine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FilterState {
    Idle,
    Filtered(MinPrice),
}

/// What the front end should refresh after a control action.
#[derive(Debug)]
pub struct Refresh<'a> {
    pub render: &'a RenderModel,
    pub trace: &'a TraceBlock,
    /// The raw filter input box should be emptied.
    pub clear_input: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    store: CatalogStore,
    sort: Option<SortKey>,
    render: RenderModel,
    trace: TraceLog,
}

impl Session {
    /// Open a session and perform the initial render.
    pub fn start(catalog: Catalog, at: DateTime<Utc>) -> Self {
        let id = SessionId::new();
        let store = CatalogStore::new(catalog);
        let ViewFrame { render, trace } = pipeline::run(&store, None, id, at);

        let mut log = TraceLog::new(id);
        log.append(trace);

        tracing::info!(session_id = %id, products = store.total(), "session started");

        Self {
            id,
            store,
            sort: None,
            render,
            trace: log,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn filter_state(&self) -> FilterState {
        match self.store.min_price() {
            Some(min) => FilterState::Filtered(min),
            None => FilterState::Idle,
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// The view currently on screen.
    pub fn render(&self) -> &RenderModel {
        &self.render
    }

    pub fn trace(&self) -> &TraceLog {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut TraceLog {
        &mut self.trace
    }

    /// Filter control: validate raw input and apply it as the threshold.
    ///
    /// On invalid input returns the validation error and leaves the filter,
    /// the displayed view and the trace log exactly as they were.
    pub fn apply_filter(&mut self, raw: &str, at: DateTime<Utc>) -> DomainResult<Refresh<'_>> {
        let min = match MinPrice::parse(raw) {
            Ok(min) => min,
            Err(e) => {
                tracing::warn!(input = raw, "rejected minimum price input");
                return Err(e);
            }
        };
        self.store.set_min_price(min.value())?;
        tracing::info!(min_price = min.value(), "minimum price filter applied");
        Ok(self.refresh(at, false))
    }

    /// Filter control: drop the threshold. Always succeeds.
    pub fn reset_filter(&mut self, at: DateTime<Utc>) -> Refresh<'_> {
        self.store.clear_min_price();
        tracing::info!("minimum price filter reset");
        self.refresh(at, true)
    }

    /// Sort control: store the selector value and re-render.
    ///
    /// Unrecognized values select "no reordering".
    pub fn select_sort(&mut self, raw: &str, at: DateTime<Utc>) -> Refresh<'_> {
        self.sort = SortKey::parse_lenient(raw);
        self.refresh(at, false)
    }

    fn refresh(&mut self, at: DateTime<Utc>, clear_input: bool) -> Refresh<'_> {
        let ViewFrame { render, trace } = pipeline::run(&self.store, self.sort, self.id, at);
        self.render = render;
        let trace = self.trace.append(trace);
        Refresh {
            render: &self.render,
            trace,
            clear_input,
        }
    }
}
