//! Generic data-table controller.
//!
//! One instance owns the fetch/render lifecycle of one entity collection.
//! A load fully replaces the table model; there is no incremental patching.
//! The fetched records are kept alongside the rendered rows as a typed
//! index, so row-scoped actions read the original record rather than
//! re-parsing rendered text.
//!
//! Loads are guarded by a generation counter: each `load` bumps the
//! generation, and a completion whose generation is no longer current is
//! discarded outright — no render, no error banner. A failed (non-stale)
//! load routes to the error banner and leaves the previous content intact.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use gateway::GatewayError;

use crate::notify::{Banner, BannerKind};

#[derive(Debug)]
struct TableState<R> {
    records: Vec<R>,
    rows: Vec<Vec<String>>,
    generation: u64,
}

impl<R> Default for TableState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rows: Vec::new(),
            generation: 0,
        }
    }
}

/// How a `load` call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The fetch succeeded and the table was re-rendered with this many rows.
    Rendered(usize),
    /// A newer load was issued while this one was in flight; discarded.
    Superseded,
    /// The fetch failed; previous content untouched, error banner shown.
    Failed,
}

/// Table controller for records of type `R`.
///
/// Clones share state, so a page can hand a clone to a long-running task
/// while keeping its own handle.
pub struct DataTable<R> {
    columns: &'static [&'static str],
    project: fn(&R) -> Vec<String>,
    state: Arc<Mutex<TableState<R>>>,
}

impl<R> Clone for DataTable<R> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns,
            project: self.project,
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Clone> DataTable<R> {
    pub fn new(columns: &'static [&'static str], project: fn(&R) -> Vec<String>) -> Self {
        Self {
            columns,
            project,
            state: Arc::new(Mutex::new(TableState::default())),
        }
    }

    fn locked(&self) -> MutexGuard<'_, TableState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs one fetch/render cycle. `context` names the collection in the
    /// failure banner ("Failed to load {context}. ...").
    pub async fn load<Fut>(&self, context: &str, error_box: &Banner, fetch: Fut) -> LoadOutcome
    where
        Fut: Future<Output = Result<Vec<R>, GatewayError>>,
    {
        let generation = {
            let mut state = self.locked();
            state.generation += 1;
            state.generation
        };

        match fetch.await {
            Ok(records) => {
                let mut state = self.locked();
                if state.generation != generation {
                    debug!(context, generation, "stale load discarded");
                    return LoadOutcome::Superseded;
                }
                state.rows = records.iter().map(|r| (self.project)(r)).collect();
                state.records = records;
                debug!(context, rows = state.rows.len(), "table reloaded");
                LoadOutcome::Rendered(state.rows.len())
            }
            Err(err) => {
                let state = self.locked();
                if state.generation != generation {
                    debug!(context, generation, "stale failed load discarded");
                    return LoadOutcome::Superseded;
                }
                drop(state);
                error_box.show(
                    format!("Failed to load {context}. {err}"),
                    BannerKind::Error,
                );
                LoadOutcome::Failed
            }
        }
    }

    /// True when the collection is empty and the "no data" placeholder is
    /// the visible content.
    pub fn placeholder_visible(&self) -> bool {
        self.locked().records.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.locked().rows.len()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.locked().rows.clone()
    }

    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// The record behind a rendered row.
    pub fn record(&self, row: usize) -> Option<R> {
        self.locked().records.get(row).cloned()
    }

    pub fn records(&self) -> Vec<R> {
        self.locked().records.clone()
    }

    /// Looks a record up in the typed index.
    pub fn find_record<P>(&self, mut predicate: P) -> Option<R>
    where
        P: FnMut(&R) -> bool,
    {
        self.locked().records.iter().find(|r| predicate(r)).cloned()
    }
}
