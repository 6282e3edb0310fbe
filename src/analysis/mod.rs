//! Query lifecycle around the matcher: `Idle -> Running -> Settled(results)`.
//!
//! An analysis waits out a simulated network latency, then runs the matcher
//! against the injected catalog. A submission that arrives while another is
//! still running is ignored.

use log::{debug, info, warn};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::catalog::ReferenceCatalog;
use crate::common::{format_elapsed, Reference};
use crate::filter::FilterRequest;
use crate::matching::match_references;

/// Simulated search latency used when none is configured
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    /// Nothing has run yet
    #[default]
    Idle,
    /// A query is in flight; earlier results have been cleared
    Running,
    /// The last query finished with these results (possibly none)
    Settled(Vec<Reference>),
}

impl QueryState {
    pub fn is_running(&self) -> bool {
        matches!(self, QueryState::Running)
    }

    /// Results to display, if the last query settled
    pub fn results(&self) -> Option<&[Reference]> {
        match self {
            QueryState::Settled(results) => Some(results),
            _ => None,
        }
    }
}

/// Runs analyses against one catalog, at most one at a time
#[derive(Debug)]
pub struct Analyzer {
    catalog: Arc<ReferenceCatalog>,
    latency: Duration,
    state: Mutex<QueryState>,
}

impl Analyzer {
    pub fn new(catalog: Arc<ReferenceCatalog>, latency: Duration) -> Self {
        Self {
            catalog,
            latency,
            state: Mutex::new(QueryState::Idle),
        }
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Snapshot of the current lifecycle state
    pub fn state(&self) -> QueryState {
        self.lock_state().clone()
    }

    /// Run one analysis. Returns `None` without doing anything if another
    /// analysis is already running.
    pub async fn submit_analysis(&self, request: FilterRequest) -> Option<Vec<Reference>> {
        {
            let mut state = self.lock_state();
            if state.is_running() {
                warn!("Analysis already running, ignoring request: {}", request);
                return None;
            }
            *state = QueryState::Running;
        }
        let mut run = RunningGuard::new(self);

        info!("Running analysis: {}", request);
        let start = Instant::now();

        if !self.latency.is_zero() {
            debug!("Simulating {}ms of search latency", self.latency.as_millis());
            tokio::time::sleep(self.latency).await;
        }

        let results: Vec<Reference> = match_references(self.catalog.references(), &request)
            .into_iter()
            .cloned()
            .collect();

        info!(
            "Analysis settled with {} of {} references in {}",
            results.len(),
            self.catalog.len(),
            format_elapsed(start.elapsed())
        );

        run.settle(results.clone());
        Some(results)
    }

    // The state is always left consistent, so a poisoned lock is still usable.
    fn lock_state(&self) -> MutexGuard<'_, QueryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Puts the analyzer back to `Idle` if a running query is dropped before it settles
struct RunningGuard<'a> {
    analyzer: &'a Analyzer,
    settled: bool,
}

impl<'a> RunningGuard<'a> {
    fn new(analyzer: &'a Analyzer) -> Self {
        Self {
            analyzer,
            settled: false,
        }
    }

    fn settle(&mut self, results: Vec<Reference>) {
        *self.analyzer.lock_state() = QueryState::Settled(results);
        self.settled = true;
    }
}

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.analyzer.lock_state();
        if state.is_running() {
            warn!("Analysis dropped before settling, returning to idle");
            *state = QueryState::Idle;
        }
    }
}
