//! The report orchestrator.
//!
//! Owns the filter and one [`DatasetState`] per report. A refresh issues the six
//! fetches concurrently and applies each result on its own, so a failing report
//! never blocks or rolls back the others.
//!
//! Every filter change bumps a generation counter. A response is applied only if
//! it belongs to the current generation, so a slow answer to an old filter can
//! never overwrite data for the new one.

mod state;

pub use state::{DashboardData, DashboardSnapshot, DatasetState, Filter};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{ExportFormat, ReportError, ReportFuture, ReportKind, ReportSource};
use crate::export::{self, Download, DownloadSink};
use crate::reports::DEFAULT_TOP_CLIENTS_LIMIT;

#[derive(Debug)]
struct Inner {
    filter: Filter,
    generation: u64,
    data: DashboardData,
    session_expired: bool,
}

/// Selects the slot a fetch result is written to.
type Slot<T> = fn(&mut DashboardData) -> &mut DatasetState<T>;

/// Drives the six report datasets for the current filter.
///
/// # Example
///
/// ```no_run
/// # use std::sync::Arc;
/// # use loan_reports::{Dashboard, DateRange, Filter, ReportClient};
/// # #[tokio::main]
/// # async fn main() {
/// let client = ReportClient::default();
/// let filter = Filter::new(DateRange::month_to_date(loan_reports::core::today()));
/// let dashboard = Dashboard::new(Arc::new(client), filter);
///
/// dashboard.refresh().await;
/// let snap = dashboard.snapshot();
/// assert!(!snap.data.any_loading());
/// # }
/// ```
pub struct Dashboard {
    source: Arc<dyn ReportSource>,
    top_clients_limit: usize,
    inner: Mutex<Inner>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn ReportSource>, filter: Filter) -> Self {
        Self {
            source,
            top_clients_limit: DEFAULT_TOP_CLIENTS_LIMIT,
            inner: Mutex::new(Inner {
                filter,
                generation: 0,
                data: DashboardData::default(),
                session_expired: false,
            }),
        }
    }

    /// How many clients the top-clients fetch asks for. Default: 5.
    #[must_use]
    pub const fn top_clients_limit(mut self, limit: usize) -> Self {
        self.top_clients_limit = limit;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn filter(&self) -> Filter {
        self.lock().filter.clone()
    }

    /// Replace the filter and start a new generation. Returns the new generation.
    ///
    /// Every dataset goes back to `NotStarted` until the next refresh, and
    /// results of fetches issued before this call are discarded when they arrive.
    pub fn set_filter(&self, filter: Filter) -> u64 {
        let mut inner = self.lock();
        inner.filter = filter;
        inner.generation += 1;
        inner.data = DashboardData::default();
        tracing::debug!(generation = inner.generation, "filter changed");
        inner.generation
    }

    /// [`set_filter`](Self::set_filter) followed by [`refresh`](Self::refresh).
    pub async fn apply_filter(&self, filter: Filter) {
        self.set_filter(filter);
        self.refresh().await;
    }

    pub fn any_loading(&self) -> bool {
        self.lock().data.any_loading()
    }

    pub fn session_expired(&self) -> bool {
        self.lock().session_expired
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let inner = self.lock();
        DashboardSnapshot {
            filter: inner.filter.clone(),
            data: inner.data.clone(),
            session_expired: inner.session_expired,
            generation: inner.generation,
        }
    }

    /// Fetch all six datasets for the current filter.
    ///
    /// Never fails: each dataset ends up `Loaded` or `Failed` independently.
    /// A previous session expiry is cleared; a new 401 sets it again.
    pub async fn refresh(&self) {
        let (generation, range) = {
            let mut inner = self.lock();
            inner.data.mark_loading();
            inner.session_expired = false;
            (inner.generation, inner.filter.range)
        };
        tracing::debug!(generation, start = %range.start(), end = %range.end(), "refreshing dashboard");

        let src = self.source.as_ref();
        futures::join!(
            self.load(generation, src.kpis(&range), |d| &mut d.kpis),
            self.load(generation, src.monthly_evolution(&range), |d| &mut d.monthly_evolution),
            self.load(generation, src.installments_status(&range), |d| &mut d.installments_status),
            self.load(
                generation,
                src.top_clients(&range, self.top_clients_limit),
                |d| &mut d.top_clients
            ),
            self.load(generation, src.delinquents(&range), |d| &mut d.delinquents),
            self.load(generation, src.due_soon(&range), |d| &mut d.due_soon),
        );
    }

    async fn load<T>(&self, generation: u64, fetch: ReportFuture<'_, T>, slot: Slot<T>) {
        let result = fetch.await;

        let mut inner = self.lock();
        if inner.generation != generation {
            tracing::debug!(
                stale = generation,
                current = inner.generation,
                "discarding stale report response"
            );
            return;
        }

        let next = match result {
            Ok(v) => DatasetState::Loaded(v),
            Err(e) => {
                if e.is_unauthorized() {
                    inner.session_expired = true;
                }
                DatasetState::Failed(e.to_string())
            }
        };
        *slot(&mut inner.data) = next;
    }

    /// Export one report for the current date range through `sink`.
    ///
    /// # Errors
    ///
    /// Returns the error to show the user as a blocking alert. Nothing is retried.
    pub async fn export(
        &self,
        kind: ReportKind,
        format: ExportFormat,
        sink: &dyn DownloadSink,
    ) -> Result<Download, ReportError> {
        let range = self.lock().filter.range;
        let result = export::download(self.source.as_ref(), kind, format, &range, sink).await;
        if let Err(e) = &result
            && e.is_unauthorized()
        {
            self.lock().session_expired = true;
        }
        result
    }
}
