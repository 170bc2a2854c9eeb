use serde::Serialize;

use crate::core::DateRange;
use crate::reports::{
    DelinquentRecord, DueSoonRecord, InstallmentBucket, KpiSnapshot, MonthlyPoint, TopClient,
};

/// Load state of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DatasetState<T> {
    /// No fetch has been issued yet.
    NotStarted,
    /// A fetch is in flight.
    Loading,
    /// The latest fetch succeeded.
    Loaded(T),
    /// The latest fetch failed; holds the user-facing message.
    Failed(String),
}

impl<T> Default for DatasetState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> DatasetState<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// What the dashboard is currently scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub range: DateRange,
    /// Selected client. Shown in the header only: the report endpoints take no client parameter.
    pub client_id: Option<String>,
}

impl Filter {
    pub const fn new(range: DateRange) -> Self {
        Self {
            range,
            client_id: None,
        }
    }

    #[must_use]
    pub fn with_client(mut self, client_id: impl Into<String>) -> Self {
        let id = client_id.into();
        self.client_id = (!id.trim().is_empty()).then_some(id);
        self
    }
}

/// The six datasets behind the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub kpis: DatasetState<KpiSnapshot>,
    pub monthly_evolution: DatasetState<Vec<MonthlyPoint>>,
    pub installments_status: DatasetState<Vec<InstallmentBucket>>,
    pub top_clients: DatasetState<Vec<TopClient>>,
    pub delinquents: DatasetState<Vec<DelinquentRecord>>,
    pub due_soon: DatasetState<Vec<DueSoonRecord>>,
}

impl DashboardData {
    pub(crate) fn mark_loading(&mut self) {
        self.kpis = DatasetState::Loading;
        self.monthly_evolution = DatasetState::Loading;
        self.installments_status = DatasetState::Loading;
        self.top_clients = DatasetState::Loading;
        self.delinquents = DatasetState::Loading;
        self.due_soon = DatasetState::Loading;
    }

    /// True while any dataset is still in flight. Drives the banner spinner only.
    pub const fn any_loading(&self) -> bool {
        self.kpis.is_loading()
            || self.monthly_evolution.is_loading()
            || self.installments_status.is_loading()
            || self.top_clients.is_loading()
            || self.delinquents.is_loading()
            || self.due_soon.is_loading()
    }
}

/// A point-in-time copy of the dashboard, safe to render without holding any lock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub filter: Filter,
    pub data: DashboardData,
    /// Set once any request was rejected with 401; the page must send the user to login.
    pub session_expired: bool,
    /// Bumped on every filter change; responses from older generations are dropped.
    pub generation: u64,
}
