//! Presentation view models.
//!
//! Every view is a pure function of a [`DatasetState`] and picks exactly one of
//! four renderings, checked in this order: loading, error, empty, content.

pub mod charts;
pub mod format;
pub mod kpi;
pub mod page;
pub mod tables;

pub use charts::{AxisTick, Bar, BarChart, LineChart, LinePoint, PieChart, PieSlice};
pub use kpi::KpiCard;
pub use page::{DashboardView, Page};
pub use tables::{
    DelinquentRow, DelinquentsTable, DueSoonRow, DueSoonTable, Severity, SortKey, SortOrder,
    SortState, Urgency,
};

use crate::dashboard::DatasetState;
use crate::reports::KpiSnapshot;

/// The one rendering a view shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section<V> {
    /// Skeleton placeholder. Also used before the first fetch is issued.
    Loading,
    /// Inline error replacing the section content.
    Error(String),
    /// Neutral message for a successful but empty result.
    Empty(&'static str),
    Content(V),
}

impl<V> Section<V> {
    pub const fn content(&self) -> Option<&V> {
        match self {
            Self::Content(v) => Some(v),
            _ => None,
        }
    }
}

/// Whether a loaded dataset has anything to draw.
pub trait ViewData {
    fn is_blank(&self) -> bool;
}

impl<T> ViewData for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl ViewData for KpiSnapshot {
    fn is_blank(&self) -> bool {
        false
    }
}

/// Resolve `state` to a [`Section`], building the content with `build`.
pub fn section<T: ViewData, V>(
    state: &DatasetState<T>,
    empty_message: &'static str,
    build: impl FnOnce(&T) -> V,
) -> Section<V> {
    match state {
        DatasetState::NotStarted | DatasetState::Loading => Section::Loading,
        DatasetState::Failed(msg) => Section::Error(msg.clone()),
        DatasetState::Loaded(data) if data.is_blank() => Section::Empty(empty_message),
        DatasetState::Loaded(data) => Section::Content(build(data)),
    }
}
