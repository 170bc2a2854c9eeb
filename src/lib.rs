//! loan-reports: typed client and presentation layer for a loan back-office reporting API.
//!
//! - [`ReportClient`] talks to `/api/reports/*`, attaching the stored bearer token,
//!   and answers with fixed mock data when the API is unreachable.
//! - [`Reports`] is a per-date-range handle on the six report datasets.
//! - [`Dashboard`] orchestrates the six fetches for a filter and keeps one
//!   [`DatasetState`] per dataset, dropping responses to superseded filters.
//! - [`view`] turns dashboard snapshots into formatted cards, charts and tables.
//! - [`export`] downloads report documents to a [`DownloadSink`].

pub mod charges;
pub mod core;
pub mod dashboard;
pub mod export;
pub mod reports;
pub mod taxid;
pub mod view;

pub use charges::{LateChargePolicy, UpdatedAmount};
pub use core::client::{FileTokenStore, MemoryTokenStore, SessionHook, TokenStore};
pub use core::{
    Config, DateRange, ExportFormat, ReportClient, ReportClientBuilder, ReportError, ReportKind,
    ReportSource,
};
pub use dashboard::{Dashboard, DashboardData, DashboardSnapshot, DatasetState, Filter};
pub use export::{DirectorySink, Download, DownloadSink, export_filename};
pub use reports::{
    DashboardStats, DelinquentRecord, DueSoonRecord, InstallmentBucket, InstallmentStatus,
    KpiSnapshot, MonthlyPoint, Reports, TopClient,
};
pub use view::{Page, Section};
