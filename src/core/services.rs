use core::future::Future;
use core::pin::Pin;

use crate::core::{DateRange, ExportFormat, ReportError, ReportKind};
use crate::reports::{
    DelinquentRecord, DueSoonRecord, InstallmentBucket, KpiSnapshot, MonthlyPoint, TopClient,
};

/// A boxed, sendable future returned by [`ReportSource`] methods.
pub type ReportFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ReportError>> + Send + 'a>>;

/// A trait for services that can produce the dashboard's report datasets.
///
/// This decouples the [`Dashboard`](crate::Dashboard) orchestrator from the HTTP
/// transport, making it easy to drive with scripted data in tests. It is
/// implemented by [`ReportClient`](crate::ReportClient).
pub trait ReportSource: Send + Sync {
    /// Loan KPIs for the range.
    fn kpis<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, KpiSnapshot>;

    /// Loaned vs. received per month, in source order.
    fn monthly_evolution<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, Vec<MonthlyPoint>>;

    /// Installment counts per status.
    fn installments_status<'a>(
        &'a self,
        range: &'a DateRange,
    ) -> ReportFuture<'a, Vec<InstallmentBucket>>;

    /// The `limit` largest borrowers, largest first.
    fn top_clients<'a>(
        &'a self,
        range: &'a DateRange,
        limit: usize,
    ) -> ReportFuture<'a, Vec<TopClient>>;

    /// Clients with overdue installments.
    fn delinquents<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, Vec<DelinquentRecord>>;

    /// Installments coming due.
    fn due_soon<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, Vec<DueSoonRecord>>;

    /// The rendered document for one report.
    fn export<'a>(
        &'a self,
        kind: ReportKind,
        format: ExportFormat,
        range: &'a DateRange,
    ) -> ReportFuture<'a, Vec<u8>>;
}
