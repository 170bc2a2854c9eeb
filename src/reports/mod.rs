//! The report datasets served by `/api/reports/*` and the back-office summary.

pub(crate) mod api;
pub(crate) mod fallback;
mod model;
mod wire;

pub use model::{
    DashboardStats, DelinquentRecord, DueSoonRecord, InstallmentBucket, InstallmentStatus,
    KpiSnapshot, MonthlyPoint, TopClient,
};

use crate::core::{
    DateRange, ExportFormat, ReportClient, ReportError, ReportFuture, ReportKind, ReportSource,
};

/// Number of clients the top-clients report asks for by default.
pub const DEFAULT_TOP_CLIENTS_LIMIT: usize = 5;

/// A handle on every report for one date range.
///
/// When the API cannot be reached (connection error, timeout, non-2xx, bad
/// body) each method logs a warning, waits the client's fallback delay and
/// returns a fixed mock payload of the same shape. Only an expired session
/// (HTTP 401) is reported as an error, unless the client was built with
/// `fallback(false)`.
///
/// # Example
///
/// ```no_run
/// # use loan_reports::{DateRange, ReportClient, Reports};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReportClient::default();
/// let range = DateRange::month_to_date(loan_reports::core::today());
/// let reports = Reports::new(&client, range);
///
/// let kpis = reports.kpis().await?;
/// println!("pending: {}", kpis.amount_pending);
/// # Ok(())
/// # }
/// ```
pub struct Reports {
    client: ReportClient,
    range: DateRange,
}

impl Reports {
    pub fn new(client: &ReportClient, range: DateRange) -> Self {
        Self {
            client: client.clone(),
            range,
        }
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    /// Fetches the four headline KPIs.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn kpis(&self) -> Result<KpiSnapshot, ReportError> {
        api::kpis(&self.client, &self.range).await
    }

    /// Fetches the monthly loaned/received series.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn monthly_evolution(&self) -> Result<Vec<MonthlyPoint>, ReportError> {
        api::monthly_evolution(&self.client, &self.range).await
    }

    /// Fetches installment counts per status.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn installments_status(&self) -> Result<Vec<InstallmentBucket>, ReportError> {
        api::installments_status(&self.client, &self.range).await
    }

    /// Fetches the `limit` largest borrowers.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn top_clients(&self, limit: usize) -> Result<Vec<TopClient>, ReportError> {
        api::top_clients(&self.client, &self.range, limit).await
    }

    /// Fetches clients with overdue installments.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn delinquents(&self) -> Result<Vec<DelinquentRecord>, ReportError> {
        api::delinquents(&self.client, &self.range).await
    }

    /// Fetches installments coming due.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn due_soon(&self) -> Result<Vec<DueSoonRecord>, ReportError> {
        api::due_soon(&self.client, &self.range).await
    }

    /// Fetches the portfolio-wide summary counters. Not scoped to the date range.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    pub async fn stats(&self) -> Result<DashboardStats, ReportError> {
        api::dashboard_stats(&self.client).await
    }

    /// Fetches an exported document. Falls back to a plain-text placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Unauthorized`] when the session has expired.
    #[tracing::instrument(skip(self), fields(start = %self.range.start(), end = %self.range.end()))]
    pub async fn export(
        &self,
        kind: ReportKind,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ReportError> {
        crate::export::api::fetch_export(&self.client, kind, format, &self.range).await
    }
}

impl ReportSource for ReportClient {
    fn kpis<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, KpiSnapshot> {
        Box::pin(api::kpis(self, range))
    }

    fn monthly_evolution<'a>(
        &'a self,
        range: &'a DateRange,
    ) -> ReportFuture<'a, Vec<MonthlyPoint>> {
        Box::pin(api::monthly_evolution(self, range))
    }

    fn installments_status<'a>(
        &'a self,
        range: &'a DateRange,
    ) -> ReportFuture<'a, Vec<InstallmentBucket>> {
        Box::pin(api::installments_status(self, range))
    }

    fn top_clients<'a>(
        &'a self,
        range: &'a DateRange,
        limit: usize,
    ) -> ReportFuture<'a, Vec<TopClient>> {
        Box::pin(api::top_clients(self, range, limit))
    }

    fn delinquents<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, Vec<DelinquentRecord>> {
        Box::pin(api::delinquents(self, range))
    }

    fn due_soon<'a>(&'a self, range: &'a DateRange) -> ReportFuture<'a, Vec<DueSoonRecord>> {
        Box::pin(api::due_soon(self, range))
    }

    fn export<'a>(
        &'a self,
        kind: ReportKind,
        format: ExportFormat,
        range: &'a DateRange,
    ) -> ReportFuture<'a, Vec<u8>> {
        Box::pin(crate::export::api::fetch_export(self, kind, format, range))
    }
}
