use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Headline currency figures for a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSnapshot {
    /// Principal lent out in the period.
    pub amount_loaned: Decimal,
    /// Installment payments received in the period.
    pub amount_received: Decimal,
    /// Open balance still to be collected.
    pub amount_pending: Decimal,
    /// Interest earned in the period.
    pub interest_revenue: Decimal,
}

/// One month of the loaned-vs-received series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    /// Calendar month as sent by the API, normally `YYYY-MM`.
    pub month: String,
    pub loaned: Decimal,
    pub received: Decimal,
}

/// Lifecycle status of an installment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InstallmentStatus {
    Paid,
    Outstanding,
    Overdue,
}

impl InstallmentStatus {
    /// Display label used in chart legends.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Paid => "Pagas",
            Self::Outstanding => "Em aberto",
            Self::Overdue => "Vencidas",
        }
    }
}

/// Number of installments in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstallmentBucket {
    pub status: InstallmentStatus,
    pub count: u64,
}

/// A client ranked by total borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopClient {
    pub name: String,
    pub total: Decimal,
}

/// A client with at least one overdue installment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DelinquentRecord {
    pub name: String,
    /// CPF or CNPJ as stored by the back office.
    pub tax_id: String,
    pub overdue_installments: u32,
    pub amount_due: Decimal,
}

/// An unpaid installment coming due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueSoonRecord {
    pub name: String,
    pub tax_id: String,
    pub due_date: NaiveDate,
    pub amount: Decimal,
}

/// Portfolio-wide counters from the back-office summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_clients: u64,
    pub pending_charges: u64,
    pub overdue_charges: u64,
    pub total_pending: Decimal,
    pub total_received: Decimal,
}
