//! Fixed payloads served when the report API cannot be reached.
//!
//! Shapes match the live responses exactly so callers render them unchanged.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::model::{
    DashboardStats, DelinquentRecord, DueSoonRecord, InstallmentBucket, InstallmentStatus,
    KpiSnapshot, MonthlyPoint, TopClient,
};
use crate::core::{DateRange, ReportKind};

fn brl(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub(crate) fn kpis() -> KpiSnapshot {
    KpiSnapshot {
        amount_loaned: brl(15_000_000),
        amount_received: brl(9_850_000),
        amount_pending: brl(5_150_000),
        interest_revenue: brl(1_275_050),
    }
}

pub(crate) fn monthly_evolution() -> Vec<MonthlyPoint> {
    [
        ("2024-01", 2_000_000, 1_200_000),
        ("2024-02", 2_500_000, 1_500_000),
        ("2024-03", 1_800_000, 1_750_000),
        ("2024-04", 3_000_000, 1_900_000),
        ("2024-05", 2_200_000, 2_100_000),
        ("2024-06", 3_500_000, 1_400_000),
    ]
    .into_iter()
    .map(|(month, loaned, received)| MonthlyPoint {
        month: month.to_string(),
        loaned: brl(loaned),
        received: brl(received),
    })
    .collect()
}

pub(crate) fn installments_status() -> Vec<InstallmentBucket> {
    vec![
        InstallmentBucket {
            status: InstallmentStatus::Paid,
            count: 145,
        },
        InstallmentBucket {
            status: InstallmentStatus::Outstanding,
            count: 78,
        },
        InstallmentBucket {
            status: InstallmentStatus::Overdue,
            count: 23,
        },
    ]
}

pub(crate) fn top_clients(limit: usize) -> Vec<TopClient> {
    [
        ("Maria Silva", 2_500_000),
        ("João Santos", 1_850_000),
        ("Ana Oliveira", 1_500_000),
        ("Carlos Souza", 1_200_000),
        ("Fernanda Lima", 980_000),
        ("Ricardo Alves", 750_000),
    ]
    .into_iter()
    .take(limit)
    .map(|(name, total)| TopClient {
        name: name.to_string(),
        total: brl(total),
    })
    .collect()
}

pub(crate) fn delinquents() -> Vec<DelinquentRecord> {
    [
        ("Pedro Costa", "12345678901", 4, 450_000),
        ("Juliana Rocha", "98765432100", 2, 180_000),
        ("Marcos Pereira", "11222333000181", 1, 75_000),
        ("Patrícia Gomes", "45678912300", 6, 920_000),
    ]
    .into_iter()
    .map(|(name, tax_id, overdue, due)| DelinquentRecord {
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        overdue_installments: overdue,
        amount_due: brl(due),
    })
    .collect()
}

/// Due dates are laid out relative to `today` so every urgency bucket is represented.
pub(crate) fn due_soon(today: NaiveDate) -> Vec<DueSoonRecord> {
    [
        ("Lucas Martins", "32165498700", 1_i64, 85_000),
        ("Beatriz Ferreira", "65498732100", 3, 120_000),
        ("Roberto Dias", "78945612300", 5, 64_000),
        ("Camila Ribeiro", "15975345600", 12, 230_000),
        ("Eduardo Nunes", "35795145600", -2, 99_000),
    ]
    .into_iter()
    .map(|(name, tax_id, offset, amount)| DueSoonRecord {
        name: name.to_string(),
        tax_id: tax_id.to_string(),
        due_date: shift(today, offset),
        amount: brl(amount),
    })
    .collect()
}

pub(crate) fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_clients: 58,
        pending_charges: 101,
        overdue_charges: 23,
        total_pending: brl(5_150_000),
        total_received: brl(9_850_000),
    }
}

/// Placeholder document handed out when the export endpoint fails.
pub(crate) fn export_placeholder(kind: ReportKind, range: &DateRange) -> Vec<u8> {
    format!(
        "Relatório: {kind}\nPeríodo: {} a {}\n\nExportação indisponível: arquivo gerado localmente.\n",
        range.start().format("%Y-%m-%d"),
        range.end().format("%Y-%m-%d"),
    )
    .into_bytes()
}

fn shift(day: NaiveDate, offset: i64) -> NaiveDate {
    let n = Days::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        day.checked_add_days(n)
    } else {
        day.checked_sub_days(n)
    };
    shifted.unwrap_or(day)
}
