//! Sortable delinquents and due-soon tables.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::format;
use crate::charges::LateChargePolicy;
use crate::reports::{DelinquentRecord, DueSoonRecord};
use crate::taxid;

/* ---------------- Sorting ---------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active column and direction of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortState {
    pub const fn new(key: SortKey) -> Self {
        Self {
            key,
            order: SortOrder::Ascending,
        }
    }

    /// Column header click: the active column flips, any other starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.flipped();
        } else {
            *self = Self::new(key);
        }
    }
}

/// Row accessors the table comparator sorts on.
pub trait Sortable {
    fn sort_name(&self) -> &str;
    /// Rows without a date compare equal on the date column.
    fn sort_date(&self) -> Option<NaiveDate>;
    fn sort_amount(&self) -> Decimal;
}

impl Sortable for DelinquentRecord {
    fn sort_name(&self) -> &str {
        &self.name
    }
    fn sort_date(&self) -> Option<NaiveDate> {
        None
    }
    fn sort_amount(&self) -> Decimal {
        self.amount_due
    }
}

impl Sortable for DueSoonRecord {
    fn sort_name(&self) -> &str {
        &self.name
    }
    fn sort_date(&self) -> Option<NaiveDate> {
        Some(self.due_date)
    }
    fn sort_amount(&self) -> Decimal {
        self.amount
    }
}

fn compare<T: Sortable>(a: &T, b: &T, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a
            .sort_name()
            .to_lowercase()
            .cmp(&b.sort_name().to_lowercase()),
        SortKey::Date => a.sort_date().cmp(&b.sort_date()),
        SortKey::Amount => a.sort_amount().cmp(&b.sort_amount()),
    }
}

/// Stable in-place sort; equal rows keep their current relative order either way.
pub fn sort_rows<T: Sortable>(rows: &mut [T], state: SortState) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, state.key);
        match state.order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

/* ---------------- Delinquents ---------------- */

/// Badge tier by number of overdue installments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// One installment.
    Low,
    /// Two or three.
    Medium,
    /// Four or more.
    High,
}

impl Severity {
    pub const fn from_overdue(installments: u32) -> Self {
        match installments {
            0..=1 => Self::Low,
            2..=3 => Self::Medium,
            _ => Self::High,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelinquentRow {
    pub name: String,
    pub tax_id: String,
    pub overdue_installments: u32,
    /// `1 parcela` / `4 parcelas`
    pub installments_label: String,
    pub severity: Severity,
    pub amount_due: Decimal,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelinquentsTable {
    pub rows: Vec<DelinquentRow>,
    pub sort: SortState,
    pub total_due: Decimal,
    pub total_label: String,
}

impl DelinquentsTable {
    pub fn build(records: &[DelinquentRecord], sort: SortState) -> Self {
        let mut sorted = records.to_vec();
        sort_rows(&mut sorted, sort);
        let total_due: Decimal = sorted.iter().map(|r| r.amount_due).sum();

        let rows = sorted
            .into_iter()
            .map(|r| DelinquentRow {
                tax_id: taxid::mask(&r.tax_id),
                installments_label: installments_label(r.overdue_installments),
                severity: Severity::from_overdue(r.overdue_installments),
                amount_label: format::brl(r.amount_due),
                overdue_installments: r.overdue_installments,
                amount_due: r.amount_due,
                name: r.name,
            })
            .collect();

        Self {
            rows,
            sort,
            total_due,
            total_label: format::brl(total_due),
        }
    }
}

fn installments_label(n: u32) -> String {
    if n == 1 {
        "1 parcela".to_string()
    } else {
        format!("{n} parcelas")
    }
}

/* ---------------- Due soon ---------------- */

/// How close an installment is to its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Urgency {
    /// Past due.
    Overdue,
    /// Due within 0–3 days.
    Urgent,
    /// Due within 4–7 days.
    Upcoming,
    /// More than a week away.
    Normal,
}

impl Urgency {
    /// Whole days from `today` until `due`; negative once past due.
    pub fn days_until(due: NaiveDate, today: NaiveDate) -> i64 {
        (due - today).num_days()
    }

    pub const fn from_days(days: i64) -> Self {
        match days {
            i64::MIN..=-1 => Self::Overdue,
            0..=3 => Self::Urgent,
            4..=7 => Self::Upcoming,
            _ => Self::Normal,
        }
    }

    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days(Self::days_until(due, today))
    }

    /// Badge text for a row `days` away.
    pub fn label(self, days: i64) -> String {
        match self {
            Self::Overdue => "Vencido".to_string(),
            Self::Urgent => format!("Urgente ({days}d)"),
            Self::Upcoming | Self::Normal => format!("{days} dias"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueSoonRow {
    pub name: String,
    pub tax_id: String,
    pub due_date: NaiveDate,
    pub due_label: String,
    pub amount: Decimal,
    pub amount_label: String,
    pub days: i64,
    pub urgency: Urgency,
    pub urgency_label: String,
    /// Amount with fine and interest, shown only for overdue rows past the grace period.
    pub updated_amount_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueSoonTable {
    pub rows: Vec<DueSoonRow>,
    pub sort: SortState,
    pub total: Decimal,
    pub total_label: String,
}

impl DueSoonTable {
    pub fn build(
        records: &[DueSoonRecord],
        sort: SortState,
        today: NaiveDate,
        charges: &LateChargePolicy,
    ) -> Self {
        let mut sorted = records.to_vec();
        sort_rows(&mut sorted, sort);
        let total: Decimal = sorted.iter().map(|r| r.amount).sum();

        let rows = sorted
            .into_iter()
            .map(|r| {
                let days = Urgency::days_until(r.due_date, today);
                let urgency = Urgency::from_days(days);
                let updated = charges.updated_amount(r.amount, Decimal::ZERO, r.due_date, today);
                DueSoonRow {
                    tax_id: taxid::mask(&r.tax_id),
                    due_label: format::date(r.due_date),
                    amount_label: format::brl(r.amount),
                    urgency_label: urgency.label(days),
                    updated_amount_label: (updated.days_late > 0)
                        .then(|| format::brl(updated.total)),
                    days,
                    urgency,
                    due_date: r.due_date,
                    amount: r.amount,
                    name: r.name,
                }
            })
            .collect();

        Self {
            rows,
            sort,
            total,
            total_label: format::brl(total),
        }
    }
}
