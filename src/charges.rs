//! Late fine and interest on unpaid installments.
//!
//! Past the grace period an installment owes a flat fine on the original
//! amount plus simple interest pro-rated over 30-day months.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Back-office settings for late charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateChargePolicy {
    /// Days after the due date with no charges.
    pub grace_days: i64,
    /// Flat fine, percent of the original amount.
    pub fine_percent: Decimal,
    /// Interest per 30 days late, percent of the original amount.
    pub monthly_interest_percent: Decimal,
}

impl Default for LateChargePolicy {
    fn default() -> Self {
        Self {
            grace_days: 3,
            fine_percent: Decimal::TEN,
            monthly_interest_percent: Decimal::TWO,
        }
    }
}

/// An installment amount with late charges applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdatedAmount {
    pub fine: Decimal,
    pub interest: Decimal,
    pub total: Decimal,
    /// Zero while the installment is on time or inside the grace period.
    pub days_late: i64,
}

impl LateChargePolicy {
    /// Amount owed on `today` for an unpaid installment of `original` due on `due`.
    pub fn updated_amount(
        &self,
        original: Decimal,
        discount: Decimal,
        due: NaiveDate,
        today: NaiveDate,
    ) -> UpdatedAmount {
        let days_late = (today - due).num_days();
        if days_late <= self.grace_days {
            return UpdatedAmount {
                fine: Decimal::ZERO,
                interest: Decimal::ZERO,
                total: original - discount,
                days_late: 0,
            };
        }

        let hundred = Decimal::ONE_HUNDRED;
        let fine = original * self.fine_percent / hundred;
        let months = Decimal::from(days_late) / Decimal::from(30);
        let interest = original * self.monthly_interest_percent / hundred * months;

        // the total is rounded once, from the unrounded components
        UpdatedAmount {
            fine: round_cents(fine),
            interest: round_cents(interest),
            total: round_cents(original + fine + interest - discount),
            days_late,
        }
    }
}

fn round_cents(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
