//! pt-BR display formatting for currency, percentages and dates.

use chrono::{Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

const CURRENCY_SYMBOL: &str = "R$";

const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// `R$ 1.234,56`
pub fn brl(value: Decimal) -> String {
    currency(value, 2)
}

/// Axis tick form, no fraction digits: `R$ 1.235`
pub fn brl_axis(value: Decimal) -> String {
    currency(value, 0)
}

fn currency(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", dp as usize, rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(CURRENCY_SYMBOL);
    out.push(' ');
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }
    out
}

/// Insert `.` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `12,5%` with `decimals` fraction digits.
pub fn percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%").replace('.', ",")
}

/// `31/01/2024`
pub fn date(day: NaiveDate) -> String {
    day.format("%d/%m/%Y").to_string()
}

/// `2024-01` → `jan/24`. Labels that are not `YYYY-MM` are shown as sent.
pub fn month_label(raw: &str) -> String {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map(|d| format!("{}/{:02}", MONTHS_PT[d.month0() as usize], d.year() % 100))
        .unwrap_or_else(|_| raw.to_string())
}
