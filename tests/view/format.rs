use loan_reports::view::format::{brl, brl_axis, date, month_label, percent};
use rust_decimal::Decimal;

use crate::common::day;

#[test]
fn brl_groups_thousands_with_comma_cents() {
    assert_eq!(brl(Decimal::new(123_456, 2)), "R$ 1.234,56");
    assert_eq!(brl(Decimal::from(1_000_000)), "R$ 1.000.000,00");
    assert_eq!(brl(Decimal::new(5, 1)), "R$ 0,50");
    assert_eq!(brl(Decimal::ZERO), "R$ 0,00");
}

#[test]
fn brl_negative_and_rounding() {
    assert_eq!(brl(Decimal::new(-12_345, 1)), "-R$ 1.234,50");
    assert_eq!(brl(Decimal::new(10_005, 3)), "R$ 10,01");
    // rounds to zero, no sign
    assert_eq!(brl(Decimal::new(-1, 3)), "R$ 0,00");
}

#[test]
fn axis_labels_drop_cents() {
    assert_eq!(brl_axis(Decimal::new(12_345, 1)), "R$ 1.235");
    assert_eq!(brl_axis(Decimal::from(40_000)), "R$ 40.000");
}

#[test]
fn percent_uses_decimal_comma() {
    assert_eq!(percent(12.5, 1), "12,5%");
    assert_eq!(percent(58.943, 1), "58,9%");
    assert_eq!(percent(58.943, 0), "59%");
    assert_eq!(percent(0.0, 1), "0,0%");
}

#[test]
fn dates_are_day_first() {
    assert_eq!(date(day(2024, 1, 31)), "31/01/2024");
    assert_eq!(date(day(2024, 12, 5)), "05/12/2024");
}

#[test]
fn month_labels() {
    assert_eq!(month_label("2024-01"), "jan/24");
    assert_eq!(month_label("2023-12"), "dez/23");
    assert_eq!(month_label("Q1"), "Q1");
}
