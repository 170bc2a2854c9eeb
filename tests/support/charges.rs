use loan_reports::LateChargePolicy;
use rust_decimal::Decimal;

use crate::common::day;

fn policy() -> LateChargePolicy {
    LateChargePolicy::default()
}

#[test]
fn on_time_owes_original_minus_discount() {
    let u = policy().updated_amount(
        Decimal::from(1000),
        Decimal::from(50),
        day(2024, 1, 20),
        day(2024, 1, 15),
    );
    assert_eq!(u.total, Decimal::from(950));
    assert_eq!(u.fine, Decimal::ZERO);
    assert_eq!(u.days_late, 0);
}

#[test]
fn grace_period_is_inclusive() {
    let u = policy().updated_amount(
        Decimal::from(1000),
        Decimal::ZERO,
        day(2024, 1, 12),
        day(2024, 1, 15),
    );
    assert_eq!(u.days_late, 0);
    assert_eq!(u.total, Decimal::from(1000));
}

#[test]
fn fine_and_pro_rated_interest_past_grace() {
    let u = policy().updated_amount(
        Decimal::from(1000),
        Decimal::ZERO,
        day(2024, 1, 5),
        day(2024, 1, 15),
    );
    assert_eq!(u.days_late, 10);
    assert_eq!(u.fine, Decimal::from(100));
    assert_eq!(u.interest, Decimal::new(667, 2));
    assert_eq!(u.total, Decimal::new(110_667, 2));
}

#[test]
fn full_month_late() {
    let u = policy().updated_amount(
        Decimal::from(500),
        Decimal::from(25),
        day(2024, 1, 1),
        day(2024, 1, 31),
    );
    assert_eq!(u.days_late, 30);
    assert_eq!(u.fine, Decimal::from(50));
    assert_eq!(u.interest, Decimal::from(10));
    assert_eq!(u.total, Decimal::from(535));
}

#[test]
fn custom_policy() {
    let p = LateChargePolicy {
        grace_days: 0,
        fine_percent: Decimal::TWO,
        monthly_interest_percent: Decimal::ONE,
    };
    let u = p.updated_amount(Decimal::from(300), Decimal::ZERO, day(2024, 3, 1), day(2024, 3, 2));
    assert_eq!(u.days_late, 1);
    assert_eq!(u.fine, Decimal::from(6));
    assert_eq!(u.interest, Decimal::new(10, 2));
}

#[test]
fn total_is_rounded_from_unrounded_fine_and_interest() {
    let u = policy().updated_amount(
        Decimal::new(10_005, 2),
        Decimal::ZERO,
        day(2024, 1, 7),
        day(2024, 1, 15),
    );
    assert_eq!(u.days_late, 8);
    // 10.005 and 0.5336 round down on their own
    assert_eq!(u.fine, Decimal::from(10));
    assert_eq!(u.interest, Decimal::new(53, 2));
    // 100.05 + 10.005 + 0.5336 = 110.5886
    assert_eq!(u.total, Decimal::new(11_059, 2));
}
