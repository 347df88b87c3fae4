use emi_core::{
    compute_monthly_emi, compute_total_amount, compute_total_interest, get_amortization_schedule,
    get_emi_breakdown,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Loan amounts from one lakh to a hundred crore.
fn principal() -> impl Strategy<Value = Decimal> {
    (100_000i64..=1_000_000_000).prop_map(Decimal::from)
}

/// Rates within the calculator bounds, in tenths of a percent.
fn rate() -> impl Strategy<Value = Decimal> {
    (65i64..=150).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn tenure() -> impl Strategy<Value = Decimal> {
    (1i64..=30).prop_map(Decimal::from)
}

/// Zero, negative, or otherwise unusable input.
fn non_positive() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=0).prop_map(Decimal::from)
}

proptest! {
    #[test]
    fn emi_positive_for_positive_inputs(p in principal(), r in rate(), t in tenure()) {
        prop_assert!(compute_monthly_emi(p, r, t) > Decimal::ZERO);
    }

    #[test]
    fn every_computation_zero_for_bad_principal(bad in non_positive(), r in rate(), t in tenure()) {
        let b = get_emi_breakdown(bad, r, t);
        prop_assert_eq!(b.monthly_emi, Decimal::ZERO);
        prop_assert_eq!(b.total_interest, Decimal::ZERO);
        prop_assert_eq!(b.total_amount, Decimal::ZERO);
    }

    #[test]
    fn every_computation_zero_for_bad_rate_or_tenure(p in principal(), bad in non_positive(), t in tenure()) {
        prop_assert_eq!(compute_monthly_emi(p, bad, t), Decimal::ZERO);
        prop_assert_eq!(compute_monthly_emi(p, t, bad), Decimal::ZERO);
        prop_assert_eq!(compute_total_amount(p, bad), Decimal::ZERO);
        prop_assert_eq!(compute_total_interest(p, bad, p), Decimal::ZERO);
    }

    #[test]
    fn emi_increases_with_principal(
        p in principal(),
        extra in 1_000i64..=1_000_000,
        r in rate(),
        t in tenure(),
    ) {
        let lower = compute_monthly_emi(p, r, t);
        let higher = compute_monthly_emi(p + Decimal::from(extra), r, t);
        prop_assert!(higher > lower, "{} -> {}", lower, higher);
    }

    #[test]
    fn emi_increases_with_rate(p in principal(), tenths in 65i64..150, t in tenure()) {
        let lower = compute_monthly_emi(p, Decimal::new(tenths, 1), t);
        let higher = compute_monthly_emi(p, Decimal::new(tenths + 1, 1), t);
        prop_assert!(higher > lower, "{} -> {}", lower, higher);
    }

    #[test]
    fn emi_decreases_with_tenure(p in principal(), r in rate(), years in 1i64..30) {
        let shorter = compute_monthly_emi(p, r, Decimal::from(years));
        let longer = compute_monthly_emi(p, r, Decimal::from(years + 1));
        prop_assert!(longer < shorter, "{} -> {}", shorter, longer);
    }

    #[test]
    fn schedule_rows_split_emi(p in principal(), r in rate(), t in tenure()) {
        let rows = get_amortization_schedule(p, r, t);
        prop_assert_eq!(rows.len(), 12);
        for row in &rows {
            prop_assert_eq!(row.emi, row.principal + row.interest);
        }
    }

    #[test]
    fn schedule_balance_strictly_decreases(p in principal(), r in rate(), t in tenure()) {
        let rows = get_amortization_schedule(p, r, t);
        prop_assert!(rows[0].balance < p);
        for pair in rows.windows(2) {
            prop_assert!(pair[1].balance < pair[0].balance);
        }
    }

    #[test]
    fn breakdown_is_pure(p in principal(), r in rate(), t in tenure()) {
        prop_assert_eq!(get_emi_breakdown(p, r, t), get_emi_breakdown(p, r, t));
    }

    #[test]
    fn total_amount_is_emi_times_months(p in principal(), r in rate(), t in tenure()) {
        let b = get_emi_breakdown(p, r, t);
        prop_assert_eq!(b.total_amount, b.monthly_emi * b.tenure_months);
        prop_assert_eq!(b.total_amount, b.principal + b.total_interest);
    }
}
