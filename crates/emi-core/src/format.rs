//! Rupee formatting in Indian units.
//!
//! Validation messages and CLI tables quote amounts the way the page shows
//! them: `₹1,70,00,000` in full, or `₹1.7 Cr` / `₹50 Lakhs` when compact.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::types::{round_currency, Money};

const LAKH: Decimal = dec!(100_000);
const CRORE: Decimal = dec!(10_000_000);

/// Full amount with Indian digit grouping, e.g. `₹1,70,00,000`.
///
/// Fractional rupees are rounded away first.
pub fn format_inr(amount: Money) -> String {
    let rounded = round_currency(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}₹{}", group_indian(&digits))
}

/// Compact amount in crores or lakhs, e.g. `₹1.7 Cr`, `₹50 Lakhs`.
///
/// Amounts below one lakh fall back to [`format_inr`].
pub fn format_inr_compact(amount: Money) -> String {
    let abs = amount.abs();
    let sign = if amount.is_sign_negative() { "-" } else { "" };

    if abs >= CRORE {
        format!("{sign}₹{} Cr", units(abs, CRORE))
    } else if abs >= LAKH {
        let lakhs = units(abs, LAKH);
        let label = if lakhs == Decimal::ONE { "Lakh" } else { "Lakhs" };
        format!("{sign}₹{lakhs} {label}")
    } else {
        format_inr(amount)
    }
}

fn units(abs: Money, unit: Decimal) -> Decimal {
    (abs / unit)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Group a plain digit string as 12,34,56,789.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
