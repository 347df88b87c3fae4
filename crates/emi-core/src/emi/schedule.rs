//! First-year amortization table.
//!
//! The page shows only the first twelve installments, so the schedule is
//! always twelve rows long, whatever the tenure.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::emi::calculator::{all_positive, compute_monthly_emi, monthly_rate};
use crate::types::{round_currency, Money, RatePercent, Years};

/// Rows emitted by [`get_amortization_schedule`].
pub const SCHEDULE_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub emi: Money,
    pub principal: Money,
    pub interest: Money,
    pub balance: Money,
}

/// Split of each of the first twelve installments into interest and principal.
///
/// Interest is rounded per month; the principal part is the remainder of the
/// fixed EMI, so `emi == principal + interest` holds exactly. The running
/// balance carries the unrounded difference and is rounded only for display.
/// Non-computable inputs yield twelve zero rows.
pub fn get_amortization_schedule(
    principal: Money,
    annual_rate_percent: RatePercent,
    tenure_years: Years,
) -> Vec<AmortizationRow> {
    let emi = compute_monthly_emi(principal, annual_rate_percent, tenure_years);
    if emi.is_zero() || !all_positive(&[principal, annual_rate_percent, tenure_years]) {
        return (1..=SCHEDULE_MONTHS).map(zero_row).collect();
    }

    match amortize(principal, monthly_rate(annual_rate_percent), emi) {
        Some(rows) => rows,
        None => {
            warn!(%principal, %annual_rate_percent, %tenure_years, "schedule out of decimal range; reported as zero rows");
            (1..=SCHEDULE_MONTHS).map(zero_row).collect()
        }
    }
}

/// Twelve rows of the fixed-EMI split, or `None` if any step leaves decimal range.
fn amortize(principal: Money, r: Decimal, emi: Money) -> Option<Vec<AmortizationRow>> {
    let mut remaining = principal;
    let mut rows = Vec::with_capacity(SCHEDULE_MONTHS as usize);

    for month in 1..=SCHEDULE_MONTHS {
        let interest = round_currency(remaining.checked_mul(r)?);
        let principal_part = emi.checked_sub(interest)?;
        let next = remaining.checked_sub(principal_part)?;
        rows.push(AmortizationRow {
            month,
            emi,
            principal: principal_part,
            interest,
            balance: round_currency(next),
        });
        remaining = next;
    }

    Some(rows)
}

fn zero_row(month: u32) -> AmortizationRow {
    AmortizationRow {
        month,
        emi: Decimal::ZERO,
        principal: Decimal::ZERO,
        interest: Decimal::ZERO,
        balance: Decimal::ZERO,
    }
}
