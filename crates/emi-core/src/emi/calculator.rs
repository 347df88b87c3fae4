//! Equated monthly installment on a reducing-balance home loan.
//!
//! Every function here is total: missing, zero or negative input yields a
//! zero result instead of an error, because the page recomputes on every
//! slider move and fields are routinely empty mid-edit. Callers that need to
//! tell the user *why* consult [`crate::emi::validation`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::emi::schedule::{get_amortization_schedule, AmortizationRow};
use crate::types::{round_currency, Money, RatePercent, Years};

pub(crate) const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// Loan inputs as they arrive from the page. Absent fields count as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    #[serde(default, alias = "loanAmount")]
    pub principal: Option<Money>,
    #[serde(default, alias = "interestRate", alias = "rate")]
    pub annual_rate_percent: Option<RatePercent>,
    #[serde(default, alias = "tenure")]
    pub tenure_years: Option<Years>,
}

/// Summary figures shown beside the calculator sliders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiBreakdown {
    pub monthly_emi: Money,
    pub principal: Money,
    pub total_interest: Money,
    pub total_amount: Money,
    pub tenure_months: Decimal,
    pub tenure_years: Years,
    pub interest_rate: RatePercent,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate_percent: RatePercent, tenure_years: Years) -> Self {
        Self {
            principal: Some(principal),
            annual_rate_percent: Some(annual_rate_percent),
            tenure_years: Some(tenure_years),
        }
    }

    /// All three fields present and strictly positive.
    pub fn is_computable(&self) -> bool {
        let (p, r, t) = self.values();
        all_positive(&[p, r, t])
    }

    /// Field values with missing ones read as zero.
    pub fn values(&self) -> (Money, RatePercent, Years) {
        (
            self.principal.unwrap_or_default(),
            self.annual_rate_percent.unwrap_or_default(),
            self.tenure_years.unwrap_or_default(),
        )
    }

    pub fn breakdown(&self) -> EmiBreakdown {
        let (p, r, t) = self.values();
        get_emi_breakdown(p, r, t)
    }

    pub fn schedule(&self) -> Vec<AmortizationRow> {
        let (p, r, t) = self.values();
        get_amortization_schedule(p, r, t)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Monthly installment, rounded to a whole rupee.
///
/// EMI = P × r × (1 + r)^n / [(1 + r)^n - 1], with r = rate / 12 / 100 and
/// n = tenure × 12. Returns zero unless all three inputs are positive.
pub fn compute_monthly_emi(
    principal: Money,
    annual_rate_percent: RatePercent,
    tenure_years: Years,
) -> Money {
    if !all_positive(&[principal, annual_rate_percent, tenure_years]) {
        return Decimal::ZERO;
    }

    let Some(n) = tenure_months(tenure_years) else {
        warn!(%tenure_years, "tenure out of decimal range; EMI reported as zero");
        return Decimal::ZERO;
    };
    let r = monthly_rate(annual_rate_percent);

    match annuity_payment(principal, r, n) {
        Some(emi) => round_currency(emi),
        None => {
            warn!(%principal, %annual_rate_percent, %tenure_years, "EMI out of decimal range; reported as zero");
            Decimal::ZERO
        }
    }
}

/// Total interest over the full tenure: EMI × months − principal.
///
/// Derived from the rounded EMI, not from summing a schedule, so it can
/// differ by a few rupees from an exact amortization.
pub fn compute_total_interest(emi: Money, tenure_years: Years, principal: Money) -> Money {
    if !all_positive(&[emi, tenure_years, principal]) {
        return Decimal::ZERO;
    }

    tenure_months(tenure_years)
        .and_then(|n| emi.checked_mul(n))
        .and_then(|paid| paid.checked_sub(principal))
        .map(round_currency)
        .unwrap_or(Decimal::ZERO)
}

/// Total payable over the full tenure: EMI × months.
pub fn compute_total_amount(emi: Money, tenure_years: Years) -> Money {
    if !all_positive(&[emi, tenure_years]) {
        return Decimal::ZERO;
    }

    tenure_months(tenure_years)
        .and_then(|n| emi.checked_mul(n))
        .map(round_currency)
        .unwrap_or(Decimal::ZERO)
}

/// Installment plus totals for one set of loan inputs.
pub fn get_emi_breakdown(
    principal: Money,
    annual_rate_percent: RatePercent,
    tenure_years: Years,
) -> EmiBreakdown {
    let monthly_emi = compute_monthly_emi(principal, annual_rate_percent, tenure_years);
    let breakdown = EmiBreakdown {
        monthly_emi,
        principal,
        total_interest: compute_total_interest(monthly_emi, tenure_years, principal),
        total_amount: compute_total_amount(monthly_emi, tenure_years),
        tenure_months: tenure_months(tenure_years)
            .map(|n| n.normalize())
            .unwrap_or(Decimal::ZERO),
        tenure_years,
        interest_rate: annual_rate_percent,
    };

    debug!(
        %principal,
        %annual_rate_percent,
        %tenure_years,
        monthly_emi = %breakdown.monthly_emi,
        total_amount = %breakdown.total_amount,
        "computed EMI breakdown"
    );

    breakdown
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn all_positive(values: &[Decimal]) -> bool {
    values.iter().all(|v| *v > Decimal::ZERO)
}

/// Annual percentage to monthly fraction.
pub(crate) fn monthly_rate(annual_rate_percent: RatePercent) -> Decimal {
    annual_rate_percent / MONTHS_PER_YEAR / PERCENT
}

fn tenure_months(tenure_years: Years) -> Option<Decimal> {
    tenure_years.checked_mul(MONTHS_PER_YEAR)
}

/// Unrounded annuity payment, or `None` if the arithmetic leaves decimal range.
fn annuity_payment(principal: Money, r: Decimal, n: Decimal) -> Option<Money> {
    if r.is_zero() {
        warn!("monthly rate rounds to zero; using straight-line P / n");
        return principal.checked_div(n);
    }

    let Some(factor) = compound_factor(Decimal::ONE + r, n) else {
        // (1 + r)^n beyond range: the payment has converged to interest-only.
        warn!("compounding factor out of range; using interest-only limit P * r");
        return principal.checked_mul(r);
    };

    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        warn!("compounding factor indistinguishable from one; using straight-line P / n");
        return principal.checked_div(n);
    }

    principal.checked_mul(r)?.checked_mul(factor.checked_div(denominator)?)
}

/// (1 + r)^n, exact for whole months.
fn compound_factor(base: Decimal, n: Decimal) -> Option<Decimal> {
    if n.fract().is_zero() {
        base.checked_powi(n.to_i64()?)
    } else {
        base.checked_powd(n)
    }
}
