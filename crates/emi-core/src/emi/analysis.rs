use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::config::EmiConfig;
use crate::emi::calculator::{EmiBreakdown, LoanParameters};
use crate::emi::schedule::{AmortizationRow, SCHEDULE_MONTHS};
use crate::emi::validation::ValidationResult;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::EmiResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanAnalysisInput {
    #[serde(flatten)]
    pub loan: LoanParameters,
    /// Bounds to validate against; shipped defaults when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<EmiConfig>,
    /// Clamp inputs into the bounds (and fill gaps with defaults) first,
    /// as the page's sliders do.
    #[serde(default)]
    pub clamp_to_bounds: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    /// Parameters actually computed on, after any clamping.
    pub parameters: LoanParameters,
    pub breakdown: EmiBreakdown,
    pub schedule: Vec<AmortizationRow>,
    pub validation: ValidationResult,
    /// Principal as a percentage of total payable (pie chart).
    pub principal_share_pct: Decimal,
    pub interest_share_pct: Decimal,
    pub first_year_principal_paid: Money,
    pub first_year_interest_paid: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Full calculator output for one set of inputs.
///
/// Out-of-bounds or missing inputs are reported as warnings and in
/// `validation`; only an incoherent `config` is an error.
pub fn analyze_loan(input: &LoanAnalysisInput) -> EmiResult<ComputationOutput<LoanAnalysis>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let config = input.config.clone().unwrap_or_default();
    config.validate()?;

    let parameters = if input.clamp_to_bounds {
        let clamped = config.clamp(&input.loan);
        if clamped != input.loan {
            warnings.push("Inputs were clamped to the calculator bounds.".into());
        }
        clamped
    } else {
        input.loan.clone()
    };

    let validation = parameters.validate(&config);
    warnings.extend(validation.errors.messages());

    if !parameters.is_computable() {
        warnings.push(
            "Loan amount, interest rate and tenure must all be positive; figures reported as zero."
                .into(),
        );
    }

    let breakdown = parameters.breakdown();
    let schedule = parameters.schedule();

    if parameters.is_computable() && breakdown.tenure_months < Decimal::from(SCHEDULE_MONTHS) {
        warnings.push(format!(
            "Tenure of {} months is shorter than the {SCHEDULE_MONTHS}-month schedule; later rows run past payoff.",
            breakdown.tenure_months
        ));
    }

    let (principal_share_pct, interest_share_pct) = payable_shares(&breakdown);
    let first_year_principal_paid = checked_total(schedule.iter().map(|r| r.principal));
    let first_year_interest_paid = checked_total(schedule.iter().map(|r| r.interest));
    if first_year_principal_paid.is_none() || first_year_interest_paid.is_none() {
        warnings.push("First-year totals exceed decimal range; reported as zero.".into());
    }
    let first_year_principal_paid = first_year_principal_paid.unwrap_or(Decimal::ZERO);
    let first_year_interest_paid = first_year_interest_paid.unwrap_or(Decimal::ZERO);

    debug!(
        monthly_emi = %breakdown.monthly_emi,
        is_valid = validation.is_valid,
        warnings = warnings.len(),
        "analysed loan"
    );

    let output = LoanAnalysis {
        parameters,
        breakdown,
        schedule,
        validation,
        principal_share_pct,
        interest_share_pct,
        first_year_principal_paid,
        first_year_interest_paid,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "monthly_rate": "annual_rate_percent / 12 / 100",
        "rounding": "nearest rupee, halves up",
        "total_interest": "monthly_emi * months - principal (not schedule-summed)",
        "schedule_months": SCHEDULE_MONTHS,
        "config": config,
    });

    Ok(with_metadata(
        "Reducing-balance annuity: EMI = P·r·(1+r)^n / ((1+r)^n − 1)",
        &assumptions,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Principal and interest shares of total payable, in percent to 2 dp.
fn payable_shares(breakdown: &EmiBreakdown) -> (Decimal, Decimal) {
    if breakdown.total_amount <= Decimal::ZERO {
        return (Decimal::ZERO, Decimal::ZERO);
    }

    let principal_share = breakdown
        .principal
        .checked_div(breakdown.total_amount)
        .and_then(|share| share.checked_mul(dec!(100)))
        .map(|pct| pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero));

    match principal_share {
        Some(share) => (share, dec!(100) - share),
        None => (Decimal::ZERO, Decimal::ZERO),
    }
}

fn checked_total(amounts: impl Iterator<Item = Money>) -> Option<Money> {
    amounts.fold(Some(Decimal::ZERO), |acc, amount| acc?.checked_add(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn district_25_default() -> LoanAnalysisInput {
        LoanAnalysisInput {
            loan: LoanParameters::new(dec!(17_000_000), dec!(8.5), dec!(20)),
            config: None,
            clamp_to_bounds: false,
        }
    }

    #[test]
    fn test_analysis_default_loan() {
        let out = analyze_loan(&district_25_default()).unwrap();
        let a = &out.result;

        assert_eq!(a.breakdown.monthly_emi, dec!(147_530));
        assert!(a.validation.is_valid);
        assert!(out.warnings.is_empty(), "warnings: {:?}", out.warnings);
        assert_eq!(a.schedule.len(), 12);
        // 1.7 Cr of 3.54072 Cr total
        assert_eq!(a.principal_share_pct, dec!(48.01));
        assert_eq!(a.interest_share_pct, dec!(51.99));
    }

    #[test]
    fn test_first_year_totals_match_schedule() {
        let out = analyze_loan(&district_25_default()).unwrap();
        let a = &out.result;
        assert_eq!(
            a.first_year_principal_paid + a.first_year_interest_paid,
            a.breakdown.monthly_emi * dec!(12)
        );
    }

    #[test]
    fn test_out_of_bounds_inputs_become_warnings() {
        let input = LoanAnalysisInput {
            loan: LoanParameters::new(dec!(1_000_000), dec!(8.5), dec!(20)),
            ..Default::default()
        };
        let out = analyze_loan(&input).unwrap();
        assert!(!out.result.validation.is_valid);
        assert_eq!(out.warnings, vec!["Minimum loan amount is ₹50 Lakhs".to_string()]);
        // Still computed: validation does not gate the arithmetic.
        assert!(out.result.breakdown.monthly_emi > Decimal::ZERO);
    }

    #[test]
    fn test_clamping_pulls_inputs_into_bounds() {
        let input = LoanAnalysisInput {
            loan: LoanParameters {
                principal: Some(dec!(1_000_000)),
                annual_rate_percent: None,
                tenure_years: Some(dec!(50)),
            },
            config: None,
            clamp_to_bounds: true,
        };
        let out = analyze_loan(&input).unwrap();
        assert_eq!(
            out.result.parameters,
            LoanParameters::new(dec!(5_000_000), dec!(8.5), dec!(30))
        );
        assert!(out.result.validation.is_valid);
        assert_eq!(out.warnings, vec!["Inputs were clamped to the calculator bounds.".to_string()]);
    }

    #[test]
    fn test_missing_inputs_give_zero_figures() {
        let out = analyze_loan(&LoanAnalysisInput::default()).unwrap();
        assert_eq!(out.result.breakdown.monthly_emi, Decimal::ZERO);
        assert_eq!(out.result.principal_share_pct, Decimal::ZERO);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.contains("must all be positive")));
    }

    #[test]
    fn test_short_tenure_warns_about_schedule() {
        let input = LoanAnalysisInput {
            loan: LoanParameters::new(dec!(600_000), dec!(9), dec!(0.5)),
            ..Default::default()
        };
        let out = analyze_loan(&input).unwrap();
        assert_eq!(out.result.schedule.len(), 12);
        assert!(out
            .warnings
            .iter()
            .any(|w| w.starts_with("Tenure of 6 months") && w.contains("later rows run past payoff")));
    }

    #[test]
    fn test_first_year_totals_out_of_range_warn() {
        // Near-zero rate on a near-maximum principal: each row repays a
        // sixth of it, so twelve rows sum past decimal range.
        let input = LoanAnalysisInput {
            loan: LoanParameters::new(
                dec!(70_000_000_000_000_000_000_000_000_000),
                dec!(0.0000000000000000000000000001),
                dec!(0.5),
            ),
            ..Default::default()
        };
        let out = analyze_loan(&input).unwrap();
        assert_eq!(out.result.schedule.len(), 12);
        assert_eq!(out.result.first_year_principal_paid, Decimal::ZERO);
        assert!(out.warnings.iter().any(|w| w.contains("exceed decimal range")));
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        let extremes = [
            (dec!(1), dec!(1_000_000), dec!(0.0000000001)),
            (Decimal::MAX, dec!(100), dec!(1000)),
            (Decimal::MAX, dec!(0.0000000000000000000000000001), dec!(0.5)),
            (dec!(0.0000000000000000000000000001), Decimal::MAX, Decimal::MAX),
        ];
        for (p, r, t) in extremes {
            let input = LoanAnalysisInput {
                loan: LoanParameters::new(p, r, t),
                ..Default::default()
            };
            let out = analyze_loan(&input).unwrap();
            assert_eq!(out.result.schedule.len(), 12, "inputs {p} {r} {t}");
        }
    }

    #[test]
    fn test_incoherent_config_is_error() {
        let mut config = EmiConfig::default();
        config.max_loan_amount = dec!(1);
        let input = LoanAnalysisInput {
            config: Some(config),
            ..district_25_default()
        };
        assert!(analyze_loan(&input).is_err());
    }

    #[test]
    fn test_analysis_input_from_page_json() {
        let input: LoanAnalysisInput = serde_json::from_str(
            r#"{"principal": 17000000, "interestRate": 8.5, "tenure": 20}"#,
        )
        .unwrap();
        assert_eq!(input.loan, LoanParameters::new(dec!(17_000_000), dec!(8.5), dec!(20)));
        assert!(!input.clamp_to_bounds);
    }
}
