//! Classify loan inputs against the configured slider bounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EmiConfig;
use crate::emi::calculator::LoanParameters;
use crate::format::format_inr_compact;
use crate::types::{Money, RatePercent, Years};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.principal.is_none() && self.interest_rate.is_none() && self.tenure.is_none()
    }

    /// Messages in field order.
    pub fn messages(&self) -> Vec<String> {
        [&self.principal, &self.interest_rate, &self.tenure]
            .into_iter()
            .flatten()
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: ValidationErrors,
}

/// Check all three inputs against `config`, reporting every violation.
///
/// Zero or negative values fail the minimum check.
pub fn validate_emi_inputs(
    principal: Money,
    interest_rate: RatePercent,
    tenure: Years,
    config: &EmiConfig,
) -> ValidationResult {
    let errors = ValidationErrors {
        principal: check_bounds(
            principal,
            config.min_loan_amount,
            config.max_loan_amount,
            |min| format!("Minimum loan amount is {}", format_inr_compact(min)),
            |max| format!("Maximum loan amount is {}", format_inr_compact(max)),
        ),
        interest_rate: check_bounds(
            interest_rate,
            config.min_interest_rate,
            config.max_interest_rate,
            |min| format!("Minimum interest rate is {}%", min.normalize()),
            |max| format!("Maximum interest rate is {}%", max.normalize()),
        ),
        tenure: check_bounds(
            tenure,
            config.min_tenure,
            config.max_tenure,
            |min| format!("Minimum tenure is {} years", min.normalize()),
            |max| format!("Maximum tenure is {} years", max.normalize()),
        ),
    };

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

impl LoanParameters {
    /// Validate with missing fields read as zero.
    pub fn validate(&self, config: &EmiConfig) -> ValidationResult {
        let (p, r, t) = self.values();
        validate_emi_inputs(p, r, t, config)
    }
}

fn check_bounds(
    value: Decimal,
    min: Decimal,
    max: Decimal,
    below: impl FnOnce(Decimal) -> String,
    above: impl FnOnce(Decimal) -> String,
) -> Option<String> {
    if value <= Decimal::ZERO || value < min {
        Some(below(min))
    } else if value > max {
        Some(above(max))
    } else {
        None
    }
}
