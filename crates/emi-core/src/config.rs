//! Static bounds and defaults for the EMI calculator.
//!
//! [`EmiConfig`] is an immutable value: the page's sliders clamp to it and
//! the validator classifies input against it. Overrides are parsed from
//! JSON, with any missing key keeping its shipped default.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::emi::calculator::LoanParameters;
use crate::error::EmiError;
use crate::types::{Money, RatePercent, Years};
use crate::EmiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmiConfig {
    pub min_loan_amount: Money,
    pub max_loan_amount: Money,
    pub loan_step: Money,
    pub min_interest_rate: RatePercent,
    pub max_interest_rate: RatePercent,
    pub rate_step: RatePercent,
    pub min_tenure: Years,
    pub max_tenure: Years,
    pub tenure_step: Years,
    pub default_loan_amount: Money,
    pub default_interest_rate: RatePercent,
    pub default_tenure: Years,
}

impl Default for EmiConfig {
    fn default() -> Self {
        Self {
            min_loan_amount: dec!(5_000_000),
            max_loan_amount: dec!(100_000_000),
            loan_step: dec!(100_000),
            min_interest_rate: dec!(6.5),
            max_interest_rate: dec!(15),
            rate_step: dec!(0.1),
            min_tenure: dec!(5),
            max_tenure: dec!(30),
            tenure_step: dec!(1),
            default_loan_amount: dec!(17_000_000),
            default_interest_rate: dec!(8.5),
            default_tenure: dec!(20),
        }
    }
}

impl EmiConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> EmiResult<Self> {
        let config: EmiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject bounds the calculator cannot work with.
    pub fn validate(&self) -> EmiResult<()> {
        let ranges = [
            (
                "loan_amount",
                "loan_step",
                self.min_loan_amount,
                self.max_loan_amount,
                self.loan_step,
                self.default_loan_amount,
            ),
            (
                "interest_rate",
                "rate_step",
                self.min_interest_rate,
                self.max_interest_rate,
                self.rate_step,
                self.default_interest_rate,
            ),
            (
                "tenure",
                "tenure_step",
                self.min_tenure,
                self.max_tenure,
                self.tenure_step,
                self.default_tenure,
            ),
        ];

        for (name, step_name, min, max, step, default) in ranges {
            if min <= Decimal::ZERO {
                return Err(invalid(format!("min_{name}"), "must be positive"));
            }
            if min > max {
                return Err(invalid(
                    format!("max_{name}"),
                    &format!("must be at least the minimum ({min})"),
                ));
            }
            if step <= Decimal::ZERO {
                return Err(invalid(step_name.into(), "must be positive"));
            }
            if default < min || default > max {
                return Err(invalid(
                    format!("default_{name}"),
                    &format!("must lie within [{min}, {max}]"),
                ));
            }
        }

        if self.max_interest_rate > dec!(100) {
            return Err(invalid(
                "max_interest_rate".into(),
                "annual rate cannot exceed 100%",
            ));
        }

        Ok(())
    }

    /// The parameters the calculator opens with.
    pub fn defaults(&self) -> LoanParameters {
        LoanParameters {
            principal: Some(self.default_loan_amount),
            annual_rate_percent: Some(self.default_interest_rate),
            tenure_years: Some(self.default_tenure),
        }
    }

    /// Clamp each field into its bounds; missing fields take the default.
    pub fn clamp(&self, params: &LoanParameters) -> LoanParameters {
        LoanParameters {
            principal: Some(params.principal.map_or(self.default_loan_amount, |p| {
                p.clamp(self.min_loan_amount, self.max_loan_amount)
            })),
            annual_rate_percent: Some(params.annual_rate_percent.map_or(
                self.default_interest_rate,
                |r| r.clamp(self.min_interest_rate, self.max_interest_rate),
            )),
            tenure_years: Some(params.tenure_years.map_or(self.default_tenure, |t| {
                t.clamp(self.min_tenure, self.max_tenure)
            })),
        }
    }
}

fn invalid(field: String, reason: &str) -> EmiError {
    EmiError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}
