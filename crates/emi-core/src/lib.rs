pub mod config;
pub mod emi;
pub mod error;
pub mod format;
pub mod types;

pub use config::EmiConfig;
pub use emi::analysis::{analyze_loan, LoanAnalysis, LoanAnalysisInput};
pub use emi::calculator::{
    compute_monthly_emi, compute_total_amount, compute_total_interest, get_emi_breakdown,
    EmiBreakdown, LoanParameters,
};
pub use emi::schedule::{get_amortization_schedule, AmortizationRow, SCHEDULE_MONTHS};
pub use emi::validation::{validate_emi_inputs, ValidationErrors, ValidationResult};
pub use error::EmiError;
pub use types::*;

/// Standard result type for fallible EMI operations
pub type EmiResult<T> = Result<T, EmiError>;
