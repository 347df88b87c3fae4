//! Node bindings for the landing page's EMI calculator widget.
//!
//! Each function takes and returns JSON strings; field names accept the
//! page's camelCase (`interestRate`, `tenure`) as well as snake_case.

use napi::Result as NapiResult;
use napi_derive::napi;

use emi_core::{
    analyze_loan, validate_emi_inputs, EmiConfig, LoanAnalysisInput, LoanParameters,
};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_params(input_json: &str) -> NapiResult<LoanParameters> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

fn parse_config(config_json: Option<String>) -> NapiResult<EmiConfig> {
    match config_json {
        Some(json) => EmiConfig::from_json(&json).map_err(to_napi_error),
        None => Ok(EmiConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Calculator
// ---------------------------------------------------------------------------

#[napi]
pub fn emi_breakdown(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    serde_json::to_string(&params.breakdown()).map_err(to_napi_error)
}

#[napi]
pub fn amortization_schedule(input_json: String) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    serde_json::to_string(&params.schedule()).map_err(to_napi_error)
}

#[napi]
pub fn validate_emi(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let config = parse_config(config_json)?;
    let (principal, rate, tenure) = params.values();
    let result = validate_emi_inputs(principal, rate, tenure, &config);
    serde_json::to_string(&result).map_err(to_napi_error)
}

#[napi]
pub fn analyze(input_json: String) -> NapiResult<String> {
    let input: LoanAnalysisInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = analyze_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Slider bounds and defaults, optionally merged with a partial override.
#[napi]
pub fn calculator_config(override_json: Option<String>) -> NapiResult<String> {
    let config = parse_config(override_json)?;
    serde_json::to_string(&config).map_err(to_napi_error)
}

/// Clamp page inputs into the slider bounds, filling gaps with defaults.
#[napi]
pub fn clamp_inputs(input_json: String, config_json: Option<String>) -> NapiResult<String> {
    let params = parse_params(&input_json)?;
    let config = parse_config(config_json)?;
    serde_json::to_string(&config.clamp(&params)).map_err(to_napi_error)
}
