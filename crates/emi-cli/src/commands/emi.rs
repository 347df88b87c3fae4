use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_core::{analyze_loan, EmiConfig, LoanAnalysisInput, LoanParameters};

use crate::input;

/// Loan inputs shared by every calculator subcommand
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount in rupees
    #[arg(long, alias = "loan-amount")]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (8.5 for 8.5%)
    #[arg(long, alias = "interest-rate")]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,
}

/// Loan inputs checked against calculator bounds
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Path to a JSON or YAML bounds override
    #[arg(long)]
    pub config: Option<String>,
}

/// Arguments for the full analysis envelope
#[derive(Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Path to a JSON or YAML bounds override
    #[arg(long)]
    pub config: Option<String>,

    /// Clamp inputs into the bounds and fill missing ones with defaults
    #[arg(long)]
    pub clamp: bool,
}

pub fn run_breakdown(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_required(&args)?;
    Ok(serde_json::to_value(params.breakdown())?)
}

pub fn run_schedule(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_required(&args)?;
    Ok(serde_json::to_value(params.schedule())?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let params = resolve_required(&args.loan)?;
    let config = input::file::read_config(args.config.as_deref())?;
    Ok(serde_json::to_value(params.validate(&config))?)
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let analysis_input: LoanAnalysisInput = if let Some(ref path) = args.loan.input {
        input::file::read_json(path)?
    } else if let Some(piped) = input::stdin::read_stdin()? {
        piped
    } else {
        LoanAnalysisInput {
            loan: from_flags(&args.loan),
            config: None,
            clamp_to_bounds: args.clamp,
        }
    };

    let analysis_input = with_overrides(analysis_input, &args)?;
    let output = analyze_loan(&analysis_input)?;
    Ok(serde_json::to_value(output)?)
}

/// File, stdin, or flags, in that order. Flags must be complete.
fn resolve_required(args: &LoanArgs) -> Result<LoanParameters, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if let Some(piped) = input::stdin::read_stdin()? {
        return Ok(piped);
    }

    Ok(LoanParameters::new(
        args.principal
            .ok_or("--principal is required (or provide --input)")?,
        args.rate.ok_or("--rate is required (or provide --input)")?,
        args.tenure
            .ok_or("--tenure is required (or provide --input)")?,
    ))
}

fn from_flags(args: &LoanArgs) -> LoanParameters {
    LoanParameters {
        principal: args.principal,
        annual_rate_percent: args.rate,
        tenure_years: args.tenure,
    }
}

/// `--config` and `--clamp` apply on top of whatever the input document says.
fn with_overrides(
    mut analysis_input: LoanAnalysisInput,
    args: &AnalyzeArgs,
) -> Result<LoanAnalysisInput, Box<dyn std::error::Error>> {
    if args.config.is_some() {
        let config: EmiConfig = input::file::read_config(args.config.as_deref())?;
        analysis_input.config = Some(config);
    }
    if args.clamp {
        analysis_input.clamp_to_bounds = true;
    }
    Ok(analysis_input)
}
