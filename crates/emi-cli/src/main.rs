mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::config::ConfigArgs;
use commands::emi::{AnalyzeArgs, LoanArgs, ValidateArgs};

/// Home-loan EMI calculator for District 25
#[derive(Parser)]
#[command(
    name = "emi",
    version,
    about = "Home-loan EMI calculator for District 25",
    long_about = "Computes equated monthly installments, totals and the first-year \
                  amortization table for a reducing-balance home loan, and checks \
                  inputs against the calculator's bounds. Amounts are whole rupees; \
                  rates are annual percentages."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log engine decisions to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly EMI with total interest and total payable
    Breakdown(LoanArgs),
    /// First-year (12 month) amortization table
    Schedule(LoanArgs),
    /// Check inputs against the calculator bounds
    Validate(ValidateArgs),
    /// Breakdown, schedule, validation and payable shares in one envelope
    Analyze(AnalyzeArgs),
    /// Print the effective calculator bounds and defaults
    Config(ConfigArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Breakdown(args) => commands::emi::run_breakdown(args),
        Commands::Schedule(args) => commands::emi::run_schedule(args),
        Commands::Validate(args) => commands::emi::run_validate(args),
        Commands::Analyze(args) => commands::emi::run_analyze(args),
        Commands::Config(args) => commands::config::run_config(args),
        Commands::Version => {
            println!("emi {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

/// Logs go to stderr so piped JSON stays clean. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "emi_core=debug,emi=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
