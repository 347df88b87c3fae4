pub mod csv_out;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use serde_json::Value;
use std::io::{self, Write};

/// Fields holding rupee amounts; table output renders these in Indian units.
pub(crate) const MONEY_FIELDS: &[&str] = &[
    "monthly_emi",
    "principal",
    "total_interest",
    "total_amount",
    "emi",
    "interest",
    "balance",
    "first_year_principal_paid",
    "first_year_interest_paid",
    "min_loan_amount",
    "max_loan_amount",
    "loan_step",
    "default_loan_amount",
];

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Pretty JSON on stdout; amounts stay as the exact decimal strings.
fn print_json(value: &Value) {
    let mut out = io::stdout().lock();
    let written = serde_json::to_writer_pretty(&mut out, value)
        .map_err(io::Error::from)
        .and_then(|_| writeln!(out));
    if let Err(e) = written {
        eprintln!("Failed to write JSON output: {}", e);
    }
}

/// Decimal amounts serialise as strings; accept numbers too.
pub(crate) fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

/// Plain-text rendering of a scalar or nested value.
pub(crate) fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
