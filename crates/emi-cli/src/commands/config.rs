use clap::Args;
use serde_json::Value;

use crate::input;

/// Arguments for printing the effective configuration
#[derive(Args)]
pub struct ConfigArgs {
    /// Path to a JSON or YAML bounds override
    #[arg(long)]
    pub config: Option<String>,
}

pub fn run_config(args: ConfigArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let config = input::file::read_config(args.config.as_deref())?;
    Ok(serde_json::to_value(config)?)
}
