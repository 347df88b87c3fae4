use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use emi_core::EmiConfig;

/// Read a JSON file and deserialise into a typed struct.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let (canonical, contents) = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| parse_error(&canonical, e))
}

/// Load calculator bounds, YAML or JSON by extension, shipped defaults when
/// no path is given. Keys left out of the file keep their defaults.
pub fn read_config(path: Option<&str>) -> Result<EmiConfig, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(EmiConfig::default());
    };

    let (canonical, contents) = read_file(path)?;

    let is_yaml = matches!(
        canonical.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let config: EmiConfig = if is_yaml {
        serde_yaml::from_str(&contents).map_err(|e| parse_error(&canonical, e))?
    } else {
        serde_json::from_str(&contents).map_err(|e| parse_error(&canonical, e))?
    };

    config.validate()?;
    tracing::debug!(path = %canonical.display(), "loaded calculator bounds");
    Ok(config)
}

fn read_file(path: &str) -> Result<(PathBuf, String), Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    Ok((canonical, contents))
}

fn parse_error(path: &Path, e: impl std::fmt::Display) -> Box<dyn std::error::Error> {
    format!("Failed to parse '{}': {}", path.display(), e).into()
}

/// Resolve and validate the path, preventing directory traversal.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }

    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("emi-cli-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_read_config_defaults_without_path() {
        assert_eq!(read_config(None).unwrap(), EmiConfig::default());
    }

    #[test]
    fn test_read_config_yaml_override() {
        let path = write_temp("bounds.yaml", "max_tenure: 25\nmin_interest_rate: 7.25\n");
        let config = read_config(Some(path.as_str())).unwrap();
        assert_eq!(config.max_tenure, dec!(25));
        assert_eq!(config.min_interest_rate, dec!(7.25));
        assert_eq!(config.min_loan_amount, dec!(5_000_000));
    }

    #[test]
    fn test_read_config_rejects_incoherent_bounds() {
        let path = write_temp("bad.json", r#"{"min_loan_amount": "200000000"}"#);
        assert!(read_config(Some(path.as_str())).is_err());
    }

    #[test]
    fn test_missing_file_reported() {
        let err = read_config(Some("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
