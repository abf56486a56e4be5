//! Configuration types and loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::pair::DEFAULT_STABLECOINS;
use crate::shared::errors::AppError;

pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayCfg {
    /// Significant digits kept when printing prices
    pub significant_digits: usize,
}

impl Default for DisplayCfg {
    fn default() -> Self {
        Self {
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairsCfg {
    /// Symbols classified as stablecoins
    pub stablecoins: Vec<String>,
}

impl Default for PairsCfg {
    fn default() -> Self {
        Self {
            stablecoins: DEFAULT_STABLECOINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogCfg {
    /// tracing filter directive, overridden by RUST_LOG
    pub filter: String,
}

impl Default for LogCfg {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Engine configuration. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub display: DisplayCfg,
    pub pairs: PairsCfg,
    pub log: LogCfg,
}

impl RangeConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.display.significant_digits == 0 || self.display.significant_digits > 17 {
            return Err(AppError::ConfigError(format!(
                "display.significant_digits must be between 1 and 17, got {}",
                self.display.significant_digits
            )));
        }
        Ok(())
    }
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<RangeConfig, AppError> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::parse(&config_content)
    }

    pub fn parse(content: &str) -> Result<RangeConfig, AppError> {
        let config: RangeConfig = toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, RangeConfig::default());
        assert_eq!(config.display.significant_digits, 5);
        assert!(config.pairs.stablecoins.contains(&"USDC".to_string()));
    }

    #[test]
    fn test_partial_config() {
        let config = ConfigLoader::parse(
            r#"
            [display]
            significant_digits = 8

            [pairs]
            stablecoins = ["USDM", "EURC"]
            "#,
        )
        .unwrap();
        assert_eq!(config.display.significant_digits, 8);
        assert_eq!(config.pairs.stablecoins, vec!["USDM", "EURC"]);
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_invalid_digits_rejected() {
        let err = ConfigLoader::parse("[display]\nsignificant_digits = 0\n").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfilter = \"debug\"").unwrap();

        let config = ConfigLoader::load_from(file.path()).unwrap();
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::load_from("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
