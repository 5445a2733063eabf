use crate::app::report::OutputFormat;
use crate::app::session::DEFAULT_CALCULATION_DELAY;
use crate::core::engine::{MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR};
use crate::core::reduction::Reduction;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{NumerologyError, Result};
use crate::utils::validation::{validate_file_stem, validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_FILENAME: &str = "numerology_profile";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub calculation: CalculationConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub delay_ms: Option<u64>,
    pub reference_year: Option<u32>,
    pub reduction: Option<Reduction>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded configuration file {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${NUMEROLOGY_OUTPUT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NumerologyError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(year) = self.calculation.reference_year {
            validate_range(
                "calculation.reference_year",
                year,
                MIN_REFERENCE_YEAR,
                MAX_REFERENCE_YEAR,
            )?;
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        if let Some(filename) = &self.output.filename {
            validate_file_stem("output.filename", filename)?;
        }

        if let Some(level) = self.log_level() {
            if !VALID_LOG_LEVELS.contains(&level) {
                return Err(NumerologyError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", VALID_LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn calculation_delay(&self) -> Duration {
        self.calculation
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CALCULATION_DELAY)
    }

    fn reference_year(&self) -> Option<u32> {
        self.calculation.reference_year
    }

    fn reduction(&self) -> Reduction {
        self.calculation.reduction.unwrap_or_default()
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    fn output_filename(&self) -> &str {
        self.output.filename.as_deref().unwrap_or(DEFAULT_FILENAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[calculation]
delay_ms = 500
reference_year = 2026
reduction = "single-pass"

[output]
format = "json"
path = "./results"
filename = "jane"

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.calculation_delay(), Duration::from_millis(500));
        assert_eq!(config.reference_year(), Some(2026));
        assert_eq!(config.reduction(), Reduction::SinglePass);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.output_path(), Some("./results"));
        assert_eq!(config.output_filename(), "jane");
        tokio_test::assert_ok!(config.validate());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.calculation_delay(), DEFAULT_CALCULATION_DELAY);
        assert_eq!(config.reduction(), Reduction::TwoPass);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.output_path(), None);
        assert_eq!(config.output_filename(), DEFAULT_FILENAME);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMEROLOGY_TEST_OUTPUT", "/tmp/numerology");

        let toml_content = r#"
[output]
path = "${NUMEROLOGY_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), Some("/tmp/numerology"));

        std::env::remove_var("NUMEROLOGY_TEST_OUTPUT");
    }

    #[test]
    fn test_config_validation() {
        let bad_year = TomlConfig::from_toml_str("[calculation]\nreference_year = 0\n").unwrap();
        tokio_test::assert_err!(bad_year.validate());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        tokio_test::assert_err!(bad_level.validate());

        assert!(matches!(
            TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n"),
            Err(NumerologyError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[calculation]\ndelay_ms = 0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.calculation_delay(), Duration::ZERO);
    }
}
