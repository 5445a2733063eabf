pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::app::form::PersonForm;
    use crate::app::report::OutputFormat;
    use crate::config::toml_config::TomlConfig;
    use crate::core::reduction::Reduction;
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "numerology")]
    #[command(about = "Numerology calculator: core numbers, karmic debt and personal year")]
    pub struct CliConfig {
        #[arg(long)]
        pub first_name: Option<String>,

        #[arg(long)]
        pub middle_name: Option<String>,

        #[arg(long)]
        pub last_name: Option<String>,

        /// Full name, split into first / middle / last
        #[arg(long, conflicts_with_all = ["first_name", "middle_name", "last_name"])]
        pub name: Option<String>,

        /// YYYY-MM-DD, MM/DD/YYYY or "Month D, YYYY"
        #[arg(long)]
        pub birth_date: Option<String>,

        /// Year used for the personal year number (defaults to the current year)
        #[arg(long)]
        pub reference_year: Option<u32>,

        #[arg(long, value_enum)]
        pub reduction: Option<Reduction>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Save the result into this directory
        #[arg(long)]
        pub output: Option<String>,

        #[arg(long)]
        pub filename: Option<String>,

        /// Simulated calculation delay in milliseconds
        #[arg(long)]
        pub delay_ms: Option<u64>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub json_logs: bool,
    }

    impl CliConfig {
        pub fn to_form(&self) -> PersonForm {
            let birth_date = self.birth_date.clone().unwrap_or_default();
            match &self.name {
                Some(full_name) => PersonForm::from_full_name(full_name, birth_date),
                None => PersonForm::new(
                    self.first_name.clone().unwrap_or_default(),
                    self.middle_name.clone(),
                    self.last_name.clone().unwrap_or_default(),
                    birth_date,
                ),
            }
        }

        /// 命令列參數覆蓋設定檔
        pub fn apply_overrides(&self, config: &mut TomlConfig) {
            if let Some(delay_ms) = self.delay_ms {
                config.calculation.delay_ms = Some(delay_ms);
            }
            if let Some(year) = self.reference_year {
                config.calculation.reference_year = Some(year);
            }
            if let Some(reduction) = self.reduction {
                config.calculation.reduction = Some(reduction);
            }
            if let Some(format) = self.format {
                config.output.format = Some(format);
            }
            if let Some(path) = &self.output {
                config.output.path = Some(path.clone());
            }
            if let Some(filename) = &self.filename {
                config.output.filename = Some(filename.clone());
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::domain::ports::ConfigProvider;
        use std::time::Duration;

        #[test]
        fn test_cli_overrides_file_values() {
            let cli = CliConfig::parse_from([
                "numerology",
                "--name",
                "Jane Doe",
                "--birth-date",
                "1985-01-15",
                "--format",
                "csv",
                "--delay-ms",
                "0",
                "--reduction",
                "full",
            ]);

            let mut config =
                TomlConfig::from_toml_str("[output]\nformat = \"json\"\nfilename = \"kept\"\n")
                    .unwrap();
            cli.apply_overrides(&mut config);

            assert_eq!(config.output_format(), OutputFormat::Csv);
            assert_eq!(config.output_filename(), "kept");
            assert_eq!(config.calculation_delay(), Duration::ZERO);
            assert_eq!(config.reduction(), Reduction::Full);
        }

        #[test]
        fn test_full_name_flag_builds_form() {
            let cli = CliConfig::parse_from([
                "numerology",
                "--name",
                "Laura Julia Costas Perez",
                "--birth-date",
                "02/09/1991",
            ]);
            let form = cli.to_form();
            assert_eq!(form.middle_name.as_deref(), Some("Julia"));
            assert_eq!(form.last_name, "Costas Perez");
        }

        #[test]
        fn test_name_flags_conflict() {
            let args = ["numerology", "--name", "Jane Doe", "--first-name", "J"];
            let result = CliConfig::try_parse_from(args);
            assert!(result.is_err());
        }
    }
}

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;
