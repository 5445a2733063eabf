use chrono::Datelike;
use clap::Parser;
use numerology_calc::app::form::rejected_form_error;
use numerology_calc::domain::ports::ConfigProvider;
use numerology_calc::utils::error::ErrorSeverity;
use numerology_calc::utils::{logger, validation::Validate};
use numerology_calc::{
    render, CalculationSession, CliConfig, LocalStorage, NumerologyEngine, NumerologyError,
    ProfileExporter, TomlConfig,
};

async fn run(cli: CliConfig, config: TomlConfig) -> numerology_calc::Result<()> {
    // 驗證表單，一次列出所有缺少的欄位，各欄位只顯示一次
    let input = match cli.to_form().submit() {
        Ok(input) => input,
        Err(errors) => {
            for error in &errors {
                eprintln!("❌ {}: {}", error.field, error.message);
            }
            return Err(rejected_form_error(&errors));
        }
    };

    let reference_year = config
        .reference_year()
        .unwrap_or_else(|| chrono::Local::now().year() as u32);
    tracing::debug!("Using reference year {}", reference_year);

    let engine = NumerologyEngine::new(config.reduction());
    let mut session = CalculationSession::new(engine, config.calculation_delay());
    session.submit(&input, reference_year)?;
    println!("🔮 Calculating your numerology profile...");

    let outcome = tokio::select! {
        result = session.wait_for_results() => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };
    let profile = match outcome {
        Some(result) => result?,
        None => {
            session.reset();
            return Err(NumerologyError::Cancelled);
        }
    };

    let format = config.output_format();
    println!("{}", render(&profile, format)?);

    if let Some(output_path) = config.output_path() {
        let exporter = ProfileExporter::new(
            LocalStorage::new(output_path),
            config.output_filename(),
        );
        let location = exporter.save(&profile, format).await?;
        println!("📁 Output saved to: {}", location);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting numerology calculator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(cli, config).await {
        tracing::error!(
            "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 依錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 130,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}
