use clap::Parser;
use pta_weighting::config::WeightingCommand;
use pta_weighting::utils::error::ErrorSeverity;
use pta_weighting::utils::{logger, validation::Validate};
use pta_weighting::{CliConfig, Leerjaar, PtaError, Result, WeightCode, WeightingEngine};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證分數表
    let toml = match config.load_config() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = toml.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let engine = WeightingEngine::new(toml.fraction_table());
    tracing::debug!("Fraction table has {} entries", engine.table().len());

    if let Err(e) = run(&config, &engine) {
        tracing::error!(
            "❌ Weighting failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig, engine: &WeightingEngine) -> Result<()> {
    match config.command {
        WeightingCommand::Compute { mode, code1, code2 } => {
            let weighting = engine.compute(mode, WeightCode(code1), WeightCode(code2))?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&weighting)?);
            } else {
                println!("{}", weighting);
            }
        }
        WeightingCommand::Leerjaar { klas, code1, code2 } => {
            let leerjaar = Leerjaar::from_id(klas).ok_or_else(|| PtaError::InvalidConfigValueError {
                field: "klas".to_string(),
                value: klas.to_string(),
                reason: "Unknown leerjaar id".to_string(),
            })?;
            let (code1, code2) = (WeightCode(code1), WeightCode(code2));

            let weighting = engine.compute_for_leerjaar(leerjaar, code1, code2)?;
            let formula = engine.formula(leerjaar, code1, code2)?;

            if config.json {
                let output = serde_json::json!({
                    "leerjaar": leerjaar,
                    "weighting": weighting,
                    "formula": formula,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                match weighting {
                    Some(weighting) => println!("{}", weighting),
                    None => println!("{} has no SE weighting", leerjaar),
                }
                if let Some(formula) = formula {
                    println!("{}", formula);
                }
            }
        }
        WeightingCommand::Describe { code } => {
            let label = engine.describe(WeightCode(code))?;
            if config.json {
                println!("{}", serde_json::to_string(&label)?);
            } else {
                println!("{}", label.as_deref().unwrap_or("no weight"));
            }
        }
    }

    Ok(())
}
