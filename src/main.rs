use clap::Parser;
use travel_package::utils::error::{ErrorSeverity, Result, TravelError};
use travel_package::utils::{logger, validation::Validate};
use travel_package::{CliConfig, ReportEngine, ScenarioConfig};

fn run(config: &CliConfig) -> Result<()> {
    let scenario = ScenarioConfig::dream_vacation()?
        .with_currency_symbol(config.currency_symbol.clone())
        .with_detail_passenger(config.detail);

    scenario.validate()?;
    tracing::debug!("Scenario validated");

    if config.dump_scenario {
        print!("{}", scenario.to_toml_string()?);
        return Ok(());
    }

    let package = scenario.build();
    let detail_number = scenario.detail_passenger()?;
    let detail = package
        .passenger(detail_number)
        .ok_or_else(|| TravelError::ConfigError {
            message: format!("passenger {} is not on the roster", detail_number),
        })?;

    let engine = ReportEngine::new(&package, scenario.report_settings());
    engine.run(&mut std::io::stdout().lock(), detail)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting travel-package");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "Report failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
