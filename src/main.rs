use babynames::utils::{logger, validation::Validate};
use babynames::{BabyNamesPipeline, CliConfig, Destination, EtlEngine, LocalStorage};
use clap::Parser;

fn main() {
    // clap prints usage and exits with status 2 when no files are given.
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        eprintln!("hint: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let pipeline = BabyNamesPipeline::new(LocalStorage::new(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(destinations) => {
            let summaries = destinations
                .iter()
                .filter(|d| matches!(d, Destination::SummaryFile(_)))
                .count();
            if summaries > 0 {
                tracing::info!("Wrote {} summary file(s)", summaries);
            }
        }
        Err(e) => {
            tracing::error!(
                "Run aborted: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
