use anyhow::Context;
use campus_records::utils::{logger, validation::Validate};
use campus_records::{AppConfig, CliConfig, Console, LocalStorage, Records};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path).with_context(|| format!("loading {}", path))?,
        None => AppConfig::default(),
    };

    let log_filter = config.log_filter(cli.verbose);
    if config.json_logging() {
        logger::init_json_logger(&log_filter);
    } else {
        logger::init_cli_logger(&log_filter);
    }

    tracing::info!("Starting campus-records");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(dir) = &cli.export_dir {
        tracing::info!("Export directory overridden to: {}", dir);
        config.export.output_path = dir.clone();
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path());
    let stdin = std::io::stdin();
    let mut console = Console::new(Records::new(), config, storage, stdin.lock(), std::io::stdout());
    console.run().context("console session failed")?;

    tracing::info!("Session ended");
    Ok(())
}
