use anyhow::Context;
use clap::Parser;
use portfolio_export::core::{ConfigProvider, Pipeline};
use portfolio_export::utils::error::ExportError;
use portfolio_export::utils::{logger, validation::Validate};
use portfolio_export::{
    CliConfig, ExportEngine, ExportOutcome, LocalStorage, SitePipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    match cli.config.clone() {
        Some(path) => {
            let mut config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file {}", path))?;
            config.apply_cli(&cli);
            if config.json_logging() {
                logger::init_json_logger();
            } else {
                logger::init_cli_logger(cli.verbose);
            }
            tracing::info!("Using configuration from {}", path);
            run(config, cli.dry_run).await
        }
        None => {
            logger::init_cli_logger(cli.verbose);
            let dry_run = cli.dry_run;
            run(cli, dry_run).await
        }
    }
}

async fn run<C>(config: C, dry_run: bool) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + std::fmt::Debug + 'static,
{
    tracing::debug!("Config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let storage = LocalStorage::new(".");
    let pipeline = SitePipeline::new(storage, config);

    if dry_run {
        let data = match pipeline.extract().await {
            Ok(data) => data,
            Err(e) => fail(e),
        };
        let preview = pipeline.preview(&data);
        println!("Theme: {}", pipeline.config().theme().id());
        println!("Sections:");
        for (section, count) in &preview.sections {
            println!("  {:<12} {}", section.nav_label(), count);
        }
        println!("Archive: {}", preview.archive_name);
        for entry in &preview.entries {
            println!("  {}", entry);
        }
        return Ok(());
    }

    let engine = ExportEngine::new(pipeline);
    match engine.run().await {
        Ok(ExportOutcome::Completed(output_path)) => {
            tracing::info!("Export completed successfully");
            println!("Portfolio archive saved to: {}", output_path);
        }
        Ok(ExportOutcome::Skipped) => {
            tracing::warn!("Export skipped: another export is running");
        }
        Err(e) => fail(e),
    }

    Ok(())
}

fn fail(e: ExportError) -> ! {
    tracing::error!(
        "Export failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code())
}
