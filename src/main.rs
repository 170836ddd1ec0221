use anyhow::Context;
use clap::Parser;
use dream_reflect::domain::ports::ConfigProvider;
use dream_reflect::utils::monitor::SystemMonitor;
use dream_reflect::utils::{logger, validation::Validate};
use dream_reflect::{CliConfig, FileConfig, FlowController, HttpDreamService, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting dream-reflect CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let monitor = SystemMonitor::new(cli.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    if let Some(path) = cli.config.clone() {
        let config = FileConfig::from_file(&path)
            .with_context(|| format!("failed to load config file: {}", path))?;
        validate_or_exit(&config);
        run_session(config, &monitor).await
    } else {
        validate_or_exit(&cli);
        run_session(cli, &monitor).await
    }
}

fn validate_or_exit(config: &impl Validate) {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

async fn run_session<C: ConfigProvider>(config: C, monitor: &SystemMonitor) -> anyhow::Result<()> {
    monitor.log_stats("Session start");

    let service = HttpDreamService::new(config.api_base_url());
    let controller = FlowController::new(service, config.max_words());
    let mut session = Session::new(controller, config);

    session.run().await?;

    monitor.log_stats("Session end");
    Ok(())
}
