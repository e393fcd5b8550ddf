use clap::Parser;
use titles_api::app::server::shutdown_signal;
use titles_api::utils::{logger, validation::Validate};
use titles_api::{adapters, AppState, CliConfig, TitlesServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.logging.json {
        logger::init_json_logger(&config.logging.level, cli.verbose);
    } else {
        logger::init_server_logger(&config.logging.level, cli.verbose);
    }

    tracing::info!("Starting titles-api");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let addr = config.socket_addr()?;
    let service = adapters::build_service(&config).await;
    tracing::info!(
        backend = ?config.server.backend,
        table = %config.store.table_name,
        queue = %config.queue.url,
        "Service clients ready"
    );

    TitlesServer::new(addr, AppState::new(service))
        .start_with_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
