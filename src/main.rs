use clap::Parser;
use score_total::adapters::server;
use score_total::core::ConfigProvider;
use score_total::utils::{logger, validation::Validate};
use score_total::{CliConfig, FreshnessCache, ReqwestFetcher, ScoreTotalService, TomlConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting score-total server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match config.config.clone() {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let toml_config = TomlConfig::from_file(&path)?;
            let bind = toml_config.bind().to_string();
            run(toml_config, &bind).await
        }
        None => {
            let bind = config.bind.clone();
            run(config, &bind).await
        }
    }
}

async fn run<C>(config: C, bind: &str) -> anyhow::Result<()>
where
    C: ConfigProvider + Validate + 'static,
{
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    tracing::info!(
        "Source: {} (goal {:?} {}, locale {})",
        config.source_url(),
        config.goal(),
        config.currency(),
        config.locale()
    );

    let fetcher = ReqwestFetcher::new(&config)?;
    let service = Arc::new(ScoreTotalService::new(fetcher, config, FreshnessCache::new()));

    server::serve(bind, service).await?;
    Ok(())
}
