use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use score_total::adapters::ProxyResponse;
use score_total::core::PageFetcher;
use score_total::utils::{logger, validation::Validate};
use score_total::{FreshnessCache, LambdaConfig, ReqwestFetcher, ScoreTotalService};

async fn function_handler<F: PageFetcher>(
    service: &ScoreTotalService<F, LambdaConfig>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ProxyResponse, Error> {
    tracing::info!("Handling score-total request {}", event.context.request_id);

    let outcome = service.handle().await;
    let response = ProxyResponse::from_outcome(&outcome)?;

    tracing::info!("Responding with status {}", response.status_code);
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    // 同一個暖機中的執行環境共用一份服務與快取
    let fetcher = ReqwestFetcher::new(&config)?;
    let service = ScoreTotalService::new(fetcher, config, FreshnessCache::new());
    let service = &service;

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(service, event).await
    }))
    .await
}
