use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先，否則只開本 crate 的日誌
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("score_total=debug,info")
        } else {
            EnvFilter::new("score_total=info,warn")
        }
    })
}

/// 本機伺服器：精簡的人類可讀格式
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Lambda：每行一筆 JSON，交給 CloudWatch 解析；時間戳由平台提供
pub fn init_lambda_logger() {
    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .json()
                .flatten_event(true),
        )
        .init();
}
