use crate::core::handler::{Outcome, ScoreTotalService, FRESH_CACHE_CONTROL};
use crate::core::{ConfigProvider, PageFetcher};
use crate::utils::error::Result;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

pub const SCORE_TOTAL_PATH: &str = "/api/score-total";

/// 建立路由：總額端點與健康檢查
pub fn router<F, C>(service: Arc<ScoreTotalService<F, C>>) -> Router
where
    F: PageFetcher + 'static,
    C: ConfigProvider + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(SCORE_TOTAL_PATH, get(score_total::<F, C>))
        .with_state(service)
}

pub async fn serve<F, C>(bind: &str, service: Arc<ScoreTotalService<F, C>>) -> Result<()>
where
    F: PageFetcher + 'static,
    C: ConfigProvider + 'static,
{
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    tracing::info!("  GET {}  - campaign total raised", SCORE_TOTAL_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn health_check() -> &'static str {
    "OK"
}

async fn score_total<F, C>(State(service): State<Arc<ScoreTotalService<F, C>>>) -> Response
where
    F: PageFetcher + 'static,
    C: ConfigProvider + 'static,
{
    service.handle().await.into_response()
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Fresh(payload) => (
                StatusCode::OK,
                [(header::CACHE_CONTROL, FRESH_CACHE_CONTROL)],
                Json(payload),
            )
                .into_response(),
            Outcome::Stale(payload) => (StatusCode::OK, Json(payload)).into_response(),
            Outcome::Failed { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                Json(body),
            )
                .into_response(),
        }
    }
}
