use crate::core::cache::FreshnessCache;
use crate::core::extractor::extract_from_html;
use crate::core::response::build;
use crate::domain::model::{CampaignPayload, ErrorBody};
use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::{Result, ScoreError};
use chrono::{DateTime, Utc};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// 新鮮結果允許中介快取兩分鐘，過期後十分鐘內可邊回舊值邊重新驗證
pub const FRESH_CACHE_CONTROL: &str = "s-maxage=120, stale-while-revalidate=600";

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Fresh(CampaignPayload),
    Stale(CampaignPayload),
    Failed { status: u16, body: ErrorBody },
}

impl Outcome {
    pub fn status(&self) -> u16 {
        match self {
            Outcome::Fresh(_) | Outcome::Stale(_) => 200,
            Outcome::Failed { status, .. } => *status,
        }
    }

    pub fn cache_control(&self) -> Option<&'static str> {
        match self {
            Outcome::Fresh(_) => Some(FRESH_CACHE_CONTROL),
            _ => None,
        }
    }

    pub fn body_string(&self) -> Result<String> {
        let body = match self {
            Outcome::Fresh(payload) | Outcome::Stale(payload) => serde_json::to_string(payload)?,
            Outcome::Failed { body, .. } => serde_json::to_string(body)?,
        };
        Ok(body)
    }
}

/// 請求流程：抓取 → 萃取 → 組裝 → 快取 → 回應
///
/// 任何失敗都先嘗試以快取舊值替代，沒有快取才回傳錯誤。
/// 每次呼叫只抓取一次，不重試。
pub struct ScoreTotalService<F: PageFetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
    cache: FreshnessCache,
}

impl<F: PageFetcher, C: ConfigProvider> ScoreTotalService<F, C> {
    pub fn new(fetcher: F, config: C, cache: FreshnessCache) -> Self {
        Self {
            fetcher,
            config,
            cache,
        }
    }

    pub fn cache(&self) -> &FreshnessCache {
        &self.cache
    }

    pub async fn handle(&self) -> Outcome {
        // panic 視同未預期錯誤，一樣走快取替代
        let computed = AssertUnwindSafe(self.compute(Utc::now()))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                Err(ScoreError::PanicError {
                    message: panic_message(panic.as_ref()),
                })
            });

        match computed {
            Ok(payload) => {
                self.cache.put(payload.clone());
                Outcome::Fresh(payload)
            }
            Err(e) => self.recover(e),
        }
    }

    async fn compute(&self, now: DateTime<Utc>) -> Result<CampaignPayload> {
        let source_url = self.config.source_url();

        tracing::debug!("Fetching campaign page: {}", source_url);
        let html = self.fetcher.fetch_page(source_url).await?;
        tracing::debug!("Fetched {} bytes", html.len());

        let extracted = extract_from_html(&html).ok_or(ScoreError::ExtractionMiss)?;
        tracing::info!(
            "Extracted total raised {} via {}",
            extracted.value,
            extracted.method.as_str()
        );

        Ok(build(
            extracted,
            self.config.goal(),
            self.config.currency(),
            self.config.locale(),
            source_url,
            now,
        ))
    }

    fn recover(&self, error: ScoreError) -> Outcome {
        let note = error.stale_note();

        match self.cache.substitute(&note) {
            Some(payload) => {
                tracing::warn!(
                    "Serving last known value ({:?}): {}",
                    error.category(),
                    error
                );
                Outcome::Stale(payload)
            }
            None => {
                tracing::error!(
                    "No cached value to fall back on ({:?}): {}",
                    error.category(),
                    error
                );
                Outcome::Failed {
                    status: error.status_code(),
                    body: error.error_body(),
                }
            }
        }
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
