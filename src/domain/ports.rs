use crate::domain::model::Locale;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn goal(&self) -> Option<f64>;
    fn currency(&self) -> &str;
    fn locale(&self) -> Locale;
    fn user_agent(&self) -> &str;
    fn accept_language(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// 取得活動頁面原始 HTML，每次呼叫只嘗試一次
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}
