use crate::core::{ConfigProvider, PageFetcher};
use crate::utils::error::{Result, ScoreError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CACHE_CONTROL, USER_AGENT};
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value("user_agent", config.user_agent())?);
        headers.insert(
            ACCEPT_LANGUAGE,
            header_value("accept_language", config.accept_language())?,
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ScoreError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }
}

fn header_value(field: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| ScoreError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Not a valid header value: {}", e),
    })
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ScoreError::RequestError)?;

        let status = response.status();
        tracing::debug!("Source response status: {}", status);

        if !status.is_success() {
            return Err(ScoreError::SourceStatusError {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(ScoreError::BodyReadError)
    }
}
