use crate::core::handler::Outcome;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway proxy 格式的回應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    pub fn from_outcome(outcome: &Outcome) -> Result<Self> {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(cache_control) = outcome.cache_control() {
            headers.insert("Cache-Control".to_string(), cache_control.to_string());
        }

        Ok(Self {
            status_code: outcome.status(),
            headers,
            body: outcome.body_string()?,
            is_base64_encoded: false,
        })
    }
}
