use crate::config::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_BIND, DEFAULT_CURRENCY, DEFAULT_GOAL, DEFAULT_LOCALE,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::core::ConfigProvider;
use crate::domain::model::Locale;
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{validate_campaign, validate_socket_addr, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerConfig>,
    pub source: SourceConfig,
    pub campaign: Option<CampaignConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
    pub accept_language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub goal: Option<f64>,
    pub currency: Option<String>,
    pub locale: Option<Locale>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoreError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ScoreError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SOURCE_URL})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var regex is valid");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn bind(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind.as_deref())
            .unwrap_or(DEFAULT_BIND)
    }
}

impl ConfigProvider for TomlConfig {
    fn source_url(&self) -> &str {
        &self.source.endpoint
    }

    fn goal(&self) -> Option<f64> {
        Some(
            self.campaign
                .as_ref()
                .and_then(|c| c.goal)
                .unwrap_or(DEFAULT_GOAL),
        )
    }

    fn currency(&self) -> &str {
        self.campaign
            .as_ref()
            .and_then(|c| c.currency.as_deref())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    fn locale(&self) -> Locale {
        self.campaign
            .as_ref()
            .and_then(|c| c.locale)
            .unwrap_or(DEFAULT_LOCALE)
    }

    fn user_agent(&self) -> &str {
        self.source.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    fn accept_language(&self) -> &str {
        self.source
            .accept_language
            .as_deref()
            .unwrap_or(DEFAULT_ACCEPT_LANGUAGE)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", self.bind())?;
        validate_campaign(self)
    }
}
