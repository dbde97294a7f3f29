use crate::config::{
    DEFAULT_ACCEPT_LANGUAGE, DEFAULT_CAMPAIGN_URL, DEFAULT_CURRENCY, DEFAULT_GOAL,
    DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::core::ConfigProvider;
use crate::domain::model::Locale;
use crate::utils::error::{Result, ScoreError};
use crate::utils::validation::{validate_campaign, Validate};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub source_url: String,
    pub goal: f64,
    pub currency: String,
    pub locale: Locale,
    pub user_agent: String,
    pub accept_language: String,
    pub timeout_secs: u64,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 以任意查詢函式取得設定值，未設定時使用預設值
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let goal = match lookup("GOAL") {
            Some(raw) => raw.trim().parse::<f64>().map_err(|_| ScoreError::ConfigError {
                message: format!("GOAL must be a number, got {:?}", raw),
            })?,
            None => DEFAULT_GOAL,
        };

        let timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ScoreError::ConfigError {
                message: format!("REQUEST_TIMEOUT_SECS must be an integer, got {:?}", raw),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let locale = match lookup("LOCALE") {
            Some(raw) => raw.parse()?,
            None => DEFAULT_LOCALE,
        };

        Ok(Self {
            source_url: lookup("SOURCE_URL").unwrap_or_else(|| DEFAULT_CAMPAIGN_URL.to_string()),
            goal,
            currency: lookup("CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            locale,
            user_agent: lookup("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            accept_language: lookup("ACCEPT_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_ACCEPT_LANGUAGE.to_string()),
            timeout_secs,
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn goal(&self) -> Option<f64> {
        Some(self.goal)
    }

    fn currency(&self) -> &str {
        &self.currency
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn accept_language(&self) -> &str {
        &self.accept_language
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_campaign(self)?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = LambdaConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.source_url(), DEFAULT_CAMPAIGN_URL);
        assert_eq!(config.goal(), Some(250000.0));
        assert_eq!(config.currency(), "CAD");
        assert_eq!(config.locale(), Locale::EnCa);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = LambdaConfig::from_lookup(lookup_from(&[
            ("SOURCE_URL", "https://other.example.com/c"),
            ("GOAL", " 5000 "),
            ("LOCALE", "fr-CA"),
            ("REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.source_url(), "https://other.example.com/c");
        assert_eq!(config.goal(), Some(5000.0));
        assert_eq!(config.locale(), Locale::FrCa);
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_malformed_numbers_are_config_errors() {
        let err = LambdaConfig::from_lookup(lookup_from(&[("GOAL", "a lot")])).unwrap_err();
        assert!(matches!(err, ScoreError::ConfigError { .. }));

        assert!(LambdaConfig::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "-1")])).is_err());
        assert!(LambdaConfig::from_lookup(lookup_from(&[("LOCALE", "klingon")])).is_err());
    }
}
