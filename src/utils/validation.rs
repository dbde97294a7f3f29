use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ScoreError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScoreError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 目標金額：有限且非負（0 代表不顯示進度）
pub fn validate_goal(field_name: &str, goal: Option<f64>) -> Result<()> {
    match goal {
        Some(g) if !g.is_finite() || g < 0.0 => Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: g.to_string(),
            reason: "Goal must be a finite, non-negative amount".to_string(),
        }),
        _ => Ok(()),
    }
}

/// ISO 4217 幣別代碼，三個大寫字母
pub fn validate_currency_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Currency must be a three-letter ISO code such as CAD".to_string(),
        });
    }
    Ok(())
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<()> {
    addr.parse::<SocketAddr>()
        .map(|_| ())
        .map_err(|e| ScoreError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

/// 所有設定來源共用的活動設定檢查
pub fn validate_campaign<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("source_url", config.source_url())?;
    validate_goal("goal", config.goal())?;
    validate_currency_code("currency", config.currency())?;
    validate_non_empty_string("user_agent", config.user_agent())?;
    validate_non_empty_string("accept_language", config.accept_language())?;
    validate_range("timeout_secs", config.request_timeout().as_secs(), 1, 120)?;
    Ok(())
}
