use crate::domain::model::ErrorBody;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Source request failed: {0}")]
    RequestError(#[source] reqwest::Error),

    #[error("Source responded with status {status}")]
    SourceStatusError { status: u16 },

    #[error("No raised amount found in campaign page")]
    ExtractionMiss,

    #[error("Failed to read source body: {0}")]
    BodyReadError(#[source] reqwest::Error),

    #[error("Unexpected panic: {message}")]
    PanicError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 請求層看到的三種失敗類別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Fetch,
    ExtractionMiss,
    Unexpected,
}

impl ScoreError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScoreError::RequestError(_) | ScoreError::SourceStatusError { .. } => {
                ErrorCategory::Fetch
            }
            ScoreError::ExtractionMiss => ErrorCategory::ExtractionMiss,
            _ => ErrorCategory::Unexpected,
        }
    }

    /// 回傳舊值時附帶的說明
    pub fn stale_note(&self) -> String {
        let reason = match self.category() {
            ErrorCategory::Fetch => "source fetch failed",
            ErrorCategory::ExtractionMiss => "parse failed",
            ErrorCategory::Unexpected => "exception occurred",
        };
        format!("{}; returning last known value", reason)
    }

    /// 沒有快取可用時的 HTTP 狀態碼
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Fetch => 502,
            ErrorCategory::ExtractionMiss | ErrorCategory::Unexpected => 500,
        }
    }

    pub fn error_body(&self) -> ErrorBody {
        match self.category() {
            ErrorCategory::Fetch => ErrorBody::new("Failed to fetch campaign page"),
            ErrorCategory::ExtractionMiss => ErrorBody::new("Could not parse total raised"),
            ErrorCategory::Unexpected => ErrorBody::with_details("Server error", self.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_mapping() {
        assert_eq!(
            ScoreError::SourceStatusError { status: 503 }.category(),
            ErrorCategory::Fetch
        );
        assert_eq!(ScoreError::ExtractionMiss.category(), ErrorCategory::ExtractionMiss);
        assert_eq!(
            ScoreError::PanicError {
                message: "boom".to_string()
            }
            .category(),
            ErrorCategory::Unexpected
        );
        assert_eq!(
            ScoreError::ConfigError {
                message: "boom".to_string()
            }
            .category(),
            ErrorCategory::Unexpected
        );
    }

    #[test]
    fn test_status_codes_and_bodies() {
        let fetch = ScoreError::SourceStatusError { status: 404 };
        assert_eq!(fetch.status_code(), 502);
        assert_eq!(fetch.error_body().error, "Failed to fetch campaign page");
        assert!(fetch.error_body().details.is_none());

        let miss = ScoreError::ExtractionMiss;
        assert_eq!(miss.status_code(), 500);
        assert_eq!(miss.error_body().error, "Could not parse total raised");

        let unexpected = ScoreError::IoError(std::io::Error::other("disk gone"));
        assert_eq!(unexpected.status_code(), 500);
        let body = unexpected.error_body();
        assert_eq!(body.error, "Server error");
        assert_eq!(body.details.as_deref(), Some("IO error: disk gone"));
    }

    #[test]
    fn test_stale_notes() {
        assert_eq!(
            ScoreError::SourceStatusError { status: 500 }.stale_note(),
            "source fetch failed; returning last known value"
        );
        assert_eq!(
            ScoreError::ExtractionMiss.stale_note(),
            "parse failed; returning last known value"
        );
        assert_eq!(
            ScoreError::ConfigError {
                message: "x".to_string()
            }
            .stale_note(),
            "exception occurred; returning last known value"
        );
    }
}
