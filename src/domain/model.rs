use crate::utils::error::ScoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 貨幣主單位金額（例如：元），非負且有限
pub type RawAmount = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractionMethod {
    DomCandidate,
    BodyCurrencyMax,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::DomCandidate => "dom-candidate",
            ExtractionMethod::BodyCurrencyMax => "body-currency-max",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionResult {
    pub value: RawAmount,
    pub method: ExtractionMethod,
}

/// 顯示金額用的地區格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-CA")]
    EnCa,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "fr-CA")]
    FrCa,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnCa => "en-CA",
            Locale::EnUs => "en-US",
            Locale::FrCa => "fr-CA",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-ca" => Ok(Locale::EnCa),
            "en-us" => Ok(Locale::EnUs),
            "fr-ca" => Ok(Locale::FrCa),
            _ => Err(ScoreError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: s.to_string(),
                reason: "Supported locales: en-CA, en-US, fr-CA".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    #[serde(serialize_with = "amount::serialize")]
    pub total_raised: RawAmount,
    pub total_raised_display: String,
    #[serde(serialize_with = "amount::serialize_option")]
    pub goal: Option<RawAmount>,
    pub goal_display: Option<String>,
    #[serde(serialize_with = "amount::serialize_option")]
    pub progress_pct: Option<f64>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub updated_at: DateTime<Utc>,
    pub source: String,
    pub method: ExtractionMethod,
    pub stale: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// 整數值輸出為 JSON 整數 (12500 而非 12500.0)
mod amount {
    use serde::Serializer;

    const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn serialize_option<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// ISO-8601 UTC，固定到毫秒
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_payload() -> CampaignPayload {
        CampaignPayload {
            total_raised: 12500.0,
            total_raised_display: "$12,500".to_string(),
            goal: Some(250000.0),
            goal_display: Some("$250,000".to_string()),
            progress_pct: Some(5.0),
            updated_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            source: "https://example.com/campaign".to_string(),
            method: ExtractionMethod::DomCandidate,
            stale: false,
            note: None,
        }
    }

    #[test]
    fn test_payload_wire_shape() {
        let json = serde_json::to_value(sample_payload()).unwrap();

        assert_eq!(json["totalRaised"], serde_json::json!(12500));
        assert_eq!(json["totalRaisedDisplay"], "$12,500");
        assert_eq!(json["goal"], serde_json::json!(250000));
        assert_eq!(json["progressPct"], serde_json::json!(5));
        assert_eq!(json["updatedAt"], "2026-01-02T03:04:05.000Z");
        assert_eq!(json["method"], "dom-candidate");
        assert_eq!(json["stale"], false);
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_fractional_amounts_stay_floats() {
        let mut payload = sample_payload();
        payload.progress_pct = Some(4.99);
        payload.goal = None;

        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["progressPct"], serde_json::json!(4.99));
        assert!(json["goal"].is_null());
    }

    #[test]
    fn test_updated_at_is_truncated_to_millis() {
        let mut payload = sample_payload();
        payload.updated_at = Utc.timestamp_opt(1_767_323_045, 123_456_789).unwrap();

        let json = serde_json::to_value(payload).unwrap();
        assert_eq!(json["updatedAt"], "2026-01-02T03:04:05.123Z");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en-CA".parse::<Locale>().unwrap(), Locale::EnCa);
        assert_eq!("fr_ca".parse::<Locale>().unwrap(), Locale::FrCa);
        assert_eq!(" EN-us ".parse::<Locale>().unwrap(), Locale::EnUs);
        assert!("de-DE".parse::<Locale>().is_err());
        assert_eq!(Locale::default().to_string(), "en-CA");
    }

    #[test]
    fn test_error_body_omits_missing_details() {
        let json = serde_json::to_value(ErrorBody::new("Failed to fetch campaign page")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Failed to fetch campaign page"}));
    }
}
