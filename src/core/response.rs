use crate::domain::model::{CampaignPayload, ExtractionResult, Locale, RawAmount};
use chrono::{DateTime, Utc};

const NO_BREAK_SPACE: char = '\u{a0}';

/// 以指定幣別與地區格式化金額，不含小數位
///
/// 四捨五入採遠離零方向，與瀏覽器 `Intl.NumberFormat` 的預設一致。
pub fn format_currency(amount: RawAmount, currency: &str, locale: Locale) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let symbol = currency_symbol(currency, locale);

    let formatted = match locale {
        Locale::EnCa | Locale::EnUs => {
            format!("{}{}", symbol, group_digits(rounded.abs(), ','))
        }
        Locale::FrCa => format!(
            "{}{}{}",
            group_digits(rounded.abs(), NO_BREAK_SPACE),
            NO_BREAK_SPACE,
            symbol
        ),
    };

    if negative {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

fn currency_symbol(currency: &str, locale: Locale) -> String {
    let code = currency.to_ascii_uppercase();
    let symbol = match (locale, code.as_str()) {
        (Locale::EnCa | Locale::FrCa, "CAD") | (Locale::EnUs, "USD") => "$",
        (Locale::EnCa | Locale::FrCa, "USD") => "US$",
        (Locale::EnUs, "CAD") => "CA$",
        (_, "EUR") => "€",
        (_, "GBP") => "£",
        _ => {
            return match locale {
                Locale::FrCa => code,
                _ => format!("{}{}", code, NO_BREAK_SPACE),
            }
        }
    };
    symbol.to_string()
}

fn group_digits(value: f64, separator: char) -> String {
    let digits = format!("{:.0}", value);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 由萃取結果組出回應內容，純函式
///
/// 目標為零或未設定時，`goal`、`goalDisplay`、`progressPct` 皆為 null。
pub fn build(
    extraction: ExtractionResult,
    goal: Option<RawAmount>,
    currency: &str,
    locale: Locale,
    source_url: &str,
    now: DateTime<Utc>,
) -> CampaignPayload {
    let total_raised = extraction.value;
    let goal = goal.filter(|g| *g > 0.0);

    CampaignPayload {
        total_raised,
        total_raised_display: format_currency(total_raised, currency, locale),
        goal,
        goal_display: goal.map(|g| format_currency(g, currency, locale)),
        progress_pct: goal.map(|g| round2(total_raised / g * 100.0)),
        updated_at: now,
        source: source_url.to_string(),
        method: extraction.method,
        stale: false,
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ExtractionMethod;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
    }

    fn extraction(value: f64) -> ExtractionResult {
        ExtractionResult {
            value,
            method: ExtractionMethod::DomCandidate,
        }
    }

    #[test]
    fn test_format_canadian_dollars() {
        assert_eq!(format_currency(12500.0, "CAD", Locale::EnCa), "$12,500");
        assert_eq!(format_currency(250000.0, "CAD", Locale::EnCa), "$250,000");
        assert_eq!(format_currency(999.0, "CAD", Locale::EnCa), "$999");
        assert_eq!(format_currency(0.0, "CAD", Locale::EnCa), "$0");
        assert_eq!(format_currency(1234567.0, "CAD", Locale::EnCa), "$1,234,567");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        assert_eq!(format_currency(1249.5, "CAD", Locale::EnCa), "$1,250");
        assert_eq!(format_currency(1249.49, "CAD", Locale::EnCa), "$1,249");
    }

    #[test]
    fn test_format_foreign_dollars() {
        assert_eq!(format_currency(500.0, "USD", Locale::EnCa), "US$500");
        assert_eq!(format_currency(500.0, "CAD", Locale::EnUs), "CA$500");
        assert_eq!(format_currency(500.0, "usd", Locale::EnUs), "$500");
        assert_eq!(format_currency(500.0, "EUR", Locale::EnUs), "€500");
        assert_eq!(format_currency(500.0, "JPY", Locale::EnCa), "JPY\u{a0}500");
    }

    #[test]
    fn test_format_french_canadian() {
        assert_eq!(
            format_currency(12500.0, "CAD", Locale::FrCa),
            "12\u{a0}500\u{a0}$"
        );
    }

    #[test]
    fn test_build_with_goal() {
        let payload = build(
            extraction(12500.0),
            Some(250000.0),
            "CAD",
            Locale::EnCa,
            "https://example.com/campaign",
            now(),
        );

        assert_eq!(payload.total_raised, 12500.0);
        assert_eq!(payload.total_raised_display, "$12,500");
        assert_eq!(payload.goal, Some(250000.0));
        assert_eq!(payload.goal_display.as_deref(), Some("$250,000"));
        assert_eq!(payload.progress_pct, Some(5.0));
        assert_eq!(payload.updated_at, now());
        assert_eq!(payload.source, "https://example.com/campaign");
        assert_eq!(payload.method, ExtractionMethod::DomCandidate);
        assert!(!payload.stale);
        assert!(payload.note.is_none());
    }

    #[test]
    fn test_progress_rounded_to_two_decimals() {
        let payload = build(
            extraction(1234.0),
            Some(250000.0),
            "CAD",
            Locale::EnCa,
            "https://example.com",
            now(),
        );
        assert_eq!(payload.progress_pct, Some(0.49));

        let payload = build(
            extraction(1.0),
            Some(3.0),
            "CAD",
            Locale::EnCa,
            "https://example.com",
            now(),
        );
        assert_eq!(payload.progress_pct, Some(33.33));
    }

    #[test]
    fn test_build_without_goal() {
        for goal in [None, Some(0.0)] {
            let payload = build(
                extraction(800.0),
                goal,
                "CAD",
                Locale::EnCa,
                "https://example.com",
                now(),
            );
            assert!(payload.goal.is_none());
            assert!(payload.goal_display.is_none());
            assert!(payload.progress_pct.is_none());
        }
    }
}
