use crate::core::money::parse_money;
use crate::domain::model::{ExtractionMethod, ExtractionResult};
use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// 「已募得金額」元件的候選選擇器，依優先順序排列
pub const CANDIDATE_SELECTORS: [&str; 4] = [
    r#"[data-testid*="raised"]"#,
    r#"[class*="raised"]"#,
    r#"[class*="donation"]"#,
    r#"[class*="amount"]"#,
];

/// 只接受 ASCII 數字
const CURRENCY_TOKEN_PATTERN: &str = r"\$[0-9,]+(?:\.[0-9]{2})?";

/// 單一啟發式階段：成功時回傳結果，否則交給下一階段
pub type Strategy = fn(&Html) -> Option<ExtractionResult>;

/// 啟發式鏈，順序即優先權
pub const STRATEGIES: [(&str, Strategy); 2] = [
    ("dom-candidate", dom_candidate),
    ("body-currency-max", body_currency_max),
];

fn candidate_selectors() -> &'static [Selector] {
    static SELECTORS: OnceLock<Vec<Selector>> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        CANDIDATE_SELECTORS
            .iter()
            .map(|s| Selector::parse(s).expect("candidate selector is valid"))
            .collect()
    })
}

fn currency_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CURRENCY_TOKEN_PATTERN).expect("currency regex is valid"))
}

fn body_selector() -> &'static Selector {
    static BODY: OnceLock<Selector> = OnceLock::new();
    BODY.get_or_init(|| Selector::parse("body").expect("body selector is valid"))
}

/// 依序執行啟發式鏈，第一個成功者勝出；全部落空時回傳 `None`
pub fn extract(document: &Html) -> Option<ExtractionResult> {
    for (name, strategy) in STRATEGIES {
        if let Some(result) = strategy(document) {
            tracing::debug!("Heuristic {} matched value {}", name, result.value);
            return Some(result);
        }
        tracing::debug!("Heuristic {} found nothing", name);
    }
    None
}

pub fn extract_from_html(html: &str) -> Option<ExtractionResult> {
    let document = Html::parse_document(html);
    extract(&document)
}

/// 每個選擇器只取第一個符合元素的文字，第一個大於零者勝出
pub fn dom_candidate(document: &Html) -> Option<ExtractionResult> {
    candidate_selectors()
        .iter()
        .filter_map(|selector| document.select(selector).next())
        .map(|element| element.text().collect::<String>())
        .filter(|text| !text.is_empty())
        .filter_map(|text| parse_money(&text))
        .find(|value| *value > 0.0)
        .map(|value| ExtractionResult {
            value,
            method: ExtractionMethod::DomCandidate,
        })
}

/// 掃描整個 body 文字中的貨幣字樣，取最大值
pub fn body_currency_max(document: &Html) -> Option<ExtractionResult> {
    let body_text: String = document
        .select(body_selector())
        .next()
        .map(|body| body.text().collect())
        .unwrap_or_default();

    currency_token_regex()
        .find_iter(&body_text)
        .filter_map(|m| parse_money(m.as_str()))
        .filter(|value| value.is_finite() && *value > 0.0)
        .max_by(|a, b| a.total_cmp(b))
        .map(|value| ExtractionResult {
            value,
            method: ExtractionMethod::BodyCurrencyMax,
        })
}
