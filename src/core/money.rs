use crate::domain::model::RawAmount;

/// 將任意文字轉為金額：只保留數字與小數點後解析
///
/// 貨幣符號、千分位與其他字元一律丟棄，不區分幣別。
/// 空字串、沒有數字或解析結果非有限數時回傳 `None`。
pub fn parse_money(text: &str) -> Option<RawAmount> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse::<f64>().ok().filter(|n| n.is_finite())
}
