use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::selectors::{JOB_TYPE_LABEL, PRICE_DETAIL};
use crate::document::{Node, TextOptions};

static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([$€£])?\s*(\d[\d,]*(?:\.\d+)?)(?:\s*[-–]\s*([$€£])?\s*(\d[\d,]*(?:\.\d+)?))?")
        .unwrap()
});

const CURRENCIES: &[(&str, &str)] = &[("$", "USD"), ("€", "EUR"), ("£", "GBP")];

/// Compensation fields of one posting. Empty strings mean "not found".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceFields {
    pub price_type: String,
    pub currency: String,
    pub min: String,
    pub max: String,
}

pub fn currency_code(symbol: &str) -> &'static str {
    CURRENCIES
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, code)| *code)
        .unwrap_or("")
}

pub fn parse_price<N: Node>(posting: &N) -> PriceFields {
    let price_type = posting
        .select_first(JOB_TYPE_LABEL)
        .map(|label| classify_job_type(&label.text(TextOptions::SPACED)))
        .unwrap_or("");

    let text = match posting.select_first(PRICE_DETAIL) {
        Some(detail) => detail.text(TextOptions::SPACED),
        None => posting.text(TextOptions::SPACED),
    };

    let mut fields = parse_money(&text);
    fields.price_type = price_type.to_string();
    fields
}

/// "fixed"/"budget" outranks "hour" when a label mentions both.
pub fn classify_job_type(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    if lower.contains("fixed") || lower.contains("budget") {
        "fixed"
    } else if lower.contains("hour") {
        "hourly"
    } else {
        ""
    }
}

/// Currency and bounds of the first amount (or range) carrying a currency symbol.
pub fn parse_money(text: &str) -> PriceFields {
    let Some(caps) = MONEY_RE
        .captures_iter(text)
        .find(|c| c.get(1).is_some() || c.get(3).is_some())
    else {
        return PriceFields::default();
    };

    let symbol = caps
        .get(1)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
        .unwrap_or("");

    // An unparsable bound voids the whole price, currency included.
    let Some((min, max)) = bounds(&caps) else {
        return PriceFields::default();
    };

    PriceFields {
        price_type: String::new(),
        currency: currency_code(symbol).to_string(),
        min,
        max,
    }
}

/// A bare number before a symbol-carrying amount is not part of the range:
/// "Posted 3 - $40" prices at 40, not 3 to 40.
fn bounds(caps: &Captures) -> Option<(String, String)> {
    if caps.get(1).is_none() {
        let only = decimal_text(caps.get(4)?.as_str())?;
        return Some((only.clone(), only));
    }
    let first = decimal_text(caps.get(2)?.as_str())?;
    match caps.get(4) {
        Some(m) => Some((first, decimal_text(m.as_str())?)),
        None => Some((first.clone(), first)),
    }
}

/// "1,000" -> "1000.0". Always plain notation with a fractional part.
fn decimal_text(raw: &str) -> Option<String> {
    let value: f64 = raw.replace(',', "").parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    let s = value.to_string();
    Some(if s.contains('.') { s } else { format!("{}.0", s) })
}
