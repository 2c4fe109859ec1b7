use serde::Serialize;

use super::labels::{extract_frameworks, infer_role};
use super::price::parse_price;
use super::selectors::*;
use super::text::{canonical_url, clean_text};
use crate::settings::Settings;
use crate::document::{Node, TextOptions};

/// One output row. Field order is the column order of the written table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobRecord {
    pub platform: String,
    pub title: String,
    pub description: String,
    pub role: String,
    pub level: String,
    pub skills: String,
    pub frameworks: String,
    pub price_type: String,
    pub currency: String,
    pub price_min: String,
    pub price_max: String,
    pub url: String,
}

impl JobRecord {
    pub const COLUMNS: [&'static str; 12] = [
        "platform",
        "title",
        "description",
        "role",
        "level",
        "skills",
        "frameworks",
        "price_type",
        "currency",
        "price_min",
        "price_max",
        "url",
    ];
}

pub fn extract_record<N: Node>(posting: &N, settings: &Settings) -> JobRecord {
    let title_link = posting.select_first(TITLE_LINK);
    let title = title_link
        .as_ref()
        .map(|a| clean_text(&a.text(TextOptions::SPACED)))
        .unwrap_or_default();
    let url = title_link
        .as_ref()
        .and_then(|a| a.attr("href"))
        .map(|href| canonical_url(&href, &settings.base_origin))
        .unwrap_or_default();

    let description = posting
        .select_first(DESCRIPTION)
        .or_else(|| posting.select_first(DESCRIPTION_FALLBACK))
        .map(|p| clean_text(&p.text(TextOptions::SPACED)))
        .unwrap_or_default();

    let skills: Vec<String> = posting
        .select_all(SKILL_TOKEN)
        .iter()
        .map(|s| clean_text(&s.text(TextOptions::SPACED)))
        .filter(|s| !s.is_empty())
        .collect();

    let level = posting
        .select_first(EXPERIENCE_LEVEL)
        .map(|l| clean_text(&l.text(TextOptions::SPACED)))
        .unwrap_or_default();

    let combined = format!("{} {}", title, description);
    let role = infer_role(&combined, &skills);
    let frameworks = extract_frameworks(&combined, &skills);
    let price = parse_price(posting);

    JobRecord {
        platform: settings.platform.clone(),
        title,
        description,
        role,
        level,
        skills: skills.join(", "),
        frameworks,
        price_type: price.price_type,
        currency: price.currency,
        price_min: price.min,
        price_max: price.max,
        url,
    }
}
