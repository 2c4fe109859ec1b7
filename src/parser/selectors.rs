//! CSS signatures of the Upwork search-page job tile markup.

pub const JOB_TILE: &str = "article.job-tile";
pub const TITLE_LINK: &str = "a[data-test='job-tile-title-link']";
pub const DESCRIPTION: &str = "p.text-body-sm";
pub const DESCRIPTION_FALLBACK: &str = ".air3-line-clamp p, .air3-line-clamp";
pub const SKILL_TOKEN: &str = "div.air3-token-container button.air3-token span";
pub const EXPERIENCE_LEVEL: &str = "li[data-test='experience-level'] strong";
pub const JOB_TYPE_LABEL: &str = "li[data-test='job-type-label'] strong";
pub const PRICE_DETAIL: &str = "li[data-test='is-fixed-price'], li[data-test='is-hourly']";
