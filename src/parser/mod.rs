pub mod labels;
pub mod price;
pub mod record;
pub mod selectors;
pub mod text;

use scraper::Html;
use tracing::debug;

use crate::document::{HtmlNode, Node};
use crate::settings::Settings;
use record::{extract_record, JobRecord};

/// Parse a saved search page and extract one record per job tile.
pub fn process_document(html: &str, settings: &Settings) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);
    let records = extract_postings(&HtmlNode::root(&doc), settings);
    debug!(postings = records.len(), "extracted job tiles");
    records
}

/// Every job tile under `root`, in document order.
pub fn extract_postings<N: Node>(root: &N, settings: &Settings) -> Vec<JobRecord> {
    root.select_all(selectors::JOB_TILE)
        .iter()
        .map(|tile| extract_record(tile, settings))
        .collect()
}
