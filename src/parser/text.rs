use std::sync::LazyLock;

use regex::Regex;
use url::Url;

// Leaked highlight markup: "span class highlight" spelled out, or raw <span ...> / </span>.
static HIGHLIGHT_NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bspan[-\s]?class[-\s]?highlight\b|</?span[^>]*>").unwrap()
});
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Single-line, whitespace-collapsed, trimmed text with highlight residue removed.
pub fn clean_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let s = HIGHLIGHT_NOISE_RE.replace_all(s, " ");
    WS_RE.replace_all(&s, " ").trim().to_string()
}

/// Absolute form of `href` resolved against `base`, query removed.
pub fn canonical_url(href: &str, base: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match Url::parse(base).and_then(|b| b.join(href)) {
        Ok(mut url) => {
            url.set_query(None);
            url.to_string()
        }
        Err(_) => strip_query(href),
    }
}

fn strip_query(href: &str) -> String {
    match href.find('?') {
        Some(q) => {
            let fragment = href[q..].find('#').map(|h| &href[q + h..]).unwrap_or("");
            format!("{}{}", &href[..q], fragment)
        }
        None => href.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.upwork.com";

    #[test]
    fn collapses_whitespace() {
        assert_eq!(clean_text("  Build a\n\n scraper\t now  "), "Build a scraper now");
    }

    #[test]
    fn strips_highlight_tags() {
        assert_eq!(
            clean_text(r#"Need <span class="highlight">Python</span> dev"#),
            "Need Python dev"
        );
        assert_eq!(clean_text("Need span-class-highlight Python"), "Need Python");
        assert_eq!(clean_text("SPAN CLASS HIGHLIGHT scraper"), "scraper");
    }

    #[test]
    fn keeps_unrelated_words() {
        assert_eq!(clean_text("spanning classes highlighted"), "spanning classes highlighted");
    }

    #[test]
    fn empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn no_double_or_outer_whitespace() {
        let samples = [
            "\u{a0}a  b\r\nc ",
            "<span>x</span><span>y</span>",
            "  </span>  trailing",
            "tabs\t\t\tand\n\nnewlines",
        ];
        for s in samples {
            let out = clean_text(s);
            assert_eq!(out, out.trim(), "outer whitespace in {:?}", out);
            assert!(
                !out.chars().zip(out.chars().skip(1)).any(|(a, b)| a.is_whitespace() && b.is_whitespace()),
                "double whitespace in {:?}",
                out
            );
        }
    }

    #[test]
    fn idempotent() {
        for s in ["a  b", "<span class=\"highlight\">Power BI</span> report", "x\ny", ""] {
            let once = clean_text(s);
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn resolves_and_strips_query() {
        assert_eq!(
            canonical_url("/jobs/123?ref=abc", BASE),
            "https://www.upwork.com/jobs/123"
        );
    }

    #[test]
    fn absolute_href_kept() {
        assert_eq!(
            canonical_url("https://other.example/a/b?x=1", BASE),
            "https://other.example/a/b"
        );
    }

    #[test]
    fn fragment_is_kept() {
        assert_eq!(
            canonical_url("/jobs/9?src=feed#details", BASE),
            "https://www.upwork.com/jobs/9#details"
        );
    }

    #[test]
    fn empty_href() {
        assert_eq!(canonical_url("", BASE), "");
        assert_eq!(canonical_url("   ", BASE), "");
    }

    #[test]
    fn bad_base_still_drops_query() {
        assert_eq!(canonical_url("/jobs/1?a=b#top", "not a url"), "/jobs/1#top");
        assert_eq!(canonical_url("/jobs/1", "not a url"), "/jobs/1");
    }
}
