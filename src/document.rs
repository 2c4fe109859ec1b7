use std::cell::RefCell;
use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

/// How descendant text is flattened into one string.
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    pub separator: &'static str,
    pub strip: bool,
}

impl TextOptions {
    /// Fragments trimmed and joined with a single space.
    pub const SPACED: TextOptions = TextOptions {
        separator: " ",
        strip: true,
    };
}

/// Read-only view of one element in a parsed document.
///
/// Selection only ever looks at descendants, never at the node itself.
pub trait Node: Sized {
    fn select_all(&self, selector: &str) -> Vec<Self>;

    fn select_first(&self, selector: &str) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    fn attr(&self, name: &str) -> Option<String>;

    fn text(&self, opts: TextOptions) -> String;
}

/// Join text fragments the same way for every `Node` implementation.
pub fn join_fragments<'s>(fragments: impl Iterator<Item = &'s str>, opts: TextOptions) -> String {
    let parts: Vec<&str> = fragments
        .map(|f| if opts.strip { f.trim() } else { f })
        .filter(|f| !f.is_empty())
        .collect();
    parts.join(opts.separator)
}

// ── scraper-backed nodes ──

thread_local! {
    static SELECTORS: RefCell<HashMap<String, Option<Selector>>> = RefCell::new(HashMap::new());
}

fn with_selector<T>(css: &str, f: impl FnOnce(&Selector) -> T) -> Option<T> {
    SELECTORS.with(|cache| {
        let mut cache = cache.borrow_mut();
        let entry = cache.entry(css.to_string()).or_insert_with(|| match Selector::parse(css) {
            Ok(sel) => Some(sel),
            Err(e) => {
                warn!(selector = css, error = %e, "invalid selector, matching nothing");
                None
            }
        });
        entry.as_ref().map(f)
    })
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a>(pub ElementRef<'a>);

impl<'a> HtmlNode<'a> {
    pub fn root(doc: &'a Html) -> Self {
        HtmlNode(doc.root_element())
    }
}

impl<'a> Node for HtmlNode<'a> {
    fn select_all(&self, selector: &str) -> Vec<Self> {
        with_selector(selector, |sel| self.0.select(sel).map(HtmlNode).collect())
            .unwrap_or_default()
    }

    fn select_first(&self, selector: &str) -> Option<Self> {
        with_selector(selector, |sel| self.0.select(sel).next().map(HtmlNode)).flatten()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn text(&self, opts: TextOptions) -> String {
        join_fragments(self.0.text(), opts)
    }
}

// ── In-memory tree for tests ──
