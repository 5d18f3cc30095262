//! Shared selector library.
//!
//! Reusable markup queries for the fields most sites expose through
//! standard patterns (meta tags, headings). Used by the generic extractor
//! as a fallback and by site scrapers that only override the list markup.
//! A missing element is `None`, never an error.

use log::debug;
use scraper::{Html, Selector};

/// Collapse internal whitespace runs to single spaces and trim the ends.
/// Idempotent; applied to every piece of text leaving the engine.
pub fn squash_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            in_gap = true;
        } else {
            if in_gap && !out.is_empty() {
                out.push(' ');
            }
            in_gap = false;
            out.push(ch);
        }
    }
    out
}

fn selector(css: &str) -> Selector {
    // All selectors in this module are static literals.
    Selector::parse(css).expect("static selector must parse")
}

fn meta_content(document: &Html, css: &str) -> Option<String> {
    document
        .select(&selector(css))
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(squash_whitespace)
        .filter(|s| !s.is_empty())
}

fn element_text(document: &Html, css: &str) -> Option<String> {
    document
        .select(&selector(css))
        .next()
        .map(|el| squash_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .filter(|s| !s.is_empty())
}

/// Page title: og:title, then the first `<h1>`, then `<title>`.
pub fn title(document: &Html) -> Option<String> {
    meta_content(document, r#"meta[property="og:title"]"#)
        .or_else(|| element_text(document, "h1"))
        .or_else(|| element_text(document, "title"))
}

/// Page description: og:description, then the description meta tag.
pub fn description(document: &Html) -> Option<String> {
    meta_content(document, r#"meta[property="og:description"]"#)
        .or_else(|| meta_content(document, r#"meta[name="description"]"#))
}

/// Lead image URL: og:image, then twitter:image, then the first `<img>`
/// inside an `<article>`.
pub fn image(document: &Html) -> Option<String> {
    meta_content(document, r#"meta[property="og:image"]"#)
        .or_else(|| meta_content(document, r#"meta[name="twitter:image"]"#))
        .or_else(|| {
            let src = document
                .select(&selector("article img"))
                .next()
                .and_then(|el| el.value().attr("src"))
                .map(str::to_string);
            if src.is_some() {
                debug!("Falling back to first article image");
            }
            src
        })
}
