//! Domain classification.
//!
//! Reduces a URL to its registrable domain and checks it against the
//! supported-domain allowlist that drives generic-vs-site routing.

use url::{Host, Url};

use crate::error::ScrapeError;

/// Domains the engine explicitly supports. Every domain in the site
/// scraper registry must appear here; an allowlisted domain without a
/// registered scraper falls through to the generic extractor.
pub const SUPPORTED_DOMAINS: &[&str] = &[
    "eatingwell.com",
    "allrecipes.com",
    "bbcgoodfood.com",
    "seriouseats.com",
    "bonappetit.com",
];

/// Second-level suffixes under which registration happens one label
/// deeper (so `www.bbcgoodfood.co.uk` reduces to `bbcgoodfood.co.uk`).
const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "com.au", "net.au", "org.au", "co.nz", "co.jp", "com.br",
];

/// Extract the registrable domain from an absolute URL.
///
/// `https://www.eatingwell.com/recipe/123` -> `eatingwell.com`.
/// Pure function; fails only when the URL cannot be parsed into
/// scheme + host.
pub fn registrable_domain(url: &str) -> Result<String, ScrapeError> {
    let parsed = Url::parse(url)?;
    match parsed.host() {
        Some(Host::Domain(host)) => Ok(reduce_host(host)),
        // IP hosts have no registration hierarchy to reduce.
        Some(ip) => Ok(ip.to_string()),
        None => Err(ScrapeError::MissingHost),
    }
}

fn reduce_host(host: &str) -> String {
    let host = host.to_ascii_lowercase();
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() <= 2 {
        return host;
    }

    let last_two = labels[labels.len() - 2..].join(".");
    let keep = if SECOND_LEVEL_SUFFIXES.contains(&last_two.as_str()) {
        3
    } else {
        2
    };
    labels[labels.len().saturating_sub(keep)..].join(".")
}

/// Whether a registrable domain is on the supported allowlist.
pub fn is_supported(domain: &str) -> bool {
    SUPPORTED_DOMAINS.contains(&domain)
}
