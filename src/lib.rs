pub mod config;
pub mod dispatch;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod model;
pub mod selectors;
pub mod sites;
pub mod validate;

pub use crate::config::FetchConfig;
pub use crate::dispatch::scrape;
pub use crate::error::ScrapeError;
pub use crate::model::{Recipe, RecipeDraft, RecipeEntry, ScrapeResponse};

/// Fetch a page and scrape it in one call.
///
/// The only I/O entry point in the crate; [`scrape`] itself is pure.
/// Fetch failures are caller-input class errors and surface as `Err`,
/// while extraction failures come back as a `status: false` envelope.
pub fn scrape_url(url: &str) -> Result<ScrapeResponse, ScrapeError> {
    let config = FetchConfig::load()?;
    let html = fetch::fetch_html(url, &config)?;
    Ok(scrape(url, &html))
}
