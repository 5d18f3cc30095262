use thiserror::Error;

/// Errors that can occur during recipe scraping operations
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The input URL could not be parsed into scheme + host
    #[error("Failed to parse domain")]
    MalformedUrl(#[from] url::ParseError),

    /// The URL parsed but carries no host to classify
    #[error("Failed to parse domain")]
    MissingHost,

    /// The selected strategy found no name, ingredients or instructions
    #[error("No recipe content found in page")]
    EmptyExtraction,

    /// Extracted content failed minimum-viability checks
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    /// A domain was routed to a site scraper that is not registered.
    /// The allowlist and registry are kept consistent, so this is a
    /// logic fault rather than a user-facing condition.
    #[error("No scraper registered for domain: {0}")]
    UnsupportedDomain(String),

    /// Failed to fetch the page body
    #[error("Failed to fetch URL: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Error parsing HTTP headers
    #[error("Header parse error: {0}")]
    HeaderError(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
