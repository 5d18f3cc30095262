//! The page fetch collaborator.
//!
//! The engine works on already-fetched markup; this module is the thin
//! blocking HTTP glue used by the binary and [`crate::scrape_url`].

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, USER_AGENT};

use crate::config::FetchConfig;
use crate::error::ScrapeError;

/// Fetch the raw HTML body of a page.
pub fn fetch_html(url: &str, config: &FetchConfig) -> Result<String, ScrapeError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, config.user_agent.parse()?);

    debug!("Fetching {url}");
    let body = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()?
        .get(url)
        .headers(headers)
        .send()?
        .error_for_status()?
        .text()?;

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/recipe")
            .with_status(200)
            .with_body("<html><body>hello</body></html>")
            .create();

        let url = format!("{}/recipe", server.url());
        let body = fetch_html(&url, &FetchConfig::default()).unwrap();

        mock.assert();
        assert!(body.contains("hello"));
    }

    #[test]
    fn test_fetch_surfaces_http_errors() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .create();

        let url = format!("{}/missing", server.url());
        let result = fetch_html(&url, &FetchConfig::default());

        assert!(matches!(result, Err(ScrapeError::FetchError(_))));
    }
}
