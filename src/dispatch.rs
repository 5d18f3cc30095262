//! The dispatcher: classify, route, extract, validate.
//!
//! Exactly one strategy runs per request and every path terminates in
//! one [`ScrapeResponse`]; extraction failures become `status: false`
//! envelopes rather than propagated faults, so one bad page never
//! destabilizes a batch of concurrent requests.

use log::{debug, error, warn};
use scraper::Html;

use crate::domain;
use crate::error::ScrapeError;
use crate::extractors::extract_generic;
use crate::model::{RecipeDraft, ScrapeResponse};
use crate::sites;
use crate::validate::validate;

/// Strategy label used in the response's `method` field.
const METHOD_GENERIC: &str = "generic";
const METHOD_NONE: &str = "none";

/// Scrape a recipe out of a page's raw markup.
///
/// The caller supplies both the source URL (for routing and provenance)
/// and the already-fetched HTML; this function performs no I/O and holds
/// no shared state, so any number of invocations may run concurrently.
pub fn scrape(url: &str, html: &str) -> ScrapeResponse {
    let registrable = match domain::registrable_domain(url) {
        Ok(d) => d,
        Err(err) => {
            warn!("Could not classify {url}: {err}");
            return ScrapeResponse::failure(METHOD_NONE, "Failed to parse domain");
        }
    };

    let document = Html::parse_document(html);

    let (method, extraction) = if sites::lookup(&registrable).is_some() {
        debug!("Routing {registrable} to its site scraper");
        (registrable.as_str(), sites::run(&registrable, &document))
    } else {
        if domain::is_supported(&registrable) {
            debug!("{registrable} is allowlisted without a site scraper, using generic");
        } else {
            debug!("Routing {registrable} to the generic extractor");
        }
        (METHOD_GENERIC, extract_generic(&document))
    };

    let draft = match extraction {
        Ok(draft) => draft,
        Err(err @ ScrapeError::UnsupportedDomain(_)) => {
            // Unreachable while the registry and allowlist stay
            // consistent; a hit here means broken routing, not a bad
            // page.
            error!("Registry routing fault for {registrable}: {err}");
            return ScrapeResponse::failure(method, err.to_string());
        }
        Err(err) => {
            debug!("Extraction via {method} found nothing: {err}");
            return ScrapeResponse::failure(method, err.to_string());
        }
    };

    finish(method, url, draft)
}

fn finish(method: &str, url: &str, draft: RecipeDraft) -> ScrapeResponse {
    match validate(draft) {
        Ok(mut recipe) => {
            recipe.url = Some(url.to_string());
            ScrapeResponse::success(method, recipe)
        }
        Err(err) => {
            debug!("Validation rejected extraction via {method}: {err}");
            ScrapeResponse::failure(method, err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON_LD_PAGE: &str = r#"
        <html><head>
        <script type="application/ld+json">
        {
            "@type": "Recipe",
            "name": "Weeknight Chili",
            "recipeIngredient": ["1 onion", "2 cans beans"],
            "recipeInstructions": ["Soften the onion", "Simmer the beans"]
        }
        </script>
        </head><body></body></html>
    "#;

    #[test]
    fn test_unregistered_domain_uses_generic() {
        let response = scrape("https://example.com/chili", JSON_LD_PAGE);

        assert!(response.status);
        assert_eq!(response.method, "generic");
        let recipe = response.results.unwrap();
        assert_eq!(recipe.name, "Weeknight Chili");
        assert_eq!(recipe.url.as_deref(), Some("https://example.com/chili"));
    }

    #[test]
    fn test_registered_domain_uses_site_scraper() {
        // JSON-LD is present but the registry entry must win.
        let html = format!(
            r#"{}<ul class="ingredients-section">
                <li><label><span><span class="ingredients-item-name">1 leek</span></span></label></li>
               </ul>"#,
            JSON_LD_PAGE
        );
        let response = scrape("https://www.eatingwell.com/recipe/1", &html);

        assert_eq!(response.method, "eatingwell.com");
    }

    #[test]
    fn test_malformed_url_fails_without_results() {
        let response = scrape("not a url", JSON_LD_PAGE);

        assert!(!response.status);
        assert_eq!(response.method, "none");
        assert_eq!(response.message, "Failed to parse domain");
        assert!(response.results.is_none());
    }

    #[test]
    fn test_empty_site_extraction_fails_via_validator() {
        let response = scrape(
            "https://www.eatingwell.com/recipe/1",
            "<html><body></body></html>",
        );

        assert!(!response.status);
        assert!(response.results.is_none());
        assert_eq!(response.method, "eatingwell.com");
    }

    #[test]
    fn test_allowlisted_domain_without_scraper_falls_through() {
        // seriouseats.com is allowlisted but has no registry entry.
        let response = scrape("https://www.seriouseats.com/chili", JSON_LD_PAGE);

        assert!(response.status);
        assert_eq!(response.method, "generic");
    }
}
