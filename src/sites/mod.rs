//! Alternative scraper registry.
//!
//! Sites that do not embed structured recipe markup get a hand-written
//! scraper keyed by exact registrable domain. Registration is a static
//! table; routing never matches wildcards or subdomains.

use scraper::Html;

use crate::error::ScrapeError;
use crate::extractors::SiteScraper;
use crate::model::RecipeDraft;

mod allrecipes;
mod bbcgoodfood;
mod eatingwell;

pub use self::allrecipes::AllRecipes;
pub use self::bbcgoodfood::BbcGoodFood;
pub use self::eatingwell::EatingWell;

static SCRAPERS: &[&dyn SiteScraper] = &[&EatingWell, &AllRecipes, &BbcGoodFood];

/// Find the scraper registered for a registrable domain, if any.
pub fn lookup(domain: &str) -> Option<&'static dyn SiteScraper> {
    SCRAPERS.iter().copied().find(|s| s.domain() == domain)
}

/// All registered domains, in registration order.
pub fn registered_domains() -> impl Iterator<Item = &'static str> {
    SCRAPERS.iter().map(|s| s.domain())
}

/// Run the registered scraper for a domain.
///
/// The dispatcher only calls this after routing a domain to the
/// registry, so a miss here is a logic fault
/// ([`ScrapeError::UnsupportedDomain`]), not a user-facing condition.
pub fn run(domain: &str, document: &Html) -> Result<RecipeDraft, ScrapeError> {
    match lookup(domain) {
        Some(scraper) => Ok(scraper.scrape(document)),
        None => Err(ScrapeError::UnsupportedDomain(domain.to_string())),
    }
}
