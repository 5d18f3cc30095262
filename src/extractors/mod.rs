use crate::model::RecipeDraft;
use scraper::Html;

mod json_ld;

pub use self::json_ld::extract_generic;

/// A hand-written scraper for one specific site.
///
/// Implementations walk page-specific markup and must always return a
/// draft, even an empty one; whether the result is usable is decided
/// centrally by the validator so the failure policy stays uniform
/// across every site.
pub trait SiteScraper: Sync {
    /// The registrable domain this scraper handles.
    fn domain(&self) -> &'static str;

    fn scrape(&self, document: &Html) -> RecipeDraft;
}
