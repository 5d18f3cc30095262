//! Scraper for bbcgoodfood.com recipe pages.

use scraper::{Html, Selector};

use crate::extractors::SiteScraper;
use crate::model::RecipeDraft;
use crate::selectors::{self, squash_whitespace};

pub struct BbcGoodFood;

impl SiteScraper for BbcGoodFood {
    fn domain(&self) -> &'static str {
        "bbcgoodfood.com"
    }

    fn scrape(&self, document: &Html) -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = selectors::title(document);
        draft.description = selectors::description(document);
        draft.image = selectors::image(document);

        let ingredient_selector = Selector::parse(".recipe__ingredients section ul li")
            .expect("static selector must parse");
        for el in document.select(&ingredient_selector) {
            let text = squash_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                draft.push_ingredient(text);
            }
        }

        let instruction_selector =
            Selector::parse(".recipe__method-steps li .editor-content p")
                .expect("static selector must parse");
        for el in document.select(&instruction_selector) {
            let text = squash_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                draft.push_instruction(text);
            }
        }

        draft
    }
}
