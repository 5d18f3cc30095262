//! Scraper for eatingwell.com recipe pages.

use scraper::{Html, Selector};

use crate::extractors::SiteScraper;
use crate::model::RecipeDraft;
use crate::selectors::{self, squash_whitespace};

pub struct EatingWell;

impl SiteScraper for EatingWell {
    fn domain(&self) -> &'static str {
        "eatingwell.com"
    }

    fn scrape(&self, document: &Html) -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = selectors::title(document);
        draft.description = selectors::description(document);
        draft.image = selectors::image(document);

        let ingredient_selector = Selector::parse(
            ".ingredients-section > li > label > span > .ingredients-item-name",
        )
        .expect("static selector must parse");
        for el in document.select(&ingredient_selector) {
            let text = squash_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                draft.push_ingredient(text);
            }
        }

        let instruction_selector =
            Selector::parse(".instructions-section > li > .section-body > div > p")
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrapes_ingredients_and_instructions_in_order() {
        let html = r#"
            <html>
            <head><meta property="og:title" content="Roasted Veggie Bowl"></head>
            <body>
                <ul class="ingredients-section">
                    <li><label><span><span class="ingredients-item-name">2  cups broccoli</span></span></label></li>
                    <li><label><span><span class="ingredients-item-name">1 sweet potato</span></span></label></li>
                </ul>
                <ol class="instructions-section">
                    <li><div class="section-body"><div><p>Preheat the
                        oven to 200C.</p></div></div></li>
                    <li><div class="section-body"><div><p>Roast for 25 minutes.</p></div></div></li>
                </ol>
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);

        let draft = EatingWell.scrape(&document);

        assert_eq!(draft.name.as_deref(), Some("Roasted Veggie Bowl"));
        assert_eq!(draft.ingredients, vec!["2 cups broccoli", "1 sweet potato"]);
        assert_eq!(
            draft.instructions,
            vec!["Preheat the oven to 200C.", "Roast for 25 minutes."]
        );
    }

    #[test]
    fn test_empty_page_returns_draft_not_error() {
        let document = Html::parse_document("<html><body></body></html>");
        let draft = EatingWell.scrape(&document);
        assert!(draft.is_empty());
    }
}
