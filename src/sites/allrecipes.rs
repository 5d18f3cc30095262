//! Scraper for allrecipes.com recipe pages.

use scraper::{Html, Selector};

use crate::extractors::SiteScraper;
use crate::model::RecipeDraft;
use crate::selectors::{self, squash_whitespace};

pub struct AllRecipes;

impl AllRecipes {
    fn collect_items(document: &Html, css: &str, out: &mut Vec<String>) {
        let selector = Selector::parse(css).expect("static selector must parse");
        for el in document.select(&selector) {
            let text = squash_whitespace(&el.text().collect::<Vec<_>>().join(" "));
            if !text.is_empty() {
                out.push(text);
            }
        }
    }
}

impl SiteScraper for AllRecipes {
    fn domain(&self) -> &'static str {
        "allrecipes.com"
    }

    fn scrape(&self, document: &Html) -> RecipeDraft {
        let mut draft = RecipeDraft::new();
        draft.name = selectors::title(document);
        draft.description = selectors::description(document);
        draft.image = selectors::image(document);

        Self::collect_items(
            document,
            ".mntl-structured-ingredients__list > li > p",
            &mut draft.ingredients,
        );
        Self::collect_items(
            document,
            ".recipe__steps-content ol > li > p",
            &mut draft.instructions,
        );

        // Yield sits in a label/value detail strip rather than the list
        // markup.
        let detail_selector = Selector::parse(".mm-recipes-details__item")
            .expect("static selector must parse");
        for item in document.select(&detail_selector) {
            let text = squash_whitespace(&item.text().collect::<Vec<_>>().join(" "));
            if let Some(value) = text.strip_prefix("Servings:") {
                draft.recipe_yield = Some(squash_whitespace(value));
            }
        }

        draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrapes_list_markup() {
        let html = r#"
            <html>
            <head><meta property="og:title" content="Skillet Cornbread"></head>
            <body>
                <ul class="mntl-structured-ingredients__list">
                    <li><p>1 cup cornmeal</p></li>
                    <li><p>1 cup   buttermilk</p></li>
                    <li><p>2 eggs</p></li>
                </ul>
                <div class="recipe__steps-content">
                    <ol>
                        <li><p>Whisk the dry ingredients.</p></li>
                        <li><p>Fold in buttermilk and eggs.</p></li>
                        <li><p>Bake in a hot skillet.</p></li>
                    </ol>
                </div>
                <div class="mm-recipes-details__item">Servings: 8</div>
            </body>
            </html>
        "#;
        let document = Html::parse_document(html);

        let draft = AllRecipes.scrape(&document);

        assert_eq!(draft.name.as_deref(), Some("Skillet Cornbread"));
        assert_eq!(
            draft.ingredients,
            vec!["1 cup cornmeal", "1 cup buttermilk", "2 eggs"]
        );
        assert_eq!(draft.instructions.len(), 3);
        assert_eq!(draft.recipe_yield.as_deref(), Some("8"));
    }
}
