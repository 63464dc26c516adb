//! Extraction of search results from the site's HTML.
//!
//! Each result on the page is rendered as
//!
//! ```html
//! <div class="b-content__inline_item">
//!   <div class="b-content__inline_item-cover"><a href="..."><img src="..."></a></div>
//!   <div class="b-content__inline_item-link">
//!     <a href="/films/...">Title</a>
//!     <div>2010, США, Фантастика</div>
//!   </div>
//! </div>
//! ```

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::models::SearchResult;

static ITEM: LazyLock<Selector> = LazyLock::new(|| selector(".b-content__inline_item"));
static ITEM_LINK: LazyLock<Selector> =
    LazyLock::new(|| selector(".b-content__inline_item-link a"));
static ITEM_YEAR: LazyLock<Selector> =
    LazyLock::new(|| selector(".b-content__inline_item-link div"));
static ITEM_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Extracts every search result item from a results page, in document order.
///
/// Items whose link is missing, has no `href`, or has no visible text are
/// skipped; the rest of the page is still returned.
pub fn parse_search_results(html: &str) -> Vec<SearchResult> {
    let document = Html::parse_document(html);

    document
        .select(&ITEM)
        .filter_map(|item| {
            let parsed = parse_item(item);
            if parsed.is_none() {
                tracing::debug!("Skipping search item without a usable link");
            }
            parsed
        })
        .collect()
}

fn parse_item(item: ElementRef<'_>) -> Option<SearchResult> {
    let link = item.select(&ITEM_LINK).next()?;
    let url = link.value().attr("href")?;
    let title = text_of(link);
    if title.is_empty() {
        return None;
    }

    let poster = item
        .select(&ITEM_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or_default();

    let year = item.select(&ITEM_YEAR).next().map(text_of).unwrap_or_default();

    Some(SearchResult {
        title,
        url: url.to_string(),
        poster: poster.to_string(),
        year,
    })
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
        <html><body>
        <div class="b-content__inline_items">
          <div class="b-content__inline_item" data-id="1">
            <div class="b-content__inline_item-cover">
              <a href="/films/fiction/1-inception-2010.html"><img src="https://static.example/1.jpg" alt=""></a>
            </div>
            <div class="b-content__inline_item-link">
              <a href="/films/fiction/1-inception-2010.html">  Inception
              </a>
              <div> 2010, США, Фантастика </div>
            </div>
          </div>
          <div class="b-content__inline_item" data-id="2">
            <div class="b-content__inline_item-cover"><span>no link here</span></div>
          </div>
          <div class="b-content__inline_item" data-id="3">
            <div class="b-content__inline_item-link">
              <a href="https://mirror.example/series/3-dark.html">Dark <span>(Темні)</span></a>
            </div>
          </div>
          <div class="b-content__inline_item" data-id="4">
            <div class="b-content__inline_item-link"><a>Anchor without href</a></div>
          </div>
          <div class="b-content__inline_item" data-id="5">
            <div class="b-content__inline_item-link">
              <a href="/films/fiction/1-inception-2010.html">Inception</a>
            </div>
          </div>
        </div>
        </body></html>
    "#;

    #[test]
    fn test_extracts_items_with_links_in_document_order() {
        let results = parse_search_results(FIXTURE);
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Inception", "Dark (Темні)", "Inception"]);
    }

    #[test]
    fn test_full_item_fields() {
        let results = parse_search_results(FIXTURE);
        assert_eq!(
            results[0],
            SearchResult::new("Inception", "/films/fiction/1-inception-2010.html")
                .with_poster("https://static.example/1.jpg")
                .with_year("2010, США, Фантастика")
        );
    }

    #[test]
    fn test_missing_poster_and_year_default_to_empty() {
        let results = parse_search_results(FIXTURE);
        assert_eq!(results[1].url, "https://mirror.example/series/3-dark.html");
        assert_eq!(results[1].poster, "");
        assert_eq!(results[1].year, "");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let results = parse_search_results(FIXTURE);
        assert_eq!(results[0].url, results[2].url);
    }

    #[test]
    fn test_page_without_items() {
        assert!(parse_search_results("<html><body><p>Нічого не знайдено</p></body></html>").is_empty());
        assert!(parse_search_results("").is_empty());
    }
}
