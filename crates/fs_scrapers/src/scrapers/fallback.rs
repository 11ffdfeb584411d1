use fs_core::ExtractedContent;
use scraper::Html;

use super::utils;

/// `article`, `main` and `div` elements carrying one of the content classes.
pub const CONTAINER_SELECTOR: &str = "article.content, article.article, article.post, \
     main.content, main.article, main.post, \
     div.content, div.article, div.post";

pub const UNTITLED: &str = "Untitled";

/// Selector-based extraction for pages Readability cannot handle.
///
/// Content comes from the class-tagged containers in document order, or from
/// every paragraph when the page has none. Pieces are joined with newlines.
pub fn parse(html: &str, url: &str) -> ExtractedContent {
    let document = Html::parse_document(html);

    let title = utils::extract_text(&document, "title")
        .map(|t| t.trim().to_string())
        .ok()
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let mut pieces = utils::extract_texts(&document, CONTAINER_SELECTOR).unwrap_or_default();
    if pieces.is_empty() {
        pieces = utils::extract_texts(&document, "p").unwrap_or_default();
    }

    let content = pieces
        .iter()
        .map(|piece| piece.trim())
        .collect::<Vec<_>>()
        .join("\n");

    ExtractedContent {
        title,
        content,
        source: url.to_string(),
    }
}
