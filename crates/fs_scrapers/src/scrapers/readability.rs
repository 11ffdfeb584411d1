use dom_smoothie::Readability;
use fs_core::{Error, ExtractedContent, Result};
use scraper::Html;

use super::jsonld;

/// Runs Readability over a downloaded page.
///
/// Fails when the page yields no article text, so the caller can try the
/// selector-based scraper instead.
pub fn parse(html: &str, url: &str) -> Result<ExtractedContent> {
    let mut readability = Readability::new(html, Some(url), None)
        .map_err(|e| Error::Scraping(format!("Readability could not load page: {}", e)))?;
    let article = readability
        .parse()
        .map_err(|e| Error::Scraping(format!("Readability could not parse page: {}", e)))?;

    let content = normalize_text(&article.text_content);
    if content.is_empty() {
        return Err(Error::Scraping(format!("No article text found at {}", url)));
    }

    Ok(ExtractedContent {
        title: title_or_headline(&article.title, html),
        content,
        source: url.to_string(),
    })
}

/// Readability's title, or the JSON-LD headline when it found none.
fn title_or_headline(title: &str, html: &str) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    jsonld::extract_headline(&Html::parse_document(html)).unwrap_or_default()
}

/// Trims every line and separates the remaining text blocks with a blank line.
pub(crate) fn normalize_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
