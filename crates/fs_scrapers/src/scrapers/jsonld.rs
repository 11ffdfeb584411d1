use scraper::{Html, Selector};
use serde_json::Value;

/// Looks for an article headline in JSON-LD metadata.
/// Handles single objects, arrays of objects and `@graph` wrappers.
pub fn extract_headline(document: &Html) -> Option<String> {
    let script_selector = Selector::parse("script[type='application/ld+json']").ok()?;

    for script in document.select(&script_selector) {
        let raw = script.text().collect::<String>();
        let Ok(json) = serde_json::from_str::<Value>(raw.trim()) else {
            continue;
        };
        if let Some(headline) = find_headline(&json) {
            return Some(headline);
        }
    }

    None
}

fn find_headline(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.iter().find_map(find_headline),
        Value::Object(obj) => {
            if let Some(headline) = obj.get("headline").and_then(|h| h.as_str()) {
                let headline = headline.trim();
                if !headline.is_empty() {
                    return Some(headline.to_string());
                }
            }
            obj.get("@graph").and_then(find_headline)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_from_object() {
        let html = r#"
            <script type="application/ld+json">
                {"@type": "NewsArticle", "headline": " Budget talks stall "}
            </script>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_headline(&document).as_deref(), Some("Budget talks stall"));
    }

    #[test]
    fn test_headline_from_graph() {
        let html = r#"
            <script type="application/ld+json">not json</script>
            <script type="application/ld+json">
                {"@graph": [{"@type": "WebPage"}, {"@type": "NewsArticle", "headline": "Graph headline"}]}
            </script>
        "#;
        let document = Html::parse_document(html);
        assert_eq!(extract_headline(&document).as_deref(), Some("Graph headline"));
    }

    #[test]
    fn test_no_headline() {
        let document = Html::parse_document("<html><body><p>Nothing here</p></body></html>");
        assert!(extract_headline(&document).is_none());
    }
}
