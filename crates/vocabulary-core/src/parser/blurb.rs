//! Challenge blurb parser
//!
//! The challenge page wraps its teaser sentence in a single `.blurb`
//! element; the inner markup is returned as-is.

use scraper::{Html, Selector};

use crate::error::{Result, VocabularyError};

/// Extracts the inner HTML of the `.blurb` element
///
/// Returns `None` when the page has no blurb, never an error.
pub fn parse_blurb(html: &str) -> Result<Option<String>> {
    let document = Html::parse_document(html);
    let blurb = Selector::parse(".blurb")
        .map_err(|e| VocabularyError::ParseError(format!("Invalid selector .blurb: {:?}", e)))?;

    Ok(document.select(&blurb).next().map(|el| el.inner_html()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blurb_keeps_inner_markup() {
        let html = r#"
        <html><body>
            <div class="blurb">A <b>serendipitous</b> discovery is a happy accident.</div>
        </body></html>
        "#;

        let blurb = parse_blurb(html).unwrap();
        assert_eq!(
            blurb.as_deref(),
            Some("A <b>serendipitous</b> discovery is a happy accident.")
        );
    }

    #[test]
    fn test_parse_blurb_missing_element() {
        let html = "<html><body><p>no blurb here</p></body></html>";

        let blurb = parse_blurb(html).unwrap();
        assert_eq!(blurb, None);
    }

    #[test]
    fn test_parse_blurb_takes_first_element() {
        let html = r#"
        <div class="blurb">first</div>
        <div class="blurb">second</div>
        "#;

        let blurb = parse_blurb(html).unwrap();
        assert_eq!(blurb.as_deref(), Some("first"));
    }
}
