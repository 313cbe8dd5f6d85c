//! Paragraph text extraction from an article page.

use crate::error::ScrapeError;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

/// Join the text of every `<p>` in `html`, in document order.
///
/// Each paragraph's text (including nested inline elements) is trimmed;
/// empty paragraphs are dropped and the rest are joined with single spaces.
/// A page without paragraphs yields an empty string.
///
/// # Errors
///
/// Returns [`ScrapeError::Parse`] when `html` is blank. `url` is only used to
/// label the error.
#[instrument(level = "debug", skip(html), fields(bytes = html.len()))]
pub fn extract_paragraphs(url: &str, html: &str) -> Result<String, ScrapeError> {
    if html.trim().is_empty() {
        return Err(ScrapeError::parse(url, "empty document"));
    }

    let document = Html::parse_document(html);
    let paragraph_selector =
        Selector::parse("p").map_err(|e| ScrapeError::parse(url, format!("{e:?}")))?;

    let paragraphs = document
        .select(&paragraph_selector)
        .map(|p| p.text().collect::<String>())
        .filter_map(|text| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>();

    debug!(paragraphs = paragraphs.len(), "Extracted paragraphs");
    Ok(paragraphs.join(" "))
}
