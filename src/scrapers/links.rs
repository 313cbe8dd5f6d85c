//! Article link collection from a seed page.
//!
//! Every `<a href>` whose raw `href` contains the path marker (e.g.
//! `/articles/`) is kept. Absolute `http(s)` links are taken as-is; anything
//! else is resolved against the seed page's origin, so
//! `/articles/325` on `https://www.medicalnewstoday.com/categories/x` becomes
//! `https://www.medicalnewstoday.com/articles/325`.
//!
//! Duplicates are dropped, keeping the first occurrence in document order so
//! that a capped prefix of the result is stable between runs.

use crate::error::ScrapeError;
use itertools::Itertools;
use scraper::{Html, Selector};
use tracing::{debug, instrument};
use url::Url;

/// Extract de-duplicated absolute article URLs from `html`.
///
/// # Arguments
///
/// * `html` - Raw HTML of the seed page
/// * `seed_url` - URL the HTML was fetched from; its origin resolves relative links
/// * `path_marker` - Substring an `href` must contain to count as an article link
///
/// # Errors
///
/// Returns [`ScrapeError::UrlParse`] if `seed_url` is not an absolute URL.
#[instrument(level = "debug", skip(html), fields(bytes = html.len()))]
pub fn collect_links(
    html: &str,
    seed_url: &str,
    path_marker: &str,
) -> Result<Vec<String>, ScrapeError> {
    let origin = Url::parse(seed_url)?.join("/")?;
    let document = Html::parse_document(html);
    let anchor_selector =
        Selector::parse("a[href]").map_err(|e| ScrapeError::parse(seed_url, format!("{e:?}")))?;

    let links = document
        .select(&anchor_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| href.contains(path_marker))
        .filter_map(|href| resolve(&origin, href))
        .unique()
        .collect::<Vec<_>>();

    debug!(count = links.len(), "Collected article links");
    Ok(links)
}

fn resolve(origin: &Url, href: &str) -> Option<String> {
    if href.starts_with("http") {
        return Some(href.to_string());
    }
    match origin.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            debug!(%href, error = %e, "Skipping unresolvable link");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "https://www.medicalnewstoday.com/categories/diseases-and-conditions";

    #[test]
    fn test_collects_and_resolves_article_links() {
        let html = r#"
            <html><body>
              <a href="/articles/100">One</a>
              <a href="https://www.medicalnewstoday.com/articles/200">Two</a>
              <a href="/categories/cancer">Category</a>
              <a>No href</a>
            </body></html>
        "#;

        let links = collect_links(html, SEED, "/articles/").unwrap();
        assert_eq!(
            links,
            vec![
                "https://www.medicalnewstoday.com/articles/100",
                "https://www.medicalnewstoday.com/articles/200",
            ]
        );
    }

    #[test]
    fn test_deduplicates_keeping_first_occurrence() {
        let html = r#"
            <a href="/articles/2">B</a>
            <a href="/articles/1">A</a>
            <a href="/articles/2">B again</a>
            <a href="https://www.medicalnewstoday.com/articles/1">A absolute</a>
        "#;

        let links = collect_links(html, SEED, "/articles/").unwrap();
        assert_eq!(
            links,
            vec![
                "https://www.medicalnewstoday.com/articles/2",
                "https://www.medicalnewstoday.com/articles/1",
            ]
        );
    }

    #[test]
    fn test_keeps_external_absolute_links_with_marker() {
        let html = r#"<a href="http://other.example/articles/9">Elsewhere</a>"#;
        let links = collect_links(html, SEED, "/articles/").unwrap();
        assert_eq!(links, vec!["http://other.example/articles/9"]);
    }

    #[test]
    fn test_relative_links_resolve_against_origin_not_seed_path() {
        let html = r#"<a href="/articles/5#comments">Five</a>"#;
        let seed = "http://localhost:8080/deep/path/page";
        let links = collect_links(html, seed, "/articles/").unwrap();
        assert_eq!(links, vec!["http://localhost:8080/articles/5#comments"]);
    }

    #[test]
    fn test_custom_path_marker() {
        let html = r#"<a href="/news/1">N</a><a href="/articles/1">A</a>"#;
        let links = collect_links(html, SEED, "/news/").unwrap();
        assert_eq!(links, vec!["https://www.medicalnewstoday.com/news/1"]);
    }

    #[test]
    fn test_no_links() {
        let links = collect_links("<html><body></body></html>", SEED, "/articles/").unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_invalid_seed_url() {
        let html = "<a href='/articles/1'>x</a>";
        let err = collect_links(html, "not a url", "/articles/").unwrap_err();
        assert!(matches!(err, ScrapeError::UrlParse(_)));
    }
}
