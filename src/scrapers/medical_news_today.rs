//! Medical News Today scraper.
//!
//! The seed page is a category listing such as
//! <https://www.medicalnewstoday.com/categories/diseases-and-conditions>.
//! Articles are linked from it with site-relative URLs like
//! `/articles/325`, which [`index_articles`] resolves to absolute URLs.
//! Article bodies are plain `<p>` elements, reduced to text by
//! [`fetch_article`].

use crate::error::ScrapeError;
use crate::fetch::FetchPage;
use crate::models::Article;
use crate::scrapers::{links, paragraphs};
use tracing::{debug, info, instrument};

/// Seed page listing disease and condition articles.
pub const SEED_URL: &str = "https://www.medicalnewstoday.com/categories/diseases-and-conditions";

/// Path fragment shared by every article URL on the site.
pub const ARTICLE_PATH_MARKER: &str = "/articles/";

/// Fetch the seed page and extract article URLs from it.
///
/// # Returns
///
/// De-duplicated absolute article URLs in first-seen order, or an error if
/// the seed page cannot be fetched.
#[instrument(level = "info", skip(fetcher))]
pub async fn index_articles<F: FetchPage>(
    fetcher: &F,
    seed_url: &str,
    path_marker: &str,
) -> Result<Vec<String>, ScrapeError> {
    let html = fetcher.fetch_page(seed_url).await?;
    let article_urls = links::collect_links(&html, seed_url, path_marker)?;

    info!(
        count = article_urls.len(),
        source = seed_url,
        "Indexed article URLs"
    );
    debug!(urls = ?article_urls, "Article URLs");

    Ok(article_urls)
}

/// Fetch a single article and reduce it to paragraph text.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_article<F: FetchPage>(fetcher: &F, url: &str) -> Result<Article, ScrapeError> {
    let html = fetcher.fetch_page(url).await?;
    let content = paragraphs::extract_paragraphs(url, &html)?;

    info!(bytes = content.len(), "Parsed article");
    Ok(Article {
        source: url.to_string(),
        content,
    })
}
