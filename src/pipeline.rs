//! The scan driver: index → fetch → match → collect findings.
//!
//! Articles are processed strictly one after another. Failure handling per
//! article:
//!
//! | Error | Effect |
//! |-------|--------|
//! | [`ScrapeError::Fetch`] | logged, link skipped, scan continues |
//! | [`ScrapeError::Parse`] | logged, article treated as empty text (no findings) |
//!
//! A failure to fetch the seed page aborts the scan.

use crate::error::ScrapeError;
use crate::fetch::FetchPage;
use crate::matcher::Matcher;
use crate::models::{Finding, ScanReport};
use crate::scrapers::medical_news_today::{self, ARTICLE_PATH_MARKER, SEED_URL};
use chrono::Local;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

/// Default number of articles fetched per run.
pub const DEFAULT_MAX_ARTICLES: usize = 10;

/// Where to scan and how much.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub seed_url: String,
    pub path_marker: String,
    pub max_articles: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            seed_url: SEED_URL.to_string(),
            path_marker: ARTICLE_PATH_MARKER.to_string(),
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }
}

/// Findings for a batch of articles plus how many were skipped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArticleScan {
    pub findings: Vec<Finding>,
    pub scanned: usize,
    pub skipped: usize,
}

/// Run a full scan: index the seed page, then scan the first
/// `config.max_articles` links.
#[instrument(level = "info", skip(fetcher, matcher))]
pub async fn run<F: FetchPage>(
    fetcher: &F,
    matcher: &Matcher,
    config: &ScanConfig,
) -> Result<ScanReport, ScrapeError> {
    let links =
        medical_news_today::index_articles(fetcher, &config.seed_url, &config.path_marker).await?;

    println!("Found {} articles. Extracting paragraphs...", links.len());

    let scan = scan_articles(fetcher, matcher, &links, config.max_articles).await;

    Ok(ScanReport {
        generated_at: Local::now(),
        seed_url: config.seed_url.clone(),
        links_discovered: links.len(),
        articles_scanned: scan.scanned,
        articles_skipped: scan.skipped,
        findings: scan.findings,
    })
}

/// Fetch and match the first `max_articles` of `links`, in order.
///
/// Findings come out in link order, then knowledge-base order within one
/// article. Articles without any disease mention contribute nothing.
#[instrument(level = "info", skip_all, fields(links = links.len(), max_articles = max_articles))]
pub async fn scan_articles<F: FetchPage>(
    fetcher: &F,
    matcher: &Matcher,
    links: &[String],
    max_articles: usize,
) -> ArticleScan {
    let results: Vec<Option<Vec<Finding>>> = stream::iter(links.iter().take(max_articles))
        .then(|link| async move {
            match medical_news_today::fetch_article(fetcher, link).await {
                Ok(article) => {
                    let findings = matcher.find_mentions(&article.source, &article.content);
                    debug!(%link, count = findings.len(), "Matched article");
                    Some(findings)
                }
                Err(e @ ScrapeError::Parse { .. }) => {
                    warn!(%link, error = %e, "Unparseable article; treating as empty text");
                    Some(Vec::new())
                }
                Err(e) => {
                    warn!(%link, error = %e, "Article fetch failed; skipping");
                    None
                }
            }
        })
        .collect()
        .await;

    let mut scan = ArticleScan::default();
    for result in results {
        match result {
            Some(findings) => {
                scan.scanned += 1;
                scan.findings.extend(findings);
            }
            None => scan.skipped += 1,
        }
    }

    info!(
        scanned = scan.scanned,
        skipped = scan.skipped,
        findings = scan.findings.len(),
        "Completed article scan"
    );
    scan
}
