//! HTML scraping for the health-news source.
//!
//! Scraping follows a two-phase pattern:
//!
//! 1. **Indexing**: collect candidate article URLs from a seed page
//! 2. **Fetching**: download each article and reduce it to paragraph text
//!
//! # Submodules
//!
//! - [`links`]: extracts and normalizes article links from seed HTML
//! - [`paragraphs`]: extracts visible paragraph text from article HTML
//! - [`medical_news_today`]: ties both to a [`FetchPage`](crate::fetch::FetchPage)
//!
//! Extraction functions are pure (HTML in, strings out); all network access
//! goes through the fetcher so it can be swapped in tests.

pub mod links;
pub mod medical_news_today;
pub mod paragraphs;
