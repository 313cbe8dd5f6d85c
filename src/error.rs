//! Error types for the scan pipeline.
//!
//! - [`ScrapeError`]: per-page failures. A fetch failure on the seed page aborts
//!   the run; on an article page the link is logged and skipped. A parse
//!   failure is downgraded to empty article text.
//! - [`KnowledgeBaseError`]: problems loading or compiling the disease
//!   knowledge base, always fatal at startup.

use thiserror::Error;

/// Error type for fetching and extracting pages
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network failure or non-success HTTP status
    #[error("fetch of {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    /// Page HTML is empty or carries nothing to extract
    #[error("could not parse page {url}: {reason}")]
    Parse { url: String, reason: String },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl ScrapeError {
    pub fn fetch(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse(url: &str, reason: impl ToString) -> Self {
        ScrapeError::Parse {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Error type for loading a knowledge base
#[derive(Debug, Error)]
pub enum KnowledgeBaseError {
    /// The knowledge base file could not be read
    #[error("failed to read knowledge base {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The knowledge base file is not a valid YAML list of entries
    #[error("invalid knowledge base YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An entry has a blank name
    #[error("knowledge base entry #{0} has an empty name")]
    EmptyName(usize),

    /// Two entries share a name (compared case-insensitively)
    #[error("duplicate disease name in knowledge base: {0}")]
    DuplicateName(String),

    /// A phrase could not be compiled into a search pattern
    #[error("failed to compile pattern for {phrase:?}: {source}")]
    Pattern {
        phrase: String,
        #[source]
        source: regex::Error,
    },
}
