//! Command-line interface definitions.
//!
//! Every option has a default, so running the binary with no arguments scans
//! Medical News Today with the built-in knowledge base. All options can also
//! be set through environment variables.

use crate::fetch::DEFAULT_USER_AGENT;
use crate::outputs::OutputFormat;
use crate::pipeline::{DEFAULT_MAX_ARTICLES, ScanConfig};
use crate::scrapers::medical_news_today::{ARTICLE_PATH_MARKER, SEED_URL};
use clap::Parser;

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "structured_disease_data_with_prevention.csv";

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Scan the default seed page, write CSV to the working directory
/// disease_news_scan
///
/// # Scan 25 articles and write a JSON report
/// disease_news_scan -n 25 -f json -o ./reports/scan.json
///
/// # Use a custom disease list
/// disease_news_scan -k ./diseases.yaml
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Page to collect article links from
    #[arg(long, env = "SEED_URL", default_value = SEED_URL)]
    pub seed_url: String,

    /// Substring a link must contain to be treated as an article
    #[arg(long, env = "PATH_MARKER", default_value = ARTICLE_PATH_MARKER)]
    pub path_marker: String,

    /// Maximum number of articles to fetch
    #[arg(short = 'n', long, env = "MAX_ARTICLES", default_value_t = DEFAULT_MAX_ARTICLES)]
    pub max_articles: usize,

    /// Output file path
    #[arg(short, long, env = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Output file format
    #[arg(short, long, env = "OUTPUT_FORMAT", value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Optional YAML file replacing the built-in disease knowledge base
    #[arg(short, long, env = "KNOWLEDGE_BASE")]
    pub knowledge_base: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, env = "USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            seed_url: self.seed_url.clone(),
            path_marker: self.path_marker.clone(),
            max_articles: self.max_articles,
        }
    }
}
