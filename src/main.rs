//! # Disease News Scan
//!
//! Scrapes a health-news category page, downloads a capped number of the
//! articles it links to, and reports which known diseases each article
//! mentions, along with whether the article also mentions any of that
//! disease's symptoms or preventive measures.
//!
//! ## Usage
//!
//! ```sh
//! disease_news_scan -n 10 -o ./structured_disease_data_with_prevention.csv
//! ```
//!
//! ## Architecture
//!
//! The application is a linear pipeline:
//! 1. **Indexing**: collect article URLs from the seed page
//! 2. **Fetching**: download each article and join its paragraph text
//! 3. **Matching**: test every knowledge-base disease against the text
//! 4. **Output**: write one CSV row (or JSON record) per disease mention
//!
//! Articles are processed one at a time on a single-threaded runtime.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod fetch;
mod knowledge_base;
mod matcher;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use cli::Cli;
use fetch::HttpFetcher;
use knowledge_base::KnowledgeBase;
use matcher::Matcher;
use outputs::preview::{self, PREVIEW_ROWS};
use utils::ensure_writable_parent;

#[tokio::main(flavor = "current_thread")]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("disease_news_scan starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    // Early check: fail before any fetching if the output cannot be written
    if let Err(e) = ensure_writable_parent(&args.output).await {
        error!(
            path = %args.output,
            error = %e,
            "Output location is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Knowledge base ----
    let knowledge_base = match &args.knowledge_base {
        Some(path) => KnowledgeBase::load(path).await?,
        None => KnowledgeBase::builtin().clone(),
    };
    if knowledge_base.is_empty() {
        warn!("Knowledge base has no diseases; no findings will be produced");
    }
    let matcher = Matcher::new(&knowledge_base)?;
    info!(diseases = knowledge_base.len(), "Knowledge base ready");

    // ---- Scan ----
    let fetcher = HttpFetcher::new(&args.user_agent)?;
    let config = args.scan_config();
    let report = pipeline::run(&fetcher, &matcher, &config).await?;

    // ---- Output ----
    if let Err(e) = outputs::write_report(&report, &args.output, args.format).await {
        error!(path = %args.output, error = %e, "Failed writing output");
        return Err(e);
    }

    println!(
        "\n{} file '{}' created successfully!",
        args.format, args.output
    );
    println!("{}", preview::render(&report.findings, PREVIEW_ROWS));

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        links = report.links_discovered,
        scanned = report.articles_scanned,
        skipped = report.articles_skipped,
        findings = report.findings.len(),
        "Execution complete"
    );

    Ok(())
}
