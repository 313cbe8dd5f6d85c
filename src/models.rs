//! Data models shared by the scraping, matching and output stages.
//!
//! - [`DiseaseEntry`]: one knowledge-base record (name, symptoms, prevention)
//! - [`Article`]: a fetched article reduced to its paragraph text
//! - [`MatchOutcome`]: the tri-state result of matching one entry against one text
//! - [`Finding`]: a confirmed (article, disease) mention, one output row
//! - [`ScanReport`]: the summary of a whole run

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A disease together with the keyword phrases describing it.
///
/// Entries are immutable once loaded into a
/// [`KnowledgeBase`](crate::knowledge_base::KnowledgeBase). The YAML form is:
///
/// ```yaml
/// - name: Asthma
///   symptoms: [shortness of breath, wheezing]
///   prevention: [avoiding allergens]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiseaseEntry {
    /// The disease name, unique within a knowledge base.
    pub name: String,
    /// Phrases that indicate a symptom of the disease is discussed.
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Phrases that indicate a preventive measure is discussed.
    #[serde(default, alias = "preventionMeasures")]
    pub prevention: Vec<String>,
}

impl DiseaseEntry {
    pub fn new<S: Into<String>>(name: S, symptoms: &[&str], prevention: &[&str]) -> Self {
        Self {
            name: name.into(),
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
            prevention: prevention.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A fetched article page reduced to its paragraph text.
#[derive(Debug)]
pub struct Article {
    /// The URL the article was fetched from.
    pub source: String,
    /// All non-empty paragraph texts joined with single spaces.
    pub content: String,
}

/// Result of matching one [`DiseaseEntry`] against one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub disease_found: bool,
    pub symptoms_found: bool,
    pub prevention_found: bool,
}

impl MatchOutcome {
    pub fn new(disease_found: bool, symptoms_found: bool, prevention_found: bool) -> Self {
        Self {
            disease_found,
            symptoms_found,
            prevention_found,
        }
    }
}

/// A disease mention confirmed in one article.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// URL of the article that mentions the disease.
    pub source_link: String,
    /// Name of the matched knowledge-base entry.
    pub disease_name: String,
    /// Whether any of the disease's symptom phrases appear in the article.
    pub symptoms_found: bool,
    /// Whether any of the disease's prevention phrases appear in the article.
    pub prevention_found: bool,
}

impl Finding {
    /// Column headers of the tabular output, in row order.
    pub const HEADERS: [&'static str; 4] = [
        "Article URL",
        "Disease",
        "Symptoms Found",
        "Preventive Measures Found",
    ];

    /// Render this finding as a tabular row with `"Yes"`/`"No"` flags.
    pub fn to_row(&self) -> [&str; 4] {
        [
            self.source_link.as_str(),
            self.disease_name.as_str(),
            yes_no(self.symptoms_found),
            yes_no(self.prevention_found),
        ]
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Summary of one scan, serialized as-is by the JSON output.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Local timestamp at which the report was assembled.
    pub generated_at: DateTime<Local>,
    /// The seed page the article links were collected from.
    pub seed_url: String,
    /// Number of distinct article links found on the seed page.
    pub links_discovered: usize,
    /// Number of articles fetched and matched.
    pub articles_scanned: usize,
    /// Number of articles skipped because their fetch failed.
    pub articles_skipped: usize,
    /// Every finding, in link order then knowledge-base order.
    pub findings: Vec<Finding>,
}
