//! The disease knowledge base.
//!
//! A [`KnowledgeBase`] is an ordered, immutable list of [`DiseaseEntry`]
//! records with unique names. Iteration order is the order findings are
//! reported in for a single article.
//!
//! The built-in dataset covers the conditions listed under Medical News Today's
//! "diseases and conditions" category. It can be replaced at startup with a
//! YAML file (see [`KnowledgeBase::load`]) without touching the code.

use crate::error::KnowledgeBaseError;
use crate::models::DiseaseEntry;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use tokio::fs;
use tracing::{info, instrument};

/// Name, symptom phrases, prevention phrases.
type RawEntry = (&'static str, &'static [&'static str], &'static [&'static str]);

const BUILTIN_ENTRIES: &[RawEntry] = &[
    (
        "Alzheimer's",
        &[
            "memory loss",
            "confusion",
            "disorientation",
            "difficulty speaking",
        ],
        &[
            "mental exercises",
            "healthy diet",
            "regular physical activity",
            "social engagement",
        ],
    ),
    (
        "Parkinson's Disease",
        &[
            "tremors",
            "stiff muscles",
            "slowed movement",
            "balance problems",
        ],
        &[
            "exercise",
            "healthy diet",
            "avoiding toxins",
            "stress management",
        ],
    ),
    (
        "Asthma",
        &[
            "shortness of breath",
            "wheezing",
            "coughing",
            "tight chest",
        ],
        &[
            "avoiding allergens",
            "medication",
            "monitoring triggers",
            "regular physical activity",
        ],
    ),
    (
        "Breast Cancer",
        &[
            "lumps in breast",
            "change in breast shape",
            "skin irritation",
            "nipple discharge",
        ],
        &[
            "regular screenings",
            "healthy diet",
            "exercise",
            "limiting alcohol intake",
        ],
    ),
    (
        "Diabetes",
        &[
            "increased thirst",
            "frequent urination",
            "extreme hunger",
            "fatigue",
        ],
        &[
            "healthy diet",
            "regular exercise",
            "weight management",
            "blood sugar monitoring",
        ],
    ),
    (
        "Multiple Sclerosis",
        &[
            "numbness",
            "muscle weakness",
            "vision problems",
            "coordination issues",
        ],
        &[
            "healthy diet",
            "regular exercise",
            "avoiding smoking",
            "managing stress",
        ],
    ),
    (
        "Psoriasis",
        &["red patches", "itching", "dry skin", "scaly patches"],
        &[
            "moisturizing skin",
            "avoiding triggers",
            "stress management",
            "healthy diet",
        ],
    ),
    (
        "Ulcerative Colitis",
        &[
            "abdominal pain",
            "bloody stool",
            "diarrhea",
            "weight loss",
        ],
        &[
            "healthy diet",
            "stress management",
            "medication adherence",
            "avoidance of trigger foods",
        ],
    ),
    (
        "Leukemia",
        &[
            "fatigue",
            "unexplained weight loss",
            "frequent infections",
            "easy bruising",
        ],
        &[
            "avoiding toxins",
            "healthy lifestyle",
            "regular medical check-ups",
        ],
    ),
    (
        "HIV & AIDS",
        &[
            "fatigue",
            "swollen lymph nodes",
            "night sweats",
            "weight loss",
        ],
        &[
            "safe sex practices",
            "needle sharing prevention",
            "HIV testing",
            "pre-exposure prophylaxis (PrEP)",
        ],
    ),
    (
        "COVID-19",
        &[
            "fever",
            "cough",
            "shortness of breath",
            "loss of taste or smell",
        ],
        &[
            "hand hygiene",
            "mask-wearing",
            "social distancing",
            "vaccination",
        ],
    ),
    (
        "Anxiety",
        &[
            "restlessness",
            "rapid heart rate",
            "sweating",
            "difficulty concentrating",
        ],
        &[
            "stress management",
            "physical exercise",
            "adequate sleep",
            "cognitive-behavioral therapy",
        ],
    ),
    (
        "Atopic Dermatitis",
        &["itchy skin", "dry skin", "rashes", "skin infections"],
        &[
            "moisturizing skin",
            "avoiding triggers",
            "gentle skin care products",
            "stress management",
        ],
    ),
    (
        "Cancer",
        &["fatigue", "weight loss", "pain", "changes in appetite"],
        &[
            "healthy diet",
            "avoid tobacco",
            "regular screenings",
            "physical activity",
        ],
    ),
    (
        "Cardiovascular Health",
        &[
            "chest pain",
            "shortness of breath",
            "palpitations",
            "fatigue",
        ],
        &[
            "healthy diet",
            "regular exercise",
            "blood pressure management",
            "limiting alcohol intake",
        ],
    ),
    (
        "Headache",
        &[
            "pain in head",
            "sensitivity to light",
            "nausea",
            "dizziness",
        ],
        &[
            "avoiding triggers",
            "stress management",
            "adequate sleep",
            "regular exercise",
        ],
    ),
    (
        "Migraine",
        &[
            "severe headache",
            "nausea",
            "sensitivity to light",
            "visual disturbances",
        ],
        &[
            "avoiding triggers",
            "medication",
            "stress management",
            "regular sleep patterns",
        ],
    ),
    (
        "Mental Health",
        &["mood swings", "anxiety", "depression", "fatigue"],
        &[
            "stress management",
            "therapy",
            "exercise",
            "healthy relationships",
        ],
    ),
    (
        "Sexual Health",
        &[
            "pain during intercourse",
            "reduced libido",
            "erectile dysfunction",
            "fertility issues",
        ],
        &[
            "safe sex practices",
            "regular health check-ups",
            "communication with partner",
            "stress management",
        ],
    ),
];

static BUILTIN: Lazy<KnowledgeBase> = Lazy::new(|| KnowledgeBase {
    entries: BUILTIN_ENTRIES
        .iter()
        .map(|(name, symptoms, prevention)| DiseaseEntry::new(*name, symptoms, prevention))
        .collect(),
});

/// An ordered collection of disease entries with unique names.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<DiseaseEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base, rejecting blank and duplicate names.
    ///
    /// Names are compared case-insensitively since matching is
    /// case-insensitive too; two entries differing only in case would
    /// always report together.
    pub fn new(entries: Vec<DiseaseEntry>) -> Result<Self, KnowledgeBaseError> {
        let mut seen = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(KnowledgeBaseError::EmptyName(i));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(KnowledgeBaseError::DuplicateName(entry.name.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in dataset, initialized on first use.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Parse a YAML list of entries.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, KnowledgeBaseError> {
        let entries: Vec<DiseaseEntry> = serde_yaml::from_str(yaml)?;
        Self::new(entries)
    }

    /// Read and parse a YAML knowledge base file.
    #[instrument(level = "info", skip_all, fields(%path))]
    pub async fn load(path: &str) -> Result<Self, KnowledgeBaseError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|source| KnowledgeBaseError::Io {
                path: path.to_string(),
                source,
            })?;
        let kb = Self::from_yaml_str(&yaml)?;
        info!(diseases = kb.len(), "Loaded knowledge base");
        Ok(kb)
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&DiseaseEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiseaseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
