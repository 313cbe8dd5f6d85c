//! Disease mention detection.
//!
//! Every disease name and keyword phrase is matched as a *whole word*,
//! case-insensitively. A match counts only when the matched span is not
//! directly preceded or followed by a letter or digit. Punctuation is never
//! part of a word, so it neither blocks a match nor needs to be matched
//! against a boundary:
//!
//! | Phrase | Text | Match |
//! |--------|------|-------|
//! | `weight loss` | `sudden weight loss.` | yes |
//! | `weight loss` | `weightlossinsurance` | no |
//! | `Alzheimer's` | `ALZHEIMER'S, a disease` | yes |
//! | `Alzheimer's` | `Alzheimer'sXYZ` | no |
//! | `pre-exposure prophylaxis (PrEP)` | `... prophylaxis (PrEP).` | yes |
//!
//! Phrases are escaped before compilation, so `&`, `(`, `-` and friends are
//! literal characters. A straight apostrophe and a typographic one (`’`) are
//! interchangeable on either side, so `Alzheimer's` matches `Alzheimer’s`.
//! Patterns are compiled once per knowledge base by [`Matcher::new`] and
//! reused for every article.

use crate::error::KnowledgeBaseError;
use crate::knowledge_base::KnowledgeBase;
use crate::models::{DiseaseEntry, Finding, MatchOutcome};
use regex::Regex;
use tracing::{debug, instrument, trace};

/// Anything that is not a letter or digit counts as a boundary.
const BOUNDARY: &str = r"[^\p{Alphabetic}\p{N}]";

/// Either apostrophe form.
const APOSTROPHE: &str = "['’]";

/// A single case-insensitive whole-word phrase.
#[derive(Debug, Clone)]
pub struct PhrasePattern {
    phrase: String,
    regex: Regex,
}

impl PhrasePattern {
    /// Compile a phrase. Blank phrases yield `None` and never match.
    pub fn new(phrase: &str) -> Result<Option<Self>, KnowledgeBaseError> {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let literal = regex::escape(&trimmed.replace('’', "'")).replace('\'', APOSTROPHE);
        let pattern = format!("(?i)(?:^|{BOUNDARY})(?:{literal})(?:{BOUNDARY}|$)");
        let regex = Regex::new(&pattern).map_err(|source| KnowledgeBaseError::Pattern {
            phrase: trimmed.to_string(),
            source,
        })?;
        Ok(Some(Self {
            phrase: trimmed.to_string(),
            regex,
        }))
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn compile_all(phrases: &[String]) -> Result<Vec<PhrasePattern>, KnowledgeBaseError> {
    let mut patterns = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        if let Some(p) = PhrasePattern::new(phrase)? {
            patterns.push(p);
        }
    }
    Ok(patterns)
}

/// A [`DiseaseEntry`] with its name and phrases compiled.
#[derive(Debug, Clone)]
pub struct CompiledEntry {
    name: String,
    disease: Option<PhrasePattern>,
    symptoms: Vec<PhrasePattern>,
    prevention: Vec<PhrasePattern>,
}

impl CompiledEntry {
    pub fn compile(entry: &DiseaseEntry) -> Result<Self, KnowledgeBaseError> {
        Ok(Self {
            name: entry.name.clone(),
            disease: PhrasePattern::new(&entry.name)?,
            symptoms: compile_all(&entry.symptoms)?,
            prevention: compile_all(&entry.prevention)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Match this entry against `text`. Pure and deterministic.
    pub fn evaluate(&self, text: &str) -> MatchOutcome {
        let disease_found = self.disease.as_ref().is_some_and(|p| p.is_match(text));
        let symptoms_found = first_match(&self.symptoms, text);
        let prevention_found = first_match(&self.prevention, text);

        if let Some(symptom) = symptoms_found {
            trace!(disease = %self.name, symptom, "Symptom phrase matched");
        }
        if let Some(measure) = prevention_found {
            trace!(disease = %self.name, measure, "Prevention phrase matched");
        }

        MatchOutcome::new(
            disease_found,
            symptoms_found.is_some(),
            prevention_found.is_some(),
        )
    }
}

fn first_match<'a>(patterns: &'a [PhrasePattern], text: &str) -> Option<&'a str> {
    patterns
        .iter()
        .find(|p| p.is_match(text))
        .map(PhrasePattern::phrase)
}

/// Match a single entry against `text`, compiling its patterns on the fly.
///
/// Prefer [`Matcher`] when the same entries are matched against many texts.
#[allow(dead_code)]
pub fn match_disease(
    text: &str,
    entry: &DiseaseEntry,
) -> Result<MatchOutcome, KnowledgeBaseError> {
    Ok(CompiledEntry::compile(entry)?.evaluate(text))
}

/// All entries of a [`KnowledgeBase`], compiled and kept in knowledge-base order.
#[derive(Debug, Clone)]
pub struct Matcher {
    entries: Vec<CompiledEntry>,
}

impl Matcher {
    #[instrument(level = "debug", skip_all, fields(diseases = knowledge_base.len()))]
    pub fn new(knowledge_base: &KnowledgeBase) -> Result<Self, KnowledgeBaseError> {
        let entries = knowledge_base
            .iter()
            .map(CompiledEntry::compile)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = entries.len(), "Compiled disease patterns");
        Ok(Self { entries })
    }

    /// Evaluate every entry against `text`, in knowledge-base order.
    pub fn scan<'a>(&'a self, text: &'a str) -> impl Iterator<Item = (&'a str, MatchOutcome)> + 'a {
        self.entries.iter().map(move |e| (e.name(), e.evaluate(text)))
    }

    /// One [`Finding`] per entry whose disease name occurs in `text`.
    pub fn find_mentions(&self, source_link: &str, text: &str) -> Vec<Finding> {
        self.scan(text)
            .filter(|(_, outcome)| outcome.disease_found)
            .map(|(name, outcome)| Finding {
                source_link: source_link.to_string(),
                disease_name: name.to_string(),
                symptoms_found: outcome.symptoms_found,
                prevention_found: outcome.prevention_found,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(name: &str) -> &'static DiseaseEntry {
        KnowledgeBase::builtin().get(name).unwrap()
    }

    fn phrase_matches(phrase: &str, text: &str) -> bool {
        PhrasePattern::new(phrase).unwrap().unwrap().is_match(text)
    }

    #[test]
    fn test_diabetes_scenario() {
        let text = "Patients with Diabetes often report increased thirst and fatigue.";
        let outcome = match_disease(text, builtin("Diabetes")).unwrap();
        assert_eq!(outcome, MatchOutcome::new(true, true, false));
    }

    #[test]
    fn test_asthma_scenario() {
        let text = "This article discusses Asthma, including the importance of avoiding allergens.";
        let outcome = match_disease(text, builtin("Asthma")).unwrap();
        assert_eq!(outcome, MatchOutcome::new(true, false, true));
    }

    #[test]
    fn test_unrelated_text_matches_nothing() {
        let matcher = Matcher::new(KnowledgeBase::builtin()).unwrap();
        for (name, outcome) in matcher.scan("General wellness tips.") {
            assert_eq!(outcome, MatchOutcome::default(), "{name} should not match");
        }
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        let matcher = Matcher::new(KnowledgeBase::builtin()).unwrap();
        assert!(matcher.scan("").all(|(_, o)| o == MatchOutcome::default()));
        assert!(matcher.find_mentions("https://example.com", "").is_empty());
    }

    #[test]
    fn test_disease_name_is_case_insensitive() {
        let entry = builtin("Multiple Sclerosis");
        for text in [
            "multiple sclerosis is chronic",
            "MULTIPLE SCLEROSIS is chronic",
            "About Multiple Sclerosis.",
            "(multiple sclerosis)",
        ] {
            assert!(match_disease(text, entry).unwrap().disease_found, "{text}");
        }
    }

    #[test]
    fn test_disease_name_requires_word_boundaries() {
        let entry = builtin("Cancer");
        assert!(!match_disease("Cancerous growths", entry).unwrap().disease_found);
        assert!(!match_disease("anticancer drugs", entry).unwrap().disease_found);
        assert!(match_disease("anti-cancer drugs", entry).unwrap().disease_found);
    }

    #[test]
    fn test_apostrophe_names() {
        let entry = builtin("Alzheimer's");
        assert!(!match_disease("Alzheimer'sXYZ", entry).unwrap().disease_found);
        assert!(match_disease("Alzheimer's.", entry).unwrap().disease_found);
        assert!(match_disease("early ALZHEIMER'S symptoms", entry).unwrap().disease_found);
        assert!(!match_disease("Alzheimers", entry).unwrap().disease_found);
    }

    #[test]
    fn test_typographic_apostrophe_matches_straight_one() {
        let entry = builtin("Alzheimer's");
        assert!(match_disease("Alzheimer’s disease", entry).unwrap().disease_found);
        assert!(!match_disease("Alzheimer’sXYZ", entry).unwrap().disease_found);

        let parkinsons = builtin("Parkinson's Disease");
        assert!(match_disease("PARKINSON’S DISEASE", parkinsons).unwrap().disease_found);

        let curly = DiseaseEntry::new("Crohn’s Disease", &[], &[]);
        assert!(match_disease("living with Crohn's disease", &curly).unwrap().disease_found);
        assert!(match_disease("living with Crohn’s disease", &curly).unwrap().disease_found);
        assert!(!match_disease("living with Crohns disease", &curly).unwrap().disease_found);
    }

    #[test]
    fn test_punctuation_in_names_is_literal() {
        let entry = builtin("HIV & AIDS");
        assert!(match_disease("Living with HIV & AIDS today", entry).unwrap().disease_found);
        assert!(!match_disease("Living with HIV and AIDS today", entry).unwrap().disease_found);

        let covid = builtin("COVID-19");
        assert!(match_disease("after covid-19, many", covid).unwrap().disease_found);
        assert!(!match_disease("COVID 19", covid).unwrap().disease_found);
        assert!(!match_disease("COVID-199", covid).unwrap().disease_found);
    }

    #[test]
    fn test_multi_word_phrases() {
        assert!(phrase_matches("weight loss", "sudden weight loss."));
        assert!(phrase_matches("weight loss", "Weight Loss"));
        assert!(!phrase_matches("weight loss", "weightlossinsurance"));
        assert!(!phrase_matches("weight loss", "weight lossy"));
        assert!(!phrase_matches("weight loss", "bodyweight loss"));
    }

    #[test]
    fn test_trailing_punctuation_in_phrase() {
        let phrase = "pre-exposure prophylaxis (PrEP)";
        assert!(phrase_matches(phrase, "They take pre-exposure prophylaxis (PrEP)."));
        assert!(phrase_matches(phrase, "pre-exposure prophylaxis (PrEP)"));
        assert!(!phrase_matches(phrase, "pre-exposure prophylaxis (PrEP)s"));
    }

    #[test]
    fn test_non_ascii_letters_are_word_characters() {
        assert!(!phrase_matches("pain", "painé"));
        assert!(!phrase_matches("pain", "épain"));
        assert!(phrase_matches("pain", "la pain—et"));
    }

    #[test]
    fn test_blank_phrases_never_match() {
        assert!(PhrasePattern::new("   ").unwrap().is_none());

        let entry = DiseaseEntry::new("Flu", &["", " "], &[]);
        let outcome = match_disease("Flu season", &entry).unwrap();
        assert_eq!(outcome, MatchOutcome::new(true, false, false));
    }

    #[test]
    fn test_symptoms_found_iff_any_phrase_matches() {
        let entry = builtin("Asthma");
        assert!(match_disease("some wheezing at night", entry).unwrap().symptoms_found);
        assert!(match_disease("a tight chest and coughing", entry).unwrap().symptoms_found);
        assert!(!match_disease("a healthy heart", entry).unwrap().symptoms_found);
    }

    #[test]
    fn test_flags_are_independent_of_disease_name() {
        let outcome = match_disease("fatigue and healthy diet", builtin("Diabetes")).unwrap();
        assert_eq!(outcome, MatchOutcome::new(false, true, true));
    }

    #[test]
    fn test_matching_is_idempotent() {
        let matcher = Matcher::new(KnowledgeBase::builtin()).unwrap();
        let text = "Cancer patients report fatigue; Anxiety and stress management.";
        let first: Vec<_> = matcher.scan(text).collect();
        let second: Vec<_> = matcher.scan(text).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_mentions_in_knowledge_base_order() {
        let matcher = Matcher::new(KnowledgeBase::builtin()).unwrap();
        let text = "Migraine can be confused with Asthma? No, but both need medication.";
        let findings = matcher.find_mentions("https://example.com/articles/1", text);

        let names: Vec<&str> = findings.iter().map(|f| f.disease_name.as_str()).collect();
        assert_eq!(names, vec!["Asthma", "Migraine"]);
        assert!(findings.iter().all(|f| f.prevention_found && !f.symptoms_found));
        assert!(findings.iter().all(|f| f.source_link == "https://example.com/articles/1"));
    }
}
