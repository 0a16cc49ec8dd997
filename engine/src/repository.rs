use crate::error::LoadError;
use crate::facets;
use crate::parse::{self, normalize_inflections, normalize_lemmas};
use crate::types::{GlobalFacets, InflectionStore, LemmaRecord, LemmaStore, WordsPayload};
use std::sync::OnceLock;

/// Read-only word lists for every loaded language.
///
/// Built once from the startup payload and never mutated afterwards. The
/// repository-wide facets are computed on first use and kept for the
/// repository's lifetime.
#[derive(Debug, Default)]
pub struct WordRepository {
    lemmas: LemmaStore,
    inflections: InflectionStore,
    supplementary_categories: Vec<String>,
    global_facets: OnceLock<GlobalFacets>,
}

impl WordRepository {
    /// Normalize a loaded payload into a repository
    pub fn from_payload(payload: WordsPayload) -> Self {
        let mut lemmas = LemmaStore::new();
        let mut inflections = InflectionStore::new();

        for (lang, language) in payload.languages {
            let records = normalize_lemmas(language.lemmas, &lang);
            if let Some(rows) = language.inflected {
                inflections.insert(lang.clone(), normalize_inflections(rows));
            }
            lemmas.insert(lang, records);
        }

        let supplementary_categories = payload
            .categories
            .into_iter()
            .filter_map(|entry| entry.category)
            .filter(|category| !category.is_empty())
            .collect();

        let repo = WordRepository {
            lemmas,
            inflections,
            supplementary_categories,
            global_facets: OnceLock::new(),
        };

        tracing::info!(
            "loaded {} lemmas across {} languages ({} with inflections)",
            repo.lemma_count(),
            repo.lemmas.len(),
            repo.inflections.len()
        );

        repo
    }

    /// Parse and normalize a JSON word list payload
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(Self::from_payload(parse::parse_words(json)?))
    }

    /// Lemma list of a language in source order; empty for unknown languages
    pub fn get_lemmas(&self, lang: &str) -> &[LemmaRecord] {
        self.lemmas.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inflected override for a concept, if the language has one
    pub fn get_inflected_form(&self, lang: &str, concept_id: &str) -> Option<&str> {
        self.inflections
            .get(lang)?
            .get(concept_id)
            .map(String::as_str)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.lemmas.contains_key(lang)
    }

    /// Codes of every loaded language, sorted
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.lemmas.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    pub fn supplementary_categories(&self) -> &[String] {
        &self.supplementary_categories
    }

    /// Total number of lemma records across all languages
    pub fn lemma_count(&self) -> usize {
        self.lemmas.values().map(Vec::len).sum()
    }

    /// Levels and categories seen anywhere in the repository
    pub fn global_facets(&self) -> &GlobalFacets {
        self.global_facets.get_or_init(|| facets::global_facets(self))
    }
}
